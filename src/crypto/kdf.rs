//! QRy 密钥派生函数（KDF）模块
//!
//! 本模块负责将用户输入的密码，通过 PBKDF2-HMAC-SHA256
//! 派生为对称加密密钥，用于后续 AEAD 加解密。
//!
//! 设计目标：
//! - 每条 vault 记录使用独立的随机 salt
//! - 相同 (password, salt) 必须派生出相同密钥（记录可重复解密）
//! - 敏感密钥材料在离开作用域后自动清零
//! - 迭代次数固定写入方案标识，调整必须走新的算法标识
//!
//! 输出：
//! - 32 字节密钥（适用于 XChaCha20-Poly1305 / AES-256-GCM）

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::error::QryError;

/// 派生密钥长度（256-bit）
pub const KEY_LEN: usize = 32;

/// PBKDF2 迭代次数（QRy v1，固定值）
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// 根据密码和 salt 派生对称加密密钥
///
/// #### 参数
/// - `password`：用户输入的密码字节
/// - `salt`：该记录对应的随机 salt
///
/// #### 返回
/// - 32 字节派生密钥（自动 zeroize）
///
/// #### 错误
/// - 密码或 salt 为空时返回 QryError::Internal
pub fn derive_key(password: &[u8], salt: &[u8]) -> Result<Zeroizing<[u8; KEY_LEN]>, QryError> {
    if password.is_empty() || salt.is_empty() {
        return Err(QryError::Internal);
    }

    // 使用 Zeroizing 包装，确保密钥在作用域结束后被清零
    let mut key = Zeroizing::new([0u8; KEY_LEN]);

    pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ITERATIONS, &mut key[..]);

    Ok(key)
}
