//! QRy AEAD 封装模块
//!
//! 本模块按算法标识分发到具体实现，对外只暴露 seal / open 两个入口。
//!
//! 功能说明：
//! - 提供“加密 + 完整性校验”一体化能力
//! - token 自包含（nonce || ciphertext + tag），解密只需要密钥
//! - 解密失败即表示：密码错误 或 数据被篡改
//!
//! 安全约束：
//! - 每次 seal 必须使用全新的 nonce（由具体算法内部生成）
//! - 不允许在未校验通过的情况下输出任何明文

use crate::algorithm::AeadAlgorithm;
use crate::algorithms::{aes_256_gcm, xchacha20_poly1305};
use crate::crypto::kdf::KEY_LEN;
use crate::error::QryError;

/// 使用指定算法加密数据
///
/// #### 参数
/// - `key`：32 字节对称密钥（来自 KDF）
/// - `plaintext`：待加密的数据
///
/// #### 返回
/// - 自包含 token（nonce + 密文 + 认证 tag）
pub fn seal(
    algorithm: AeadAlgorithm,
    key: &[u8; KEY_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>, QryError> {
    match algorithm {
        AeadAlgorithm::XChaCha20Poly1305 => xchacha20_poly1305::seal(key, plaintext),
        AeadAlgorithm::Aes256Gcm => aes_256_gcm::seal(key, plaintext),
    }
}

/// 使用指定算法解密 token
///
/// #### 错误
/// - 若密码错误或数据被篡改，返回 QryError::Authentication
///
/// #### 安全保证
/// - 在认证未通过前，不会泄露任何明文数据
pub fn open(
    algorithm: AeadAlgorithm,
    key: &[u8; KEY_LEN],
    token: &[u8],
) -> Result<Vec<u8>, QryError> {
    match algorithm {
        AeadAlgorithm::XChaCha20Poly1305 => xchacha20_poly1305::open(key, token),
        AeadAlgorithm::Aes256Gcm => aes_256_gcm::open(key, token),
    }
}
