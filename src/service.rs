//! QRy 凭据服务：注册与生成的编排
//!
//! 注册流程（严格顺序）：
//! 1. 生成 16 字节随机 salt
//! 2. KDF 从密码派生 32 字节密钥
//! 3. AEAD seal 加密 secret
//! 4. 组装 vault 记录（算法标识 + salt + token）
//!
//! 生成流程（严格顺序）：
//! 1. 校验记录的算法标识（不认识则直接拒绝，不尝试解密）
//! 2. 用记录中的 salt + 密码重新派生密钥
//! 3. AEAD open 解出 secret（认证失败即密码错误或被篡改）
//! 4. 按当前时间窗口计算 TOTP
//!
//! 注意：
//! - 本模块不做持久化、不做密码输入，只做纯编排
//! - 解出的 secret 以 Zeroizing 持有，离开作用域即清零

use rand::{RngCore, rngs::OsRng};
use zeroize::Zeroizing;

use crate::algorithm::{AeadAlgorithm, DEFAULT_AEAD_ALGORITHM};
use crate::crypto::{aead, kdf};
use crate::error::QryError;
use crate::format::record::VaultRecord;
use crate::otp;

/// KDF salt 长度（字节）
pub const SALT_SIZE: usize = 16;

/// 使用默认算法注册 secret
pub fn register(secret: &[u8], password: &str) -> Result<VaultRecord, QryError> {
    register_with_algorithm(secret, password, DEFAULT_AEAD_ALGORITHM)
}

/// 使用指定算法注册 secret
pub fn register_with_algorithm(
    secret: &[u8],
    password: &str,
    algorithm: AeadAlgorithm,
) -> Result<VaultRecord, QryError> {
    // ---------- 生成 salt ----------
    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);

    // ---------- KDF 派生密钥 ----------
    let key = kdf::derive_key(password.as_bytes(), &salt)?;

    // ---------- AEAD 加密 ----------
    let token = aead::seal(algorithm, &key, secret)?;

    Ok(VaultRecord::new(algorithm, &salt, &token))
}

/// 从 vault 记录生成当前 OTP
///
/// #### 错误
/// - 算法标识无法识别：UnsupportedAlgorithm
/// - 密码错误或 token 被篡改：Authentication
/// - 解出的 secret 不是合法 base32：InvalidSecret
pub fn generate(record: &VaultRecord, password: &str) -> Result<String, QryError> {
    // ---------- 校验算法标识 ----------
    let algorithm = record.algorithm()?;

    let salt = record.salt_bytes()?;
    let token = record.token_bytes()?;

    // ---------- KDF 派生密钥 ----------
    let key = kdf::derive_key(password.as_bytes(), &salt)?;

    // ---------- AEAD 解密 ----------
    let secret = Zeroizing::new(aead::open(algorithm, &key, &token)?);

    // ---------- 计算 TOTP ----------
    otp::totp(&secret)
}
