//! QRy OTP 引擎（RFC 4226 / RFC 6238）
//!
//! 计算流程（严格顺序）：
//! 1. secret 做 base32 补齐（'=' 补到 8 的倍数）后解码
//! 2. counter = floor(unix_time / 30)，按 8 字节大端编码
//! 3. HMAC-SHA1(key = secret, message = counter) → 20 字节摘要
//! 4. offset = 摘要最后一个字节的低 4 位
//! 5. 从 offset 处取 4 字节大端整数，最高位清零（31 bit）
//! 6. OTP = 该值 mod 10^6，左侧补零到 6 位
//!
//! 注意：
//! - 固定 SHA-1、固定 30 秒步长、固定 6 位，无漂移容忍
//! - 同一时间窗口内结果完全确定，不存储任何状态

use std::time::{SystemTime, UNIX_EPOCH};

use base32::Alphabet;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use zeroize::Zeroizing;

use crate::error::QryError;

type HmacSha1 = Hmac<Sha1>;

/// OTP 位数
pub const OTP_DIGITS: u32 = 6;

/// TOTP 时间步长（秒）
pub const TIME_STEP_SECS: u64 = 30;

/// 按系统时钟计算当前 TOTP
///
/// #### 错误
/// - 系统时钟早于 unix epoch 时返回 QryError::Internal
pub fn totp(secret_b32: &[u8]) -> Result<String, QryError> {
    totp_at(secret_b32, unix_now()?)
}

/// 按指定 unix 时间计算 TOTP
///
/// 时钟作为参数传入，测试可以绕过系统时间、直接验证窗口边界。
pub fn totp_at(secret_b32: &[u8], unix_time: u64) -> Result<String, QryError> {
    let key = Zeroizing::new(decode_secret(secret_b32)?);

    Ok(hotp(&key, unix_time / TIME_STEP_SECS))
}

/// RFC 4226 HOTP：HMAC-SHA1 + 动态截断
pub fn hotp(key: &[u8], counter: u64) -> String {
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    // 动态截断（RFC 4226 §5.3）
    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    let binary = ((digest[offset] as u32 & 0x7f) << 24)
        | ((digest[offset + 1] as u32) << 16)
        | ((digest[offset + 2] as u32) << 8)
        | (digest[offset + 3] as u32);

    format!(
        "{:0width$}",
        binary % 10u32.pow(OTP_DIGITS),
        width = OTP_DIGITS as usize
    )
}

/// 解码 base32 secret
///
/// 输入先用 '=' 补齐到 8 的倍数，再按 RFC 4648 解码。
///
/// #### 错误
/// - 非 UTF-8、为空、或 base32 解码失败时返回 QryError::InvalidSecret
pub fn decode_secret(secret_b32: &[u8]) -> Result<Vec<u8>, QryError> {
    let text = std::str::from_utf8(secret_b32).map_err(|_| QryError::InvalidSecret)?;
    let text = text.trim();

    if text.is_empty() {
        return Err(QryError::InvalidSecret);
    }

    let mut padded = text.to_string();
    while padded.len() % 8 != 0 {
        padded.push('=');
    }

    base32::decode(Alphabet::Rfc4648 { padding: true }, &padded).ok_or(QryError::InvalidSecret)
}

fn unix_now() -> Result<u64, QryError> {
    // 时钟早于 epoch 没有合法的 counter，直接报错而不是折算成 0
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| QryError::Internal)?;

    Ok(now.as_secs())
}
