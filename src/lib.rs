pub mod algorithm;
pub mod algorithms;
pub mod crypto;
pub mod error;
pub mod format;
pub mod fs;
pub mod otp;
pub mod qr;
pub mod service;

pub use algorithm::AeadAlgorithm;
pub use error::QryError;
pub use format::record::VaultRecord;
pub use qr::{QrDecoder, ZbarImg};

use std::path::Path;

use zeroize::Zeroizing;

/// 注册：QR 图片 → secret → 加密 → vault 文件。
pub fn register(
    decoder: &dyn QrDecoder,
    qrcode: &Path,
    config: &Path,
    password: &str,
) -> Result<(), QryError> {
    let payload = decoder.decode(qrcode)?;
    let secret = Zeroizing::new(qr::secret_from_otpauth(&payload)?);

    let record = service::register(secret.as_bytes(), password)?;

    record.save(config)
}

/// 生成：vault 文件 → 解密 → 当前 OTP。
pub fn generate(config: &Path, password: &str) -> Result<String, QryError> {
    let record = VaultRecord::load(config)?;

    service::generate(&record, password)
}
