//! QRy AEAD 算法实现，按方案分文件。

pub mod aes_256_gcm;
pub mod xchacha20_poly1305;
