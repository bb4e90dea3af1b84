//! QRy 密码学原语：密钥派生与 AEAD 封装。

pub mod aead;
pub mod kdf;
