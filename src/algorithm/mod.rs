//! QRy AEAD 算法标识。
//!
//! 算法标识同时充当 vault 记录的版本标签：
//! - 每个变体对应一种确定的加密方案
//! - 新方案只能新增变体，不得复用旧标识
//! - 无法识别的标识必须在解密前被拒绝

/// 支持的 AEAD 算法。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AeadAlgorithm {
    XChaCha20Poly1305,
    Aes256Gcm,
}

impl AeadAlgorithm {
    pub const XCHACHA20_POLY1305_ID: &'static str = "aead-xchacha20poly1305-v1";
    pub const AES_256_GCM_ID: &'static str = "aead-aes256gcm-v1";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::XChaCha20Poly1305 => Self::XCHACHA20_POLY1305_ID,
            Self::Aes256Gcm => Self::AES_256_GCM_ID,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            Self::XCHACHA20_POLY1305_ID => Some(Self::XChaCha20Poly1305),
            Self::AES_256_GCM_ID => Some(Self::Aes256Gcm),
            _ => None,
        }
    }
}

/// 默认算法：XChaCha20-Poly1305。
pub const DEFAULT_AEAD_ALGORITHM: AeadAlgorithm = AeadAlgorithm::XChaCha20Poly1305;
