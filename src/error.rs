//! QRy 错误类型定义
//!
//! 核心操作一律返回类型化错误，不在库内打印、不在库内终止进程。
//! 如何向用户呈现、以什么退出码结束，由 CLI 边界层决定。

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QryError {
    /// 引用的文件（QR 图片或 vault 文件）不存在。
    #[error("file {} does not exist", .0.display())]
    NotFound(PathBuf),

    /// 外部 QR 解码器失败，或其输出中没有可用的 secret。
    #[error("QR decode failed: {0}")]
    QrDecode(String),

    /// vault 记录携带了无法识别的算法标识。
    #[error("encryption algorithm {0} is not supported")]
    UnsupportedAlgorithm(String),

    /// AEAD 认证失败：密码错误，或 token 被篡改。
    #[error("invalid password or tampered vault record")]
    Authentication,

    /// 解出的 secret 不是合法的 base32。
    #[error("OTP secret is not valid base32")]
    InvalidSecret,

    /// vault 记录本身损坏（JSON / base64 无法解析）。
    #[error("corrupted vault record: {0}")]
    Corrupted(String),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("internal error")]
    Internal,
}
