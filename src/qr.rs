//! QRy QR 解码协作者
//!
//! 核心本身不依赖图片格式或子进程执行：解码器以 trait 形式注入，
//! 生产实现调用外部二进制 `zbarimg`，测试可以替换为假实现。
//!
//! zbarimg 约定：
//! - 成功时 stdout 输出 `QR-Code:otpauth://...` 形式的一行
//! - 非零退出码视为解码失败

use std::path::Path;
use std::process::Command;

use url::Url;

use crate::error::QryError;

/// QR 图片 → 文本载荷 的解码接口。
pub trait QrDecoder {
    /// 解码图片，返回其中的文本载荷（通常是 otpauth URL）。
    fn decode(&self, image: &Path) -> Result<String, QryError>;
}

/// 基于外部 `zbarimg` 二进制的解码器。
pub struct ZbarImg;

impl QrDecoder for ZbarImg {
    fn decode(&self, image: &Path) -> Result<String, QryError> {
        if !image.is_file() {
            return Err(QryError::NotFound(image.to_path_buf()));
        }

        let output = Command::new("zbarimg").arg("-q").arg(image).output()?;

        if !output.status.success() {
            return Err(QryError::QrDecode(format!(
                "zbarimg failed to parse {}",
                image.display()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|_| QryError::QrDecode("zbarimg produced non-UTF-8 output".to_string()))
    }
}

/// 从 otpauth URL 中提取 `secret` 查询参数
///
/// zbarimg 会给载荷加上 `QR-Code:` 前缀，这里先剥掉再解析。
/// URL 解析（含百分号解码）交给 url crate。
///
/// #### 错误
/// - URL 不合法、或没有 `secret` 参数时返回 QryError::QrDecode
pub fn secret_from_otpauth(payload: &str) -> Result<String, QryError> {
    let raw = payload.trim();
    let raw = raw.strip_prefix("QR-Code:").unwrap_or(raw);

    let url =
        Url::parse(raw).map_err(|e| QryError::QrDecode(format!("invalid otpauth URL: {e}")))?;

    url.query_pairs()
        .find(|(name, _)| name == "secret")
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| QryError::QrDecode("otpauth URL has no secret parameter".to_string()))
}
