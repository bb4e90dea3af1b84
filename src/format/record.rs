//! QRy vault 记录实现
//!
//! 本模块定义并实现持久化的 vault 记录：一个 JSON 对象，
//! 字段与磁盘布局一一对应：
//!
//! - `alg`：算法标识字符串（版本标签）
//! - `key`：base64 编码的 AEAD token（nonce + 密文 + tag）
//! - `salt`：base64 编码的 KDF salt
//!
//! 记录是整个 vault 文件的“格式锚点”：
//! - 解密前必须先识别 `alg`，无法识别必须直接拒绝
//! - 记录一旦写入即不可变，重新注册是整体覆盖
//!
//! 后续版本只能通过新的 `alg` 标识演进，不得改动已有字段含义。

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};

use crate::algorithm::AeadAlgorithm;
use crate::error::QryError;
use crate::fs::atomic;

/// 持久化的 vault 记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultRecord {
    pub alg: String,
    pub key: String,
    pub salt: String,
}

impl VaultRecord {
    /// 从注册结果创建新记录
    pub fn new(algorithm: AeadAlgorithm, salt: &[u8], token: &[u8]) -> Self {
        Self {
            alg: algorithm.as_str().to_string(),
            key: BASE64.encode(token),
            salt: BASE64.encode(salt),
        }
    }

    /// 解析记录携带的算法标识
    ///
    /// 无法识别的标识返回 UnsupportedAlgorithm，调用方不得继续解密。
    pub fn algorithm(&self) -> Result<AeadAlgorithm, QryError> {
        AeadAlgorithm::parse(&self.alg)
            .ok_or_else(|| QryError::UnsupportedAlgorithm(self.alg.clone()))
    }

    pub fn salt_bytes(&self) -> Result<Vec<u8>, QryError> {
        BASE64
            .decode(&self.salt)
            .map_err(|e| QryError::Corrupted(format!("invalid salt encoding: {e}")))
    }

    pub fn token_bytes(&self) -> Result<Vec<u8>, QryError> {
        BASE64
            .decode(&self.key)
            .map_err(|e| QryError::Corrupted(format!("invalid token encoding: {e}")))
    }

    /// 从文件加载记录
    ///
    /// #### 错误
    /// - 文件不存在返回 NotFound
    /// - JSON 无法解析返回 Corrupted
    pub fn load(path: &Path) -> Result<Self, QryError> {
        if !path.is_file() {
            return Err(QryError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;

        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| QryError::Corrupted(format!("invalid vault record: {e}")))
    }

    /// 将记录原子写入文件
    ///
    /// 写入走临时文件 + rename，失败不会留下半截记录。
    /// unix 下文件权限收紧为 0600。
    pub fn save(&self, path: &Path) -> Result<(), QryError> {
        atomic::write_atomic(path, |file| {
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
            }

            serde_json::to_writer(file, self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        Ok(())
    }
}
