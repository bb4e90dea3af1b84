//! QRy 存储路径。
//!
//! vault 文件默认放在用户主目录下的 `~/.qry/qry.json`，
//! 目录首次创建时权限收紧为 0700。

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::QryError;

pub const STORAGE_DIR_NAME: &str = ".qry";
pub const CONFIG_FILE_NAME: &str = "qry.json";

/// QRy 存储目录（`~/.qry`）
pub fn storage_dir() -> Result<PathBuf, QryError> {
    let home = dirs::home_dir().ok_or(QryError::Internal)?;

    Ok(home.join(STORAGE_DIR_NAME))
}

/// 默认 vault 文件路径（`~/.qry/qry.json`）
pub fn default_config_path() -> Result<PathBuf, QryError> {
    Ok(storage_dir()?.join(CONFIG_FILE_NAME))
}

/// 确保存储目录存在
///
/// #### 错误
/// - 路径被一个非目录文件占用时返回 I/O 错误（AlreadyExists）
pub fn ensure_storage_dir() -> Result<PathBuf, QryError> {
    let dir = storage_dir()?;

    if dir.exists() && !dir.is_dir() {
        return Err(QryError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "a file already exists that does not belong to QRy",
        )));
    }

    if !dir.exists() {
        fs::create_dir_all(&dir)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&dir, fs::Permissions::from_mode(0o700))?;
        }
    }

    Ok(dir)
}
