//! QRy vault 文件的原子写入。
//!
//! vault 只有一个目标文件，覆盖写入走同目录的临时文件：
//! 写完、sync 落盘、再 rename 原子替换。任何一步失败，
//! 目标位置上要么还是旧记录、要么什么都没有，不会出现半截记录。

use std::fs::{self, File};
use std::io;
use std::path::Path;

/// 原子写 vault 文件。
///
/// 流程：
/// 1. 在目标同目录创建 `.{文件名}.tmp-<pid>` 临时文件；
/// 2. 调用 `write_fn` 写入完整内容；
/// 3. sync 成功后，使用 rename 原子替换目标文件。
pub fn write_atomic<F>(target: &Path, write_fn: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let parent = target.parent().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "vault 路径没有父目录，无法执行原子写入")
    })?;

    let file_name = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "vault 路径没有文件名，无法执行原子写入")
        })?;

    fs::create_dir_all(parent)?;

    let tmp_path = parent.join(format!(".{file_name}.tmp-{}", std::process::id()));
    let mut tmp_file = File::create(&tmp_path)?;

    if let Err(err) = write_fn(&mut tmp_file) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    tmp_file.sync_all()?;

    fs::rename(&tmp_path, target)?;

    Ok(())
}
