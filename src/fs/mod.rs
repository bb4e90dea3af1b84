//! QRy 文件系统辅助：原子写入与存储路径。

pub mod atomic;
pub mod paths;
