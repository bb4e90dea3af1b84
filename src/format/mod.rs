//! QRy 持久化格式。

pub mod record;
