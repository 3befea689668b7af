//! 配置管理
//!
//! 配置来源按优先级从低到高：内置默认值、`config.toml`、`config.<APP_ENV>.toml`、
//! `CAMPUS_` 前缀环境变量、常用独立环境变量。

mod r#impl;
mod structs;

pub use structs::*;
