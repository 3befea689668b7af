//! CampusMaster - 教学平台后端服务
//!
//! 基于 Actix Web 构建，提供登录与课程目录的模拟接口，并托管前端页面外壳。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（内存）
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
