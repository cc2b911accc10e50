// 电影目录服务库
//
// 本库提供电影记录的核心功能，包括：
// - 数据校验与表单数据规范化
// - 文档存储的增删改查
// - JSON / 浏览器跳转两种响应模式

pub mod api;
pub mod config;
pub mod database;
pub mod models;
pub mod presentation;
pub mod services;
