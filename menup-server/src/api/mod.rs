//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 注册/登录/当前账户
//! - [`restaurant`] - 餐厅资料 (含公共链接)
//! - [`menu_items`] - 菜单条目管理 (草稿、编辑、发布)
//! - [`public_menu`] - 公共菜单 (按 slug，无需认证)

pub mod convert;

pub mod auth;
pub mod health;
pub mod restaurant;

// Menu API
pub mod menu_items;
pub mod public_menu;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
