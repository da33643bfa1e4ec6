//! MenuP Server - 餐厅菜单管理服务
//!
//! # 架构概述
//!
//! 店主注册后维护菜单草稿，批量发布，并通过 slug 链接（可做成二维码）
//! 把只读菜单分享给顾客。核心功能：
//!
//! - **认证** (`auth`): JWT + Argon2 账户体系
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **菜单领域** (`menu`): 分类器与草稿/发布生命周期
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! menup-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证
//! ├── api/           # HTTP 路由和处理器
//! ├── menu/          # 分类器、生命周期策略
//! ├── db/            # 数据库层 (models + repositories)
//! └── utils/         # 错误、日志、校验等工具
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod menu;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use menu::{LifecyclePolicy, MenuSection, categorize};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __  ___                 ____
   /  |/  /__  ____  __  __/ __ \
  / /|_/ / _ \/ __ \/ / / / /_/ /
 / /  / /  __/ / / / /_/ / ____/
/_/  /_/\___/_/ /_/\__,_/_/

Scan, order, enjoy.
"#
    );
}
