use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::menu::LifecyclePolicy;
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 是核心数据结构，使用 Arc / 浅拷贝实现低成本 Clone，
/// 作为 axum 的应用状态在所有 handler 之间共享。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// 菜单生命周期策略 (删除/切换许可)
    pub lifecycle: LifecyclePolicy,
}

impl ServerState {
    /// 创建服务器状态 (手动构造，测试时注入内存数据库)
    ///
    /// 生产路径使用 [`ServerState::initialize`]
    pub fn new(config: Config, db: Surreal<Db>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            db,
            jwt_service,
            lifecycle: LifecyclePolicy::default(),
        }
    }

    /// 初始化服务器状态：打开数据库并应用 schema
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = crate::db::connect(&config.work_dir).await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self::new(config.clone(), db, jwt_service))
    }

    /// 获取数据库连接
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
