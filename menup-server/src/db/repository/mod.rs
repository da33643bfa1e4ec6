//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables.

// Accounts
pub mod owner;
pub mod restaurant;

// Menu Domain
pub mod menu_item;

// Re-exports
pub use menu_item::MenuItemRepository;
pub use owner::OwnerRepository;
pub use restaurant::RestaurantRepository;

use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// 使用 surrealdb::RecordId 处理所有 ID：
//   - 解析: let id: RecordId = "menu_item:abc".parse()?;
//   - 创建: let id = RecordId::from_table_key("menu_item", "abc");
//   - CRUD: db.select(id) / db.delete(id) 直接使用 RecordId

/// Build a [`RecordId`] for `table` from either a bare key or a "table:id"
/// string coming from an API path.
pub fn record_id(table: &str, id: &str) -> RecordId {
    if let Ok(parsed) = id.parse::<RecordId>()
        && parsed.table() == table
    {
        return parsed;
    }
    RecordId::from_table_key(table, id)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
