//! Database Module
//!
//! Embedded SurrealDB storage (RocksDB backend) and schema definitions.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Namespace / database names for the embedded store
const NAMESPACE: &str = "menup";
const DATABASE: &str = "menup";

/// Open the embedded database under the work directory and apply schema
/// definitions.
pub async fn connect(work_dir: &str) -> Result<Surreal<Db>, AppError> {
    let path = Path::new(work_dir).join("menup.db");
    let db = Surreal::new::<RocksDb>(path)
        .await
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

    define_schema(&db).await?;

    tracing::info!("Database connection established (SurrealDB RocksDB)");
    Ok(db)
}

/// Apply table and index definitions (idempotent).
///
/// 唯一索引保证：账户 email 唯一、餐厅 slug 唯一。
pub async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        "DEFINE TABLE IF NOT EXISTS owner SCHEMALESS;
         DEFINE TABLE IF NOT EXISTS restaurant SCHEMALESS;
         DEFINE TABLE IF NOT EXISTS menu_item SCHEMALESS;
         DEFINE INDEX IF NOT EXISTS owner_email_idx ON TABLE owner COLUMNS email UNIQUE;
         DEFINE INDEX IF NOT EXISTS restaurant_slug_idx ON TABLE restaurant COLUMNS slug UNIQUE;
         DEFINE INDEX IF NOT EXISTS menu_item_restaurant_idx ON TABLE menu_item COLUMNS restaurant;",
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;

    tracing::info!("Database schema definitions applied");
    Ok(())
}
