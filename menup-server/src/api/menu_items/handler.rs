//! MenuItem API Handlers
//!
//! 所有操作都限定在当前账户的餐厅内；条目属于别家餐厅时按不存在处理。

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{DEFAULT_CATEGORY, MenuItem, MenuItemCreate, MenuItemUpdate};
use crate::db::repository::{MenuItemRepository, record_id};
use crate::utils::validation::{
    MAX_CATEGORY_LEN, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, validate_optional_text, validate_price,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Filter by publish state; omit to list everything
    pub published: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct PublishResponse {
    /// Number of drafts that were published
    pub published: usize,
}

fn restaurant_id(user: &CurrentUser) -> RecordId {
    record_id("restaurant", &user.restaurant)
}

/// Fetch one item and verify it belongs to the caller's restaurant.
///
/// 跨餐厅访问返回 404 而不是 403，避免泄露条目是否存在。
async fn owned_item(state: &ServerState, user: &CurrentUser, id: &str) -> AppResult<MenuItem> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu item {}", id)))?;

    if item.restaurant != restaurant_id(user) {
        return Err(AppError::not_found(format!("Menu item {}", id)));
    }

    Ok(item)
}

/// GET /api/menu-items - 获取本餐厅的菜单条目 (最新在前)
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo
        .find_by_restaurant(&restaurant_id(&user), query.published)
        .await?;
    Ok(Json(items))
}

/// GET /api/menu-items/{id} - 获取单个条目
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let item = owned_item(&state, &user, &id).await?;
    Ok(Json(item))
}

/// POST /api/menu-items - 创建条目 (总是草稿)
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    // Local validation before any store call
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&payload.category, "category", MAX_CATEGORY_LEN)?;
    validate_price(payload.price)?;

    let mut item = MenuItem::new(
        restaurant_id(&user),
        payload.name.trim().to_string(),
        payload.price,
        Utc::now().timestamp_millis(),
    );
    item.description = payload.description.filter(|d| !d.trim().is_empty());
    item.category = coerce_category(payload.category);
    item.is_available = payload.is_available.unwrap_or(true);
    item.is_special = payload.is_special.unwrap_or(false);

    let repo = MenuItemRepository::new(state.db.clone());
    let created = repo.create(item).await?;

    Ok(Json(created))
}

/// PUT /api/menu-items/{id} - 编辑条目
///
/// 只改 name/description/price/category/is_special；
/// 发布和可用状态有各自的操作。
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(mut payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&payload.category, "category", MAX_CATEGORY_LEN)?;
    if let Some(price) = payload.price {
        validate_price(price)?;
    }
    if let Some(category) = payload.category.take() {
        payload.category = Some(coerce_category(Some(category)));
    }

    // Ownership check before the write
    owned_item(&state, &user, &id).await?;

    let repo = MenuItemRepository::new(state.db.clone());
    let updated = repo.update(&id, payload).await?;

    Ok(Json(updated))
}

/// POST /api/menu-items/{id}/availability - 翻转单个条目的可用状态
pub async fn toggle_availability(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let item = owned_item(&state, &user, &id).await?;

    state
        .lifecycle
        .check_toggle(&item)
        .map_err(|e| AppError::business_rule(e.to_string()))?;

    let repo = MenuItemRepository::new(state.db.clone());
    let updated = repo.set_availability(&id, !item.is_available).await?;

    Ok(Json(updated))
}

/// POST /api/menu-items/publish - 批量发布本餐厅的所有草稿
///
/// 原子操作：要么全部翻转为已发布，要么全部保持草稿并报错。
/// 已发布的条目不受影响。
pub async fn publish(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<PublishResponse>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let published = repo.publish_all(&restaurant_id(&user)).await?;

    tracing::info!(restaurant = %user.restaurant, count = published, "Menu published");

    Ok(Json(PublishResponse { published }))
}

/// DELETE /api/menu-items/{id} - 删除条目
///
/// 默认策略只允许删除未发布的条目。
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let item = owned_item(&state, &user, &id).await?;

    state
        .lifecycle
        .check_delete(&item)
        .map_err(|e| AppError::business_rule(e.to_string()))?;

    let repo = MenuItemRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;

    Ok(Json(result))
}

/// Blank categories collapse to the default label at the store boundary
fn coerce_category(category: Option<String>) -> String {
    match category {
        Some(c) if !c.trim().is_empty() => c.trim().to_string(),
        _ => DEFAULT_CATEGORY.to_string(),
    }
}
