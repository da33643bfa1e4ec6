//! Public Menu Handlers
//!
//! 面向顾客的只读菜单，按 slug 查找，无需认证。

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::MenuItem;
use crate::db::repository::{MenuItemRepository, RestaurantRepository};
use crate::menu::{categorize, public_view};
use crate::utils::{AppError, AppResult, slug};

/// Restaurant header shown above the menu
#[derive(Debug, Serialize)]
pub struct PublicRestaurant {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// One item as rendered to customers
#[derive(Debug, Serialize)]
pub struct PublicMenuItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
}

impl From<MenuItem> for PublicMenuItem {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id.as_ref().map(|i| i.to_string()).unwrap_or_default(),
            name: item.name,
            description: item.description,
            price: item.price,
        }
    }
}

/// One ordered category section
#[derive(Debug, Serialize)]
pub struct PublicMenuSection {
    pub category: String,
    pub items: Vec<PublicMenuItem>,
}

#[derive(Debug, Serialize)]
pub struct PublicMenuResponse {
    pub restaurant: PublicRestaurant,
    pub sections: Vec<PublicMenuSection>,
}

/// GET /api/menu/{slug} - 公共菜单
///
/// Slug 先归一化 (trim + lowercase) 再查找。只返回已发布且可用的条目，
/// 按分类器的固定顺序分组。
pub async fn get_menu(
    State(state): State<ServerState>,
    Path(raw_slug): Path<String>,
) -> AppResult<Json<PublicMenuResponse>> {
    let normalized = slug::normalize_slug(&raw_slug);

    let restaurant = RestaurantRepository::new(state.db.clone())
        .find_by_slug(&normalized)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Restaurant '{}'", normalized)))?;

    let restaurant_id = restaurant
        .id
        .clone()
        .ok_or_else(|| AppError::internal("Restaurant record has no id".to_string()))?;

    let items = MenuItemRepository::new(state.db.clone())
        .find_published(&restaurant_id)
        .await?;

    // Visibility rule, then deterministic grouping
    let sections = categorize(public_view(items))
        .into_iter()
        .map(|section| PublicMenuSection {
            category: section.category,
            items: section.items.into_iter().map(PublicMenuItem::from).collect(),
        })
        .collect();

    Ok(Json(PublicMenuResponse {
        restaurant: PublicRestaurant {
            name: restaurant.name,
            slug: restaurant.slug,
            description: restaurant.description,
            logo_url: restaurant.logo_url,
        },
        sections,
    }))
}
