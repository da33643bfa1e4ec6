//! MenuItem Model
//!
//! 菜单条目。生命周期：创建即草稿 (`is_published = false`)，批量发布后
//! 对公共菜单可见（仍受 `is_available` 控制）。

use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// MenuItem ID type
pub type MenuItemId = RecordId;

/// Category assigned when the owner leaves the field blank
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Menu item model matching SurrealDB schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<MenuItemId>,
    /// Record link to the owning restaurant
    #[serde(with = "serde_helpers::record_id")]
    pub restaurant: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Non-negative amount in the restaurant's currency
    pub price: Decimal,
    #[serde(default = "default_category")]
    pub category: String,
    /// Hidden items are excluded from the public menu even when published
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_available: bool,
    /// false = draft (owner-only), true = on the public menu
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_published: bool,
    /// Grouped under "Today's Special" regardless of category (display only)
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_special: bool,
    #[serde(default)]
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl MenuItem {
    pub fn new(restaurant: RecordId, name: String, price: Decimal, created_at: i64) -> Self {
        Self {
            id: None,
            restaurant,
            name,
            description: None,
            price,
            category: DEFAULT_CATEGORY.to_string(),
            is_available: true,
            is_published: false,
            is_special: false,
            created_at,
        }
    }
}

/// Create menu item payload — new items always enter the draft state
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Option<String>,
    pub is_available: Option<bool>,
    pub is_special: Option<bool>,
}

/// Update menu item payload
///
/// Edits mutate name/description/price/category/is_special in place and never
/// change publish or availability state (those have dedicated operations).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_special: Option<bool>,
}
