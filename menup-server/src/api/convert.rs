//! API 响应 DTO 与模型转换

use serde::Serialize;

use crate::core::Config;
use crate::db::models::{Owner, Restaurant};

/// Owner account info returned by auth endpoints
#[derive(Debug, Clone, Serialize)]
pub struct OwnerInfo {
    pub id: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: i64,
}

impl From<&Owner> for OwnerInfo {
    fn from(owner: &Owner) -> Self {
        Self {
            id: owner.id.as_ref().map(|i| i.to_string()).unwrap_or_default(),
            email: owner.email.clone(),
            is_active: owner.is_active,
            created_at: owner.created_at,
        }
    }
}

/// Restaurant info returned to the owner, including the shareable public URL
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantInfo {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// `<PUBLIC_ORIGIN>/menu/<slug>` — share as link or QR code
    pub public_url: String,
}

impl RestaurantInfo {
    pub fn from_model(restaurant: &Restaurant, config: &Config) -> Self {
        Self {
            id: restaurant
                .id
                .as_ref()
                .map(|i| i.to_string())
                .unwrap_or_default(),
            name: restaurant.name.clone(),
            slug: restaurant.slug.clone(),
            description: restaurant.description.clone(),
            logo_url: restaurant.logo_url.clone(),
            public_url: config.public_menu_url(&restaurant.slug),
        }
    }
}
