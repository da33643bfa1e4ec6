//! Restaurant Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Restaurant ID type
pub type RestaurantId = RecordId;

/// Restaurant model
///
/// `slug` is the unique public URL key (`/menu/{slug}`), derived from the
/// display name at signup and stored lowercase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RestaurantId>,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Record link to the owning account
    #[serde(with = "serde_helpers::record_id")]
    pub owner: RecordId,
    #[serde(default)]
    pub created_at: i64,
}

impl Restaurant {
    pub fn new(name: String, slug: String, owner: RecordId, created_at: i64) -> Self {
        Self {
            id: None,
            name,
            slug,
            description: None,
            logo_url: None,
            owner,
            created_at,
        }
    }
}
