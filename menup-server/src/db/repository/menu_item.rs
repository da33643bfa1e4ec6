//! MenuItem Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{MenuItem, MenuItemUpdate};
use serde::Serialize;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a restaurant's items, newest first, optionally filtered by
    /// publish state (owner views)
    pub async fn find_by_restaurant(
        &self,
        restaurant: &RecordId,
        published: Option<bool>,
    ) -> RepoResult<Vec<MenuItem>> {
        let mut sql =
            String::from("SELECT * FROM menu_item WHERE restaurant = $restaurant");
        if published.is_some() {
            sql.push_str(" AND is_published = $published");
        }
        sql.push_str(" ORDER BY created_at DESC");

        let mut query = self
            .base
            .db()
            .query(sql)
            .bind(("restaurant", restaurant.to_string()));
        if let Some(published) = published {
            query = query.bind(("published", published));
        }

        let items: Vec<MenuItem> = query.await?.take(0)?;
        Ok(items)
    }

    /// Find a restaurant's published items in menu order (public view)
    pub async fn find_published(&self, restaurant: &RecordId) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query(
                "SELECT * FROM menu_item \
                 WHERE restaurant = $restaurant AND is_published = true \
                 ORDER BY created_at",
            )
            .bind(("restaurant", restaurant.to_string()))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find a menu item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let item: Option<MenuItem> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(item)
    }

    /// Create a new menu item (always enters the draft state)
    pub async fn create(&self, item: MenuItem) -> RepoResult<MenuItem> {
        let created: Option<MenuItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    /// Merge-update a menu item; publish/availability state is untouched
    /// because [`MenuItemUpdate`] does not carry those fields
    pub async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        let updated: Option<MenuItem> = self
            .base
            .db()
            .update(record_id(TABLE, id))
            .merge(data)
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    /// Set the availability flag of a single item
    pub async fn set_availability(&self, id: &str, is_available: bool) -> RepoResult<MenuItem> {
        #[derive(Serialize)]
        struct AvailabilityUpdate {
            is_available: bool,
        }

        let updated: Option<MenuItem> = self
            .base
            .db()
            .update(record_id(TABLE, id))
            .merge(AvailabilityUpdate { is_available })
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    /// Publish every draft of one restaurant.
    ///
    /// The whole statement runs as one transaction inside SurrealDB, so the
    /// flip is all-or-nothing: on failure every draft keeps
    /// `is_published = false`. Items already published are unaffected.
    /// Returns the number of items that were published.
    pub async fn publish_all(&self, restaurant: &RecordId) -> RepoResult<usize> {
        let published: Vec<MenuItem> = self
            .base
            .db()
            .query(
                "UPDATE menu_item SET is_published = true \
                 WHERE restaurant = $restaurant AND is_published = false \
                 RETURN AFTER",
            )
            .bind(("restaurant", restaurant.to_string()))
            .await?
            .take(0)?;
        Ok(published.len())
    }

    /// Hard delete a menu item (lifecycle policy is enforced by the caller)
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<MenuItem> = self.base.db().delete(record_id(TABLE, id)).await?;
        Ok(deleted.is_some())
    }
}
