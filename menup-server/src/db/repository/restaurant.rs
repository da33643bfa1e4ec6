//! Restaurant Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::Restaurant;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "restaurant";

#[derive(Clone)]
pub struct RestaurantRepository {
    base: BaseRepository,
}

impl RestaurantRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a restaurant by its public slug (caller normalizes first)
    pub async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Restaurant>> {
        let slug_owned = slug.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM restaurant WHERE slug = $slug LIMIT 1")
            .bind(("slug", slug_owned))
            .await?;
        let restaurants: Vec<Restaurant> = result.take(0)?;
        Ok(restaurants.into_iter().next())
    }

    /// Find the restaurant belonging to an owner account
    ///
    /// `owner` 以 "owner:id" 字符串形式存储，绑定时保持同一表示
    pub async fn find_by_owner(&self, owner: &RecordId) -> RepoResult<Option<Restaurant>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM restaurant WHERE owner = $owner LIMIT 1")
            .bind(("owner", owner.to_string()))
            .await?;
        let restaurants: Vec<Restaurant> = result.take(0)?;
        Ok(restaurants.into_iter().next())
    }

    /// Find a restaurant by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Restaurant>> {
        let restaurant: Option<Restaurant> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(restaurant)
    }

    /// Create a new restaurant
    pub async fn create(&self, restaurant: Restaurant) -> RepoResult<Restaurant> {
        // Check duplicate slug
        if self.find_by_slug(&restaurant.slug).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Restaurant slug '{}' already exists",
                restaurant.slug
            )));
        }

        let created: Option<Restaurant> =
            self.base.db().create(TABLE).content(restaurant).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create restaurant".to_string()))
    }
}
