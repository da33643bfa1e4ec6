//! Owner Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::Owner;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "owner";

#[derive(Clone)]
pub struct OwnerRepository {
    base: BaseRepository,
}

impl OwnerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find an account by email (stored lowercase)
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Owner>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM owner WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let owners: Vec<Owner> = result.take(0)?;
        Ok(owners.into_iter().next())
    }

    /// Find an account by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Owner>> {
        let owner: Option<Owner> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(owner)
    }

    /// Create a new account
    pub async fn create(&self, owner: Owner) -> RepoResult<Owner> {
        if self.find_by_email(&owner.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Account '{}' already exists",
                owner.email
            )));
        }

        let created: Option<Owner> = self.base.db().create(TABLE).content(owner).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create owner".to_string()))
    }

    /// Hard delete an account (signup rollback)
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<Owner> = self.base.db().delete(record_id(TABLE, id)).await?;
        Ok(deleted.is_some())
    }
}
