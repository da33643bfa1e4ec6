//! Owner Model
//!
//! 餐厅账户（店主）。每个 Owner 恰好拥有一家 Restaurant。

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Owner ID type
pub type OwnerId = RecordId;

/// Owner account matching SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<OwnerId>,
    pub email: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

/// Signup payload
#[derive(Debug, Clone, Deserialize)]
pub struct OwnerCreate {
    pub email: String,
    pub password: String,
    pub restaurant_name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
}

impl Owner {
    pub fn new(email: String, hash_pass: String, created_at: i64) -> Self {
        Self {
            id: None,
            email,
            hash_pass,
            is_active: true,
            created_at,
        }
    }

    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}
