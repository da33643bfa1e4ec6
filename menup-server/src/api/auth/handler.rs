//! Authentication Handlers
//!
//! Handles signup, login and current-account lookup

use std::sync::Arc;
use std::time::Duration;

use axum::{Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::api::convert::{OwnerInfo, RestaurantInfo};
use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::db::models::{Owner, OwnerCreate, Restaurant};
use crate::db::repository::{OwnerRepository, RestaurantRepository};
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URL_LEN, validate_email, validate_optional_text,
    validate_password, validate_required_text,
};
use crate::utils::{AppError, AppResult, slug};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub owner: OwnerInfo,
    pub restaurant: RestaurantInfo,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub owner: OwnerInfo,
    pub restaurant: RestaurantInfo,
}

/// POST /api/auth/signup - 注册账户并创建餐厅
///
/// Slug 由餐厅名派生，全局唯一；注册成功直接返回令牌。
pub async fn signup(
    State(state): State<ServerState>,
    Json(req): Json<OwnerCreate>,
) -> AppResult<Json<LoginResponse>> {
    // Local validation before any store call
    validate_email(&req.email)?;
    validate_password(&req.password)?;
    validate_required_text(&req.restaurant_name, "restaurant_name", MAX_NAME_LEN)?;
    validate_optional_text(&req.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&req.logo_url, "logo_url", MAX_URL_LEN)?;

    let email = req.email.trim().to_ascii_lowercase();
    let restaurant_slug = slug::slug_from_name(&req.restaurant_name);
    if restaurant_slug.is_empty() {
        return Err(AppError::validation(
            "restaurant_name must contain letters or digits",
        ));
    }

    let owner_repo = OwnerRepository::new(state.db.clone());
    let restaurant_repo = RestaurantRepository::new(state.db.clone());

    // Check the slug before creating the account, so a taken name cannot
    // leave an orphaned owner record
    if restaurant_repo.find_by_slug(&restaurant_slug).await?.is_some() {
        return Err(AppError::conflict(format!(
            "Restaurant name '{}' is already taken",
            req.restaurant_name
        )));
    }

    let hash_pass = Owner::hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?;

    let now = Utc::now().timestamp_millis();
    let owner = owner_repo
        .create(Owner::new(email.clone(), hash_pass, now))
        .await?;

    let owner_id = owner
        .id
        .clone()
        .ok_or_else(|| AppError::internal("Created owner has no id".to_string()))?;

    let mut restaurant = Restaurant::new(
        req.restaurant_name.trim().to_string(),
        restaurant_slug,
        owner_id.clone(),
        now,
    );
    restaurant.description = req.description.clone();
    restaurant.logo_url = req.logo_url.clone();

    let restaurant = match restaurant_repo.create(restaurant).await {
        Ok(r) => r,
        Err(e) => {
            // Roll back the account record; the failure itself is what we report
            if let Err(cleanup) = owner_repo.delete(&owner_id.to_string()).await {
                tracing::warn!(error = %cleanup, "Failed to clean up owner after signup failure");
            }
            return Err(e.into());
        }
    };

    let token = issue_token(&state.jwt_service, &owner, &restaurant)?;

    tracing::info!(email = %owner.email, slug = %restaurant.slug, "Owner signed up");

    Ok(Json(LoginResponse {
        token,
        owner: OwnerInfo::from(&owner),
        restaurant: RestaurantInfo::from_model(&restaurant, &state.config),
    }))
}

/// POST /api/auth/login - 登录
///
/// Authenticates owner credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let email = req.email.trim().to_ascii_lowercase();

    let owner_repo = OwnerRepository::new(state.db.clone());
    let owner = owner_repo.find_by_email(&email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent email enumeration
    let owner = match owner {
        Some(o) => {
            if !o.is_active {
                return Err(AppError::forbidden("Account has been disabled".to_string()));
            }

            let password_valid = o
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                tracing::warn!(email = %email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            o
        }
        None => {
            tracing::warn!(email = %email, "Login failed - account not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let owner_id = owner
        .id
        .clone()
        .ok_or_else(|| AppError::internal("Owner record has no id".to_string()))?;

    let restaurant = RestaurantRepository::new(state.db.clone())
        .find_by_owner(&owner_id)
        .await?
        .ok_or_else(|| AppError::internal("No restaurant for this account".to_string()))?;

    let token = issue_token(&state.jwt_service, &owner, &restaurant)?;

    tracing::info!(email = %owner.email, slug = %restaurant.slug, "Owner logged in");

    Ok(Json(LoginResponse {
        token,
        owner: OwnerInfo::from(&owner),
        restaurant: RestaurantInfo::from_model(&restaurant, &state.config),
    }))
}

/// GET /api/auth/me - 当前账户信息
pub async fn me(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<MeResponse>> {
    let owner = OwnerRepository::new(state.db.clone())
        .find_by_id(&user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Account"))?;

    let restaurant = RestaurantRepository::new(state.db.clone())
        .find_by_id(&user.restaurant)
        .await?
        .ok_or_else(|| AppError::not_found("Restaurant"))?;

    Ok(Json(MeResponse {
        owner: OwnerInfo::from(&owner),
        restaurant: RestaurantInfo::from_model(&restaurant, &state.config),
    }))
}

fn issue_token(
    jwt_service: &Arc<JwtService>,
    owner: &Owner,
    restaurant: &Restaurant,
) -> AppResult<String> {
    let owner_id = owner.id.as_ref().map(|i| i.to_string()).unwrap_or_default();
    let restaurant_id = restaurant
        .id
        .as_ref()
        .map(|i| i.to_string())
        .unwrap_or_default();

    jwt_service
        .generate_token(&owner_id, &owner.email, &restaurant_id)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))
}
