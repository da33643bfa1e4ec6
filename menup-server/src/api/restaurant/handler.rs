//! Restaurant API Handlers

use axum::{Json, extract::State};

use crate::api::convert::RestaurantInfo;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::RestaurantRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/restaurant - 当前账户的餐厅信息
///
/// 返回包含公共菜单链接的餐厅资料。餐厅资料本身由账户管理流程维护，
/// 这里只读。
pub async fn get_own(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<RestaurantInfo>> {
    let restaurant = RestaurantRepository::new(state.db.clone())
        .find_by_id(&user.restaurant)
        .await?
        .ok_or_else(|| AppError::not_found("Restaurant"))?;

    Ok(Json(RestaurantInfo::from_model(&restaurant, &state.config)))
}
