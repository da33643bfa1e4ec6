//! Public Menu API 模块 (无需认证)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/menu/{slug}", get(handler::get_menu))
}
