//! End-to-end API tests over an in-memory SurrealDB instance.
//! Run: cargo test -p menup-server --test menu_api

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use tower::Service;

use menup_server::auth::{JwtConfig, JwtService};
use menup_server::core::{Config, ServerState, build_router};

async fn test_app() -> Router {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    menup_server::db::define_schema(&db).await.unwrap();

    let jwt = JwtConfig {
        secret: "integration-test-secret-key-0123456789".to_string(),
        expiration_minutes: 60,
        issuer: "menup-server".to_string(),
        audience: "menup-owners".to_string(),
    };
    let config = Config {
        work_dir: "/tmp/menup-test".to_string(),
        http_port: 0,
        public_origin: "https://menup.test".to_string(),
        jwt: jwt.clone(),
        environment: "test".to_string(),
    };

    let state = ServerState::new(config, db, Arc::new(JwtService::with_config(jwt)));
    build_router(state)
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &mut Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.call(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Sign up a restaurant and return its auth token.
async fn signup(app: &mut Router, email: &str, restaurant_name: &str) -> String {
    let (status, body) = send(
        app,
        request(
            "POST",
            "/api/auth/signup",
            None,
            Some(json!({
                "email": email,
                "password": "a-strong-password",
                "restaurant_name": restaurant_name,
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "signup failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

/// Create a menu item and return its id.
async fn create_item(app: &mut Router, token: &str, payload: Value) -> String {
    let (status, body) = send(
        app,
        request("POST", "/api/menu-items", Some(token), Some(payload)),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_check_is_public() {
    let mut app = test_app().await;
    let (status, body) = send(&mut app, request("GET", "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn protected_routes_require_auth() {
    let mut app = test_app().await;

    let (status, _) = send(&mut app, request("GET", "/api/menu-items", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &mut app,
        request("GET", "/api/menu-items", Some("not-a-token"), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn signup_login_me_flow() {
    let mut app = test_app().await;

    let token = signup(&mut app, "owner@example.com", "Second Cup").await;
    assert!(!token.is_empty());

    // slug and public url derive from the restaurant name
    let (status, body) = send(
        &mut app,
        request("GET", "/api/restaurant", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "second-cup");
    assert_eq!(body["public_url"], "https://menup.test/menu/second-cup");

    // login with the right credentials
    let (status, body) = send(
        &mut app,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": "Owner@Example.com", "password": "a-strong-password"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let login_token = body["token"].as_str().unwrap().to_string();

    // wrong password gets the unified message
    let (status, body) = send(
        &mut app,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": "owner@example.com", "password": "wrong-password"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid email or password");

    let (status, body) = send(
        &mut app,
        request("GET", "/api/auth/me", Some(&login_token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["owner"]["email"], "owner@example.com");
}

#[tokio::test]
async fn duplicate_signup_conflicts() {
    let mut app = test_app().await;
    signup(&mut app, "owner@example.com", "Second Cup").await;

    // same restaurant name -> same slug
    let (status, _) = send(
        &mut app,
        request(
            "POST",
            "/api/auth/signup",
            None,
            Some(json!({
                "email": "other@example.com",
                "password": "a-strong-password",
                "restaurant_name": "Second  Cup",
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn validation_rejected_before_store() {
    let mut app = test_app().await;
    let token = signup(&mut app, "owner@example.com", "Second Cup").await;

    // empty name
    let (status, _) = send(
        &mut app,
        request(
            "POST",
            "/api/menu-items",
            Some(&token),
            Some(json!({"name": "  ", "price": 5.0})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // negative price
    let (status, _) = send(
        &mut app,
        request(
            "POST",
            "/api/menu-items",
            Some(&token),
            Some(json!({"name": "Tea", "price": -1.0})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // nothing was stored
    let (status, body) = send(
        &mut app,
        request("GET", "/api/menu-items", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn publish_flow_and_categorized_public_menu() {
    let mut app = test_app().await;
    let token = signup(&mut app, "owner@example.com", "Second Cup").await;

    create_item(
        &mut app,
        &token,
        json!({"name": "Tea", "price": 3.5, "category": "Drinks"}),
    )
    .await;
    create_item(
        &mut app,
        &token,
        json!({"name": "Burger", "price": 12.0, "category": "Mains"}),
    )
    .await;
    create_item(
        &mut app,
        &token,
        json!({"name": "Chef Pick", "price": 20.0, "category": "Mains", "is_special": true}),
    )
    .await;

    // all three are drafts
    let (_, body) = send(
        &mut app,
        request("GET", "/api/menu-items?published=false", Some(&token), None),
    )
    .await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    // nothing is public yet
    let (status, body) = send(
        &mut app,
        request("GET", "/api/menu/second-cup", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sections"].as_array().unwrap().len(), 0);

    // publish flips every draft at once
    let (status, body) = send(
        &mut app,
        request("POST", "/api/menu-items/publish", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["published"], 3);

    // a second publish has nothing left to do
    let (_, body) = send(
        &mut app,
        request("POST", "/api/menu-items/publish", Some(&token), None),
    )
    .await;
    assert_eq!(body["published"], 0);

    // the public menu groups specials first, then Mains, then Drinks
    let (status, body) = send(
        &mut app,
        request("GET", "/api/menu/second-cup", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let sections = body["sections"].as_array().unwrap();
    let categories: Vec<&str> = sections
        .iter()
        .map(|s| s["category"].as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["Today's Special", "Mains", "Drinks"]);
    assert_eq!(sections[0]["items"][0]["name"], "Chef Pick");
    assert_eq!(sections[1]["items"][0]["name"], "Burger");
    assert_eq!(sections[2]["items"][0]["name"], "Tea");
}

#[tokio::test]
async fn visibility_requires_published_and_available() {
    let mut app = test_app().await;
    let token = signup(&mut app, "owner@example.com", "Second Cup").await;

    create_item(
        &mut app,
        &token,
        json!({"name": "Tea", "price": 3.5, "category": "Drinks"}),
    )
    .await;
    let coffee = create_item(
        &mut app,
        &token,
        json!({"name": "Coffee", "price": 4.0, "category": "Drinks"}),
    )
    .await;

    send(
        &mut app,
        request("POST", "/api/menu-items/publish", Some(&token), None),
    )
    .await;

    // hide one published item
    let (status, body) = send(
        &mut app,
        request(
            "POST",
            &format!("/api/menu-items/{coffee}/availability"),
            Some(&token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "toggle failed: {body}");
    assert_eq!(body["is_available"], false);

    // a draft created after the publish is not public either
    create_item(
        &mut app,
        &token,
        json!({"name": "Cocoa", "price": 4.5, "category": "Drinks", "is_available": true}),
    )
    .await;

    let (_, body) = send(
        &mut app,
        request("GET", "/api/menu/second-cup", None, None),
    )
    .await;
    let sections = body["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 1);
    let names: Vec<&str> = sections[0]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Tea"]);

    // the owner still sees everything
    let (_, body) = send(
        &mut app,
        request("GET", "/api/menu-items", Some(&token), None),
    )
    .await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn edit_preserves_publish_and_availability_state() {
    let mut app = test_app().await;
    let token = signup(&mut app, "owner@example.com", "Second Cup").await;

    let id = create_item(
        &mut app,
        &token,
        json!({"name": "Tea", "price": 3.5, "category": "Drinks"}),
    )
    .await;
    send(
        &mut app,
        request("POST", "/api/menu-items/publish", Some(&token), None),
    )
    .await;

    let (status, body) = send(
        &mut app,
        request(
            "PUT",
            &format!("/api/menu-items/{id}"),
            Some(&token),
            Some(json!({"name": "Green Tea", "price": 4.0})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Green Tea");
    assert_eq!(body["is_published"], true);
    assert_eq!(body["is_available"], true);
    assert_eq!(body["category"], "Drinks");
}

#[tokio::test]
async fn delete_is_rejected_after_publish() {
    let mut app = test_app().await;
    let token = signup(&mut app, "owner@example.com", "Second Cup").await;

    let id = create_item(
        &mut app,
        &token,
        json!({"name": "Tea", "price": 3.5, "category": "Drinks"}),
    )
    .await;

    send(
        &mut app,
        request("POST", "/api/menu-items/publish", Some(&token), None),
    )
    .await;

    let (status, _) = send(
        &mut app,
        request("DELETE", &format!("/api/menu-items/{id}"), Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // drafts can always be deleted
    let draft = create_item(
        &mut app,
        &token,
        json!({"name": "Coffee", "price": 4.0, "category": "Drinks"}),
    )
    .await;
    let (status, body) = send(
        &mut app,
        request(
            "DELETE",
            &format!("/api/menu-items/{draft}"),
            Some(&token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(true));
}

#[tokio::test]
async fn items_are_scoped_to_their_restaurant() {
    let mut app = test_app().await;
    let token_a = signup(&mut app, "a@example.com", "Cafe Alpha").await;
    let token_b = signup(&mut app, "b@example.com", "Cafe Beta").await;

    let item_a = create_item(
        &mut app,
        &token_a,
        json!({"name": "Tea", "price": 3.5, "category": "Drinks"}),
    )
    .await;

    // another restaurant cannot see or touch the item
    let (status, _) = send(
        &mut app,
        request(
            "GET",
            &format!("/api/menu-items/{item_a}"),
            Some(&token_b),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &mut app,
        request(
            "DELETE",
            &format!("/api/menu-items/{item_a}"),
            Some(&token_b),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // and its own list stays empty
    let (_, body) = send(
        &mut app,
        request("GET", "/api/menu-items", Some(&token_b), None),
    )
    .await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn public_slug_is_case_normalized() {
    let mut app = test_app().await;
    signup(&mut app, "owner@example.com", "Second Cup").await;

    let (status, _) = send(
        &mut app,
        request("GET", "/api/menu/SECOND-CUP", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &mut app,
        request("GET", "/api/menu/no-such-place", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_category_defaults_to_uncategorized() {
    let mut app = test_app().await;
    let token = signup(&mut app, "owner@example.com", "Second Cup").await;

    let id = create_item(
        &mut app,
        &token,
        json!({"name": "Mystery Dish", "price": 9.0, "category": "  "}),
    )
    .await;

    let (_, body) = send(
        &mut app,
        request("GET", &format!("/api/menu-items/{id}"), Some(&token), None),
    )
    .await;
    assert_eq!(body["category"], "Uncategorized");
}
