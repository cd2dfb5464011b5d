mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};
use entity::user::{Column, Entity as User};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::{json, Value};
use user_api::db::db_service::DbService;
use user_api::utils::password::verify_password;

async fn users_with_email(db: &DbService, email: &str) -> u64 {
    User::find()
        .filter(Column::Email.eq(email))
        .count(db.connection())
        .await
        .expect("Failed to count users")
}

#[actix_web::test]
async fn test_create_valid_user_success() {
    println!("\n\n[+] Running test: test_create_valid_user_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/user/create")
        .set_json(test_data::sample_user())
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    println!("[<] Response body: {}", body);
    assert_eq!(body["email"], test_data::EMAIL);
    assert_eq!(body["name"], "test_name");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());

    let user = ctx.db.get_user_by_email(test_data::EMAIL).await
        .expect("User should be persisted");
    assert_ne!(user.password_hash, test_data::PASSWORD);
    assert!(verify_password(test_data::PASSWORD, &user.password_hash));
    println!("[/] Test passed: User creation flow successful.");
}

#[actix_web::test]
async fn test_create_user_without_name() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/user/create")
        .set_json(test_data::credentials("noname@test.com", "password123"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "");
}

#[actix_web::test]
async fn test_user_exists() {
    println!("\n\n[+] Running test: test_user_exists");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user(test_data::EMAIL, test_data::PASSWORD).await
        .expect("Failed to create user");

    let req = test::TestRequest::post()
        .uri("/api/user/create")
        .set_json(test_data::sample_user())
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ALREADY_EXISTS");
    assert_eq!(users_with_email(&ctx.db, test_data::EMAIL).await, 1);
    println!("[/] Test passed: Duplicate registration rejected.");
}

#[actix_web::test]
async fn test_user_exists_with_different_domain_case() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let first = test::TestRequest::post()
        .uri("/api/user/create")
        .set_json(test_data::credentials("test@test.com", "password123"))
        .to_request();
    assert_eq!(test::call_service(&app, first).await.status(), StatusCode::CREATED);

    let second = test::TestRequest::post()
        .uri("/api/user/create")
        .set_json(test_data::credentials("test@TEST.COM", "password123"))
        .to_request();
    assert_eq!(test::call_service(&app, second).await.status(), StatusCode::BAD_REQUEST);

    assert_eq!(users_with_email(&ctx.db, "test@test.com").await, 1);
}

#[actix_web::test]
async fn test_password_too_short() {
    println!("\n\n[+] Running test: test_password_too_short");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    for password in ["pa", "12345"] {
        let req = test::TestRequest::post()
            .uri("/api/user/create")
            .set_json(json!({ "email": test_data::EMAIL, "password": password, "name": "test" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    assert_eq!(users_with_email(&ctx.db, test_data::EMAIL).await, 0);
    println!("[/] Test passed: Short password rejected, nothing persisted.");
}

#[actix_web::test]
async fn test_invalid_or_missing_email() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    for payload in [
        json!({ "email": "carlos", "password": "password123" }),
        json!({ "email": "   ", "password": "password123" }),
        json!({ "password": "password123" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/user/create")
            .set_json(&payload)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload {payload} should be rejected");
    }
}

#[actix_web::test]
async fn test_name_too_long() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/user/create")
        .set_json(json!({
            "email": test_data::EMAIL,
            "password": test_data::PASSWORD,
            "name": "x".repeat(256),
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(users_with_email(&ctx.db, test_data::EMAIL).await, 0);
}

#[actix_web::test]
async fn test_create_user_from_form_body() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/user/create")
        .set_form([
            ("email", "form@test.com"),
            ("password", "password123"),
            ("name", "form_user"),
        ])
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "form@test.com");
    assert_eq!(body["name"], "form_user");
}

#[actix_web::test]
async fn test_create_user_trailing_slash() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/user/create/")
        .set_json(test_data::sample_user())
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_create_user_malformed_json() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/user/create")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"email\": ")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
