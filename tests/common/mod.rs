use sea_orm::ConnectOptions;
use std::sync::Arc;
use user_api::db::db_service::DbService;

pub mod client;

pub struct TestContext {
    pub db: Arc<DbService>,
}

impl TestContext {
    /// Fresh in-memory SQLite database with migrations applied. A single
    /// pooled connection keeps every query on the same memory database.
    pub async fn new() -> TestContext {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Arc::new(
            DbService::connect(options)
                .await
                .expect("Failed to initialize DbService")
        );

        TestContext { db }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use serde_json::{json, Value};

    pub const EMAIL: &str = "test@test.com";
    pub const PASSWORD: &str = "password123";

    pub fn sample_user() -> Value {
        json!({
            "email": EMAIL,
            "password": PASSWORD,
            "name": "test_name",
        })
    }

    pub fn credentials(email: &str, password: &str) -> Value {
        json!({ "email": email, "password": password })
    }
}
