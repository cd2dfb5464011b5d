use actix_web::{middleware, web, App};
use std::sync::Arc;
use user_api::{
    db::db_service::DbService,
    types::{error::AppError, user::DBUserCreate},
    utils::password::hash_password,
};
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<DbService>,
}

impl TestClient {
    pub fn new(db: Arc<DbService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(user_api::routes::configure_routes)
    }

    /// Inserts a user straight into the database, bypassing the HTTP layer.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: &str, password: &str) -> Result<Uuid, AppError> {
        let user = self.db.create_user(DBUserCreate {
            email: email.to_string(),
            name: "Test User".to_string(),
            password_hash: hash_password(password)?,
        }).await?;

        Ok(user.id)
    }

    /// Same as [`create_test_user`] but also returns a live bearer token.
    #[allow(dead_code)]
    pub async fn create_logged_in_user(&self, email: &str, password: &str) -> (Uuid, String) {
        let user_id = self.create_test_user(email, password)
            .await
            .expect("Failed to create user");

        let token = self.db.issue_token(&user_id)
            .await
            .expect("Failed to issue token");

        (user_id, token)
    }
}
