use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::{
    dev::{Payload, ServiceRequest},
    web, Either, FromRequest, HttpMessage, HttpRequest,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use tracing::debug;
use uuid::Uuid;

use crate::db::db_service::DbService;
use crate::types::error::AppError;

/// Request bodies are accepted either as JSON or as an url-encoded form.
pub type JsonOrForm<T> = Either<web::Json<T>, web::Form<T>>;

pub fn into_payload<T>(body: JsonOrForm<T>) -> T {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

/// Identity attached to the request by [`validate_token`].
#[derive(Clone, Copy, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub token_id: Uuid,
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthenticatedUser>()
                .copied()
                .ok_or(AppError::Unauthorized),
        )
    }
}

pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let db = match req.app_data::<web::Data<Arc<DbService>>>() {
        Some(db) => db.clone(),
        None => {
            return Err((
                AppError::Internal("database service not registered".into()).into(),
                req,
            ))
        }
    };

    match db.authenticate_token(credentials.token()).await {
        Ok((user, token_id)) => {
            req.extensions_mut().insert(AuthenticatedUser {
                user_id: user.id,
                token_id,
            });
            Ok(req)
        }
        Err(e) => {
            debug!(error = %e, "bearer token rejected");
            Err((e.into(), req))
        }
    }
}
