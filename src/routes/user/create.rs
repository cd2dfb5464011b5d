use crate::db::db_service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserRes};
use crate::utils::email::{normalize_email, validate_email};
use crate::utils::password::{hash_password, validate_password};
use crate::utils::webutils::{into_payload, JsonOrForm};
use actix_web::{post, web};
use std::sync::Arc;

pub const MAX_NAME_LENGTH: usize = 255;

pub(crate) fn clean_name(name: Option<String>) -> Result<String, AppError> {
    let name = name.unwrap_or_default().trim().to_string();
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::Validation(format!(
            "name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(name)
}

#[post("")]
pub async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    body: JsonOrForm<RUserCreate>,
) -> ApiResult<UserRes> {
    let payload = into_payload(body);

    let email = normalize_email(payload.email.as_deref().unwrap_or_default());
    validate_email(&email)?;

    let password = payload.password.unwrap_or_default();
    validate_password(&password)?;

    let name = clean_name(payload.name)?;

    let user = db
        .create_user(DBUserCreate {
            email,
            name,
            password_hash: hash_password(&password)?,
        })
        .await?;

    Ok(ApiResponse::Created(UserRes::from(user)))
}
