use crate::db::db_service::DbService;
use crate::routes::user::create::clean_name;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserUpdate, RUserUpdate, UserRes};
use crate::utils::email::{normalize_email, validate_email};
use crate::utils::password::{hash_password, validate_password};
use crate::utils::webutils::{into_payload, AuthenticatedUser, JsonOrForm};
use actix_web::{get, patch, web};
use std::sync::Arc;

#[get("")]
pub async fn me(
    auth: AuthenticatedUser,
    db: web::Data<Arc<DbService>>,
) -> ApiResult<UserRes> {
    let user = db.get_user_by_id(&auth.user_id).await?;
    Ok(ApiResponse::Ok(UserRes::from(user)))
}

/// Partial update. A password change signs out every other session.
#[patch("")]
pub async fn update_me(
    auth: AuthenticatedUser,
    db: web::Data<Arc<DbService>>,
    body: JsonOrForm<RUserUpdate>,
) -> ApiResult<UserRes> {
    let payload = into_payload(body);
    let mut patch = DBUserUpdate {
        keep_token: Some(auth.token_id),
        ..Default::default()
    };

    if let Some(email) = payload.email {
        let email = normalize_email(&email);
        validate_email(&email)?;
        patch.email = Some(email);
    }
    if payload.name.is_some() {
        patch.name = Some(clean_name(payload.name)?);
    }
    if let Some(password) = payload.password {
        validate_password(&password)?;
        patch.password_hash = Some(hash_password(&password)?);
    }

    let user = db.update_user(&auth.user_id, patch).await?;
    Ok(ApiResponse::Ok(UserRes::from(user)))
}
