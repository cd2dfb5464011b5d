use crate::db::db_service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::{RTokenCreate, TokenRes};
use crate::utils::email::normalize_email;
use crate::utils::webutils::{into_payload, JsonOrForm};
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[post("")]
pub async fn token(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    body: JsonOrForm<RTokenCreate>,
) -> ApiResult<TokenRes> {
    let credentials = into_payload(body);

    let (Some(email), Some(password)) = (non_blank(credentials.email), non_blank(credentials.password)) else {
        return Err(AppError::Validation("Must include \"email\" and \"password\".".into()));
    };

    let user = db.check_credentials(&normalize_email(&email), &password).await?;
    let token = db.issue_token(&user.id).await?;
    info!(user_id = %user.id, "token issued");

    Ok(ApiResponse::Ok(TokenRes { token }))
}
