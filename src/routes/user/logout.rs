use crate::db::db_service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthenticatedUser;
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
pub async fn logout(
    auth: AuthenticatedUser,
    db: web::Data<Arc<DbService>>,
) -> ApiResult<()> {
    db.revoke_token(&auth.token_id).await?;
    Ok(ApiResponse::NoContent)
}
