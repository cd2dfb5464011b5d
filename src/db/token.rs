use crate::db::db_service::DbService;
use crate::{
    types::error::AppError,
    utils::token::{construct_token, encrypt, extract_token_parts, new_id, new_token, verify},
};
use chrono::Utc;
use entity::auth_token::{ActiveModel as TokenActive, Entity as AuthToken};
use entity::user::Model as UserModel;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

impl DbService {
    /// Mints a new token for the user and returns the bearer value. Only the
    /// argon2 hash of the secret is stored.
    pub async fn issue_token(&self, user_id: &Uuid) -> Result<String, AppError> {
        let secret = new_token();
        let token_hash = encrypt(&secret).map_err(|e| AppError::Internal(format!("hash token: {e}")))?;
        let token_id = new_id();

        TokenActive {
            id: Set(token_id),
            user_id: Set(*user_id),
            token_hash: Set(token_hash),
            created_at: Set(Utc::now()),
        }
        .insert(&self.database_connection)
        .await?;

        Ok(construct_token(&token_id, &secret))
    }

    /// Resolves a bearer value to its user and token id.
    pub async fn authenticate_token(&self, bearer: &str) -> Result<(UserModel, Uuid), AppError> {
        let (token_id, secret) = extract_token_parts(bearer).ok_or(AppError::Unauthorized)?;

        let stored = AuthToken::find_by_id(token_id)
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if !verify(&secret, &stored.token_hash).unwrap_or(false) {
            return Err(AppError::Unauthorized);
        }

        let user = match self.get_user_by_id(&stored.user_id).await {
            Ok(user) => user,
            Err(AppError::NotFound) => return Err(AppError::Unauthorized),
            Err(e) => return Err(e),
        };
        if !user.is_active {
            return Err(AppError::Unauthorized);
        }

        Ok((user, token_id))
    }

    pub async fn revoke_token(&self, token_id: &Uuid) -> Result<(), AppError> {
        AuthToken::delete_by_id(*token_id)
            .exec(&self.database_connection)
            .await?;
        Ok(())
    }
}
