use crate::db::db_service::DbService;
use crate::{
    types::{error::AppError, user},
    utils::{password, token},
};
use chrono::Utc;
use entity::auth_token::Entity as AuthToken;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

const DUPLICATE_EMAIL: &str = "user with this email";

fn duplicate_email(err: AppError) -> AppError {
    match err {
        AppError::AlreadyExists(_) => AppError::AlreadyExists(DUPLICATE_EMAIL.into()),
        other => other,
    }
}

impl DbService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Signup: create user.
    pub async fn create_user(&self, payload: user::DBUserCreate) -> Result<UserModel, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists(DUPLICATE_EMAIL.into()));
        }
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        let created = UserActive {
            id: Set(token::new_id()),
            email: Set(payload.email),
            name: Set(payload.name),
            password_hash: Set(payload.password_hash),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| duplicate_email(e.into()))?;

        txn.commit().await?;
        info!(user_id = %created.id, "user created");
        Ok(created)
    }

    /// Unknown email, inactive account and wrong password all collapse into
    /// the same error so callers cannot probe for registered addresses.
    pub async fn check_credentials(&self, email: &str, password: &str) -> Result<UserModel, AppError> {
        let user = match self.get_user_by_email(email).await {
            Ok(user) => user,
            Err(AppError::NotFound) => return Err(AppError::InvalidCredentials),
            Err(e) => return Err(e),
        };
        if !user.is_active || !password::verify_password(password, &user.password_hash) {
            return Err(AppError::InvalidCredentials);
        }
        Ok(user)
    }

    /// Applies the patch. A new password hash and the revocation of the
    /// user's other tokens commit together or not at all.
    pub async fn update_user(&self, user_id: &Uuid, patch: user::DBUserUpdate) -> Result<UserModel, AppError> {
        let txn = self.database_connection.begin().await?;

        let current = User::find_by_id(*user_id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound)?;

        if let Some(email) = &patch.email {
            let taken = User::find()
                .filter(entity::user::Column::Email.eq(email.as_str()))
                .filter(entity::user::Column::Id.ne(*user_id))
                .count(&txn)
                .await?
                > 0;
            if taken {
                return Err(AppError::AlreadyExists(DUPLICATE_EMAIL.into()));
            }
        }

        let password_changed = patch.password_hash.is_some();
        let mut am: UserActive = current.into();
        if let Some(email) = patch.email {
            am.email = Set(email);
        }
        if let Some(name) = patch.name {
            am.name = Set(name);
        }
        if let Some(password_hash) = patch.password_hash {
            am.password_hash = Set(password_hash);
        }
        am.updated_at = Set(Utc::now());
        let updated = am
            .update(&txn)
            .await
            .map_err(|e| duplicate_email(e.into()))?;

        if password_changed {
            let mut revoke = AuthToken::delete_many()
                .filter(entity::auth_token::Column::UserId.eq(*user_id));
            if let Some(keep) = patch.keep_token {
                revoke = revoke.filter(entity::auth_token::Column::Id.ne(keep));
            }
            let revoked = revoke.exec(&txn).await?.rows_affected;
            info!(user_id = %user_id, revoked, "password changed");
        }

        txn.commit().await?;
        Ok(updated)
    }

    /// Suspends or restores an account. Operator hook: no HTTP route calls
    /// it, so an account only goes inactive by direct call or database edit.
    pub async fn set_user_active(&self, user_id: &Uuid, active: bool) -> Result<(), AppError> {
        let mut am: UserActive = self.get_user_by_id(user_id).await?.into();
        am.is_active = Set(active);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await.map(|_| ())?)
    }
}
