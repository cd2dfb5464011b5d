use entity::user::Model as UserModel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration payload. Every field is optional at the wire level so that a
/// missing field is reported as a validation error, not a decode failure.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RUserCreate {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RUserUpdate {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

pub struct DBUserCreate {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

#[derive(Default)]
pub struct DBUserUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password_hash: Option<String>,
    /// Token that survives a password change; every other token of the user
    /// is revoked with it.
    pub keep_token: Option<Uuid>,
}

/// Public view of a user. Never carries the password or its hash.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct UserRes {
    pub email: String,
    pub name: String,
}

impl From<UserModel> for UserRes {
    fn from(user: UserModel) -> Self {
        UserRes {
            email: user.email,
            name: user.name,
        }
    }
}
