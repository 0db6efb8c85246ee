use crate::domain::user::{Role, User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub username: String,
    pub email: String,
    pub role: Role,
    pub bio: Option<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            username: user.username.into(),
            email: user.email.into(),
            role: user.role,
            bio: user.bio,
        }
    }
}
