// src/application/queries/users.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserRepository,
};

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Profile of the caller; a token for a since-deleted account is a 404.
    pub async fn get_profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        self.user_repo
            .find_by_id(actor.id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }
}
