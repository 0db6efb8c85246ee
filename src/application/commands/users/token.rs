// src/application/commands/users/token.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

pub struct IssueTokenCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn issue_token(&self, command: IssueTokenCommand) -> ApplicationResult<AuthTokenDto> {
        let invalid = || ApplicationError::unauthorized("invalid credentials");

        let username = Username::new(command.username).map_err(|_| invalid())?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(invalid)?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;

        let subject = TokenSubject {
            user_id: user.id,
            username: user.username.to_string(),
            role: user.role,
            capabilities: user.role.default_capabilities(),
        };
        self.token_manager.issue(subject).await
    }
}
