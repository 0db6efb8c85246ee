// src/application/commands/users/signup.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, Role, Username},
};

pub struct SignupCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Registers a new account. The very first account becomes the admin.
    pub async fn signup(&self, command: SignupCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        let existing = self.user_repo.count().await?;
        let role = if existing == 0 { Role::Admin } else { Role::User };

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("email already registered"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let new_user = NewUser::new(username, email, password_hash, role, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;

        tracing::info!(username = %user.username, role = %user.role, "user signed up");
        Ok(user.into())
    }
}
