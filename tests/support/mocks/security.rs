// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use yamdb_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use yamdb_core::domain::user::{Role, UserId};

use super::time::fixed_now;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const USER_TOKEN: &str = "user-token";
pub const OTHER_TOKEN: &str = "other-token";
pub const MODERATOR_TOKEN: &str = "moderator-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

/// Seeded identities: (token, id, username, role).
pub const IDENTITIES: [(&str, i64, &str, Role); 4] = [
    (ADMIN_TOKEN, 1, "admin", Role::Admin),
    (USER_TOKEN, 2, "alice", Role::User),
    (OTHER_TOKEN, 3, "bob", Role::User),
    (MODERATOR_TOKEN, 4, "mod", Role::Moderator),
];

fn user_for(id: i64, username: &str, role: Role) -> AuthenticatedUser {
    let now = fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: username.into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

/// Fixed tokens map to the seeded users; issued tokens embed the user id.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = fixed_now();
        Ok(AuthTokenDto {
            token: format!("issued-{}-{}", i64::from(subject.user_id), subject.role),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        if token == EXPIRED_TOKEN {
            return Err(ApplicationError::unauthorized("expired token"));
        }
        IDENTITIES
            .iter()
            .find(|(t, ..)| *t == token)
            .map(|(_, id, name, role)| user_for(*id, name, *role))
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))
    }
}

/// Stores `hashed:<password>` and compares verbatim.
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
