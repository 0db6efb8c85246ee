// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Capability, Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rebuilds the caller's identity from the authority block facts.
///
/// Capabilities are the role defaults plus any explicit `right` facts.
pub(super) fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let mut claims = Claims::default();
    for fact in facts {
        claims.apply(&fact.predicate);
    }
    claims.into_user()
}

#[derive(Default)]
struct Claims {
    user_id: Option<i64>,
    username: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
    rights: HashSet<Capability>,
}

impl Claims {
    fn apply(&mut self, predicate: &Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(name)]) => {
                self.user_id = Some(*id);
                self.username = Some(name.clone());
            }
            ("role", [Term::Str(role)]) => self.role = role.parse().ok(),
            ("issued_at", [Term::Date(secs)]) => self.issued_at = Some(at(*secs)),
            ("expires_at", [Term::Date(secs)]) => self.expires_at = Some(at(*secs)),
            ("right", [Term::Str(resource), Term::Str(action)]) => {
                self.rights
                    .insert(Capability::new(resource.clone(), action.clone()));
            }
            _ => {}
        }
    }

    fn into_user(self) -> ApplicationResult<AuthenticatedUser> {
        let missing = |what: &str| ApplicationError::unauthorized(format!("missing {what}"));

        let id = UserId::new(self.user_id.ok_or_else(|| missing("user id"))?)?;
        let username = self.username.ok_or_else(|| missing("username"))?;
        let role = self.role.ok_or_else(|| missing("role"))?;
        let issued_at = self.issued_at.ok_or_else(|| missing("issued_at"))?;
        let expires_at = self.expires_at.ok_or_else(|| missing("expires_at"))?;

        let mut capabilities = role.default_capabilities();
        capabilities.extend(self.rights);

        Ok(AuthenticatedUser {
            id,
            username,
            role,
            capabilities,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
        })
    }
}

fn at(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}
