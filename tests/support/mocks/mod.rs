// tests/support/mocks/mod.rs
pub mod security;
pub mod store;
pub mod time;
pub mod util;

pub use security::{
    ADMIN_TOKEN, DummyPasswordHasher, DummyTokenManager, EXPIRED_TOKEN, MODERATOR_TOKEN,
    OTHER_TOKEN, USER_TOKEN,
};
pub use store::{InMemoryStore, seeded_store};
pub use time::{DummyClock, fixed_now};
pub use util::DummySlug;
