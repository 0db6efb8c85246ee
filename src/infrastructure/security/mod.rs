// src/infrastructure/security/mod.rs
mod claims;
pub mod password;
pub mod token;
