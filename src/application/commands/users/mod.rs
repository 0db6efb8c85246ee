// src/application/commands/users/mod.rs
mod password;
mod service;
mod signup;
mod token;

pub use service::UserCommandService;
pub use signup::SignupCommand;
pub use token::IssueTokenCommand;
