// src/domain/mod.rs
pub mod catalog;
pub mod comment;
pub mod errors;
pub mod review;
pub mod title;
pub mod user;
