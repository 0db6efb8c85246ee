// src/application/ports/util.rs

/// Turns free text (a category or genre name) into a URL-safe slug.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
