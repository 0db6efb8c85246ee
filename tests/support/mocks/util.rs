// tests/support/mocks/util.rs

/// Lowercases and hyphenates whitespace; enough for test names.
#[derive(Clone, Copy, Debug, Default)]
pub struct DummySlug;

impl yamdb_core::application::ports::util::SlugGenerator for DummySlug {
    fn slugify(&self, input: &str) -> String {
        input
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}
