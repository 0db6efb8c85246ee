use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Slugs are capped at 50 characters to fit the catalog columns.
const MAX_SLUG_LEN: usize = 50;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let mut slug = slugify(input);
        if slug.len() > MAX_SLUG_LEN {
            slug.truncate(MAX_SLUG_LEN);
            while slug.ends_with('-') {
                slug.pop();
            }
        }
        slug
    }
}
