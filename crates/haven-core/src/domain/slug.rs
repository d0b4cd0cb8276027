//! URL-safe article identifiers derived from titles.

use uuid::Uuid;

/// Length of the random hex suffix appended to every slug.
pub const SLUG_SUFFIX_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    #[error("cannot derive a slug from an empty title")]
    EmptyTitle,
}

/// Lowercase hyphen-separated form of `title` followed by a random suffix.
///
/// Runs of anything other than ASCII letters and digits collapse into a
/// single hyphen, so `"Hello,  World_2"` becomes `hello-world-2-<suffix>`.
pub fn generate_slug(title: &str) -> Result<String, SlugError> {
    if title.trim().is_empty() {
        return Err(SlugError::EmptyTitle);
    }

    let base = slugify(title);
    let suffix = random_suffix();

    if base.is_empty() {
        Ok(suffix)
    } else {
        Ok(format!("{}-{}", base, suffix))
    }
}

fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

fn random_suffix() -> String {
    let mut hex = Uuid::new_v4().simple().to_string();
    hex.truncate(SLUG_SUFFIX_LEN);
    hex
}
