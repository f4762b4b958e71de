//! Deterministic anchor slug derivation for headings.

/// Derive a URL/anchor-safe slug from raw heading text.
///
/// Pipeline: lowercase, trim, collapse whitespace runs to a single
/// hyphen, drop anything that is not a word character or hyphen, then
/// collapse hyphen runs. Emphasis markers in heading text fall out in
/// the non-word filter.
///
/// Two headings with identical text derive identical slugs; collisions
/// are not disambiguated.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());

    for c in text.trim().chars() {
        if c.is_whitespace() || c == '-' {
            // Runs of whitespace and hyphens collapse to one hyphen.
            if !slug.ends_with('-') {
                slug.push('-');
            }
        } else if c.is_alphanumeric() || c == '_' {
            slug.extend(c.to_lowercase());
        }
        // Everything else is dropped.
    }

    slug
}
