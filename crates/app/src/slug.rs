//! URL slug generation.

/// Turn free text into a URL-safe slug.
///
/// Lowercases, replaces whitespace runs with a single hyphen, strips
/// everything that is not `[a-z0-9_-]` or a Devanagari code point
/// (U+0900..=U+097F, so Marathi titles keep their text), collapses repeated
/// hyphens and trims hyphens from both ends. Total: empty input yields an
/// empty slug.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());

    for c in text.to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            if !slug.ends_with('-') {
                slug.push('-');
            }
        } else if c.is_ascii_alphanumeric() || c == '_' || is_devanagari(c) {
            slug.push(c);
        }
        // Everything else is dropped.
    }

    slug.trim_matches('-').to_string()
}

const fn is_devanagari(c: char) -> bool {
    matches!(c, '\u{0900}'..='\u{097F}')
}
