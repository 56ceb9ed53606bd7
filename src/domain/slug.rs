//! Deterministic category slugs.
//!
//! Category links address the category by a slug derived from its display
//! name: lowercase, with each run of whitespace replaced by a single hyphen.
//! The server inverts the transform (hyphens back to spaces, case-insensitive
//! name match), so it must stay exactly this: no punctuation stripping, no
//! transliteration. The same function is used both to generate links and to
//! match incoming slugs against category names.

/// Derive the URL slug for a category name.
///
/// Pure and idempotent: the output contains no whitespace and no uppercase,
/// so slugging a slug is a no-op.
pub fn category_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut gap = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            gap = true;
            continue;
        }
        if gap {
            slug.push('-');
            gap = false;
        }
        slug.extend(ch.to_lowercase());
    }
    if gap {
        slug.push('-');
    }
    slug
}

/// Best-effort display name for a slug with no matching category:
/// title-case each hyphen-separated word.
pub fn display_name(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
