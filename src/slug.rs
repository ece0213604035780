//! Slug derivation from project display names.
//!
//! Every project's output filename and URL stem is derived from its `name`
//! metadata field by a single normalization function. The slug is computed
//! exactly once at load time and never recomputed, so page filenames, listing
//! links and staged preview images all agree on the same token.
//!
//! ## Normalization
//!
//! Lowercase the name, treat every non-alphanumeric character as a word
//! break, and join the words with single hyphens:
//!
//! - `"Alpha One"` → `"alpha-one"`
//! - `"JIC BioImage"` → `"jic-bioimage"`
//! - `"C. elegans (microscopy)"` → `"c-elegans-microscopy"`
//! - `"  Multiple   Spaces  "` → `"multiple-spaces"`
//! - `"???"` → `""` (no alphanumeric content — rejected by the loader)
//!
//! The result contains only lowercase alphanumerics separated by single
//! interior hyphens: no leading or trailing hyphen, no doubled hyphens, no
//! whitespace. Applying the function to its own output is a no-op, which
//! keeps derived filenames stable across rebuilds.

/// Normalize a display name into a URL-safe slug.
///
/// Deterministic and idempotent: `slugify(slugify(s)) == slugify(s)`.
/// Returns an empty string when the input contains no alphanumeric
/// characters.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    cleaned.split_whitespace().collect::<Vec<&str>>().join("-")
}
