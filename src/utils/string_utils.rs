//! UTF-8-safe string shaping utilities
//!
//! Whitespace collapsing and character-boundary truncation used for the
//! summary column and full-text filenames. All truncation here counts
//! CHARACTERS, never bytes, so multi-byte text (macrons in Māori bill
//! titles, typographic quotes in act text) can never cause a panic.

use crate::utils::constants::{FILENAME_MAX_CHARS, SNIPPET_MAX_CHARS};

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// This function respects UTF-8 character boundaries and will never panic,
/// even with multi-byte characters.
///
/// # Arguments
/// * `s` - String slice to truncate
/// * `max_chars` - Maximum number of Unicode characters (not bytes)
///
/// # Returns
/// * String slice containing at most `max_chars` characters, or the full
///   string if it's shorter than `max_chars`
///
/// # Examples
/// ```
/// # use billscrape::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
///
/// // Multi-byte UTF-8 characters (macron vowels are 2 bytes each)
/// assert_eq!(safe_truncate_chars("Pāpāwai", 4), "Pāpā");
///
/// // String shorter than max_chars
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
#[must_use]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s, // String has fewer than max_chars characters
        Some((byte_idx, _)) => &s[..byte_idx], // Slice at char boundary
    }
}

/// Collapse every run of whitespace (including newlines) into a single space
/// and trim the ends.
///
/// Rendered `innerText` from the register is full of layout newlines and
/// non-breaking gaps; collapsing first keeps the snippet and filename
/// truncation stable regardless of how the page happened to wrap.
#[must_use]
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Produce the summary snippet for a bill: whitespace-collapsed full text,
/// capped at [`SNIPPET_MAX_CHARS`] characters.
///
/// Empty input produces an empty snippet, never an error.
///
/// # Examples
/// ```
/// # use billscrape::utils::string_utils::summary_snippet;
/// assert_eq!(summary_snippet("This   Act\n\nbinds the Crown."), "This Act binds the Crown.");
/// assert_eq!(summary_snippet(""), "");
/// ```
#[must_use]
pub fn summary_snippet(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    safe_truncate_chars(&collapsed, SNIPPET_MAX_CHARS).to_string()
}

/// Build a filesystem-safe filename stem from a bill number or title.
///
/// Replaces characters that are invalid on any mainstream filesystem
/// (`< > : " / \ | ? *` and ASCII control characters) with `_`, collapses
/// whitespace, trims, and caps the result at [`FILENAME_MAX_CHARS`]
/// characters. The `.txt` extension is appended by the caller.
///
/// # Examples
/// ```
/// # use billscrape::utils::string_utils::safe_file_stem;
/// assert_eq!(
///     safe_file_stem("Road User Charges (Heavy <RUC>) Amendment Bill"),
///     "Road User Charges (Heavy _RUC_) Amendment Bill"
/// );
/// ```
#[must_use]
pub fn safe_file_stem(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c if (c as u32) < 0x20 => '_',
            c => c,
        })
        .collect();

    // sanitize-filename catches the platform-specific leftovers the plain
    // character map doesn't know about (reserved DOS names, trailing dots)
    // without touching ordinary punctuation.
    let sanitized = sanitize_filename::sanitize_with_options(
        replaced,
        sanitize_filename::Options {
            replacement: "_",
            ..Default::default()
        },
    );

    let collapsed = collapse_whitespace(&sanitized);
    safe_truncate_chars(&collapsed, FILENAME_MAX_CHARS).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(safe_truncate_chars("Pāremata", 3), "Pār");
        assert_eq!(safe_truncate_chars("abc", 0), "");
    }

    #[test]
    fn snippet_collapses_and_caps() {
        let long = "word ".repeat(200);
        let snip = summary_snippet(&long);
        assert!(snip.chars().count() <= 400);
        assert!(!snip.contains("  "));
    }

    #[test]
    fn file_stem_strips_control_chars() {
        assert_eq!(safe_file_stem("a\tb\nc"), "a_b_c");
    }
}
