//! Short Identifier Module
//!
//! Generates random short identifiers and normalizes caller-supplied slugs.

use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

/// Default length of generated short identifiers.
pub const DEFAULT_ID_LENGTH: usize = 6;

// == Generate ==
/// Generates a random short identifier of the given length.
///
/// Characters are drawn per-character uniform from the 62-character
/// alphanumeric alphabet (A-Z, a-z, 0-9). Not cryptographically secure, and
/// no uniqueness guarantee by construction: the create path checks store
/// membership before inserting.
pub fn generate_short_id(length: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

// == Normalize ==
/// Normalizes a caller-supplied custom identifier.
///
/// Every run of whitespace collapses to a single hyphen; all other
/// characters pass through unchanged.
pub fn normalize_custom_id(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut in_whitespace = false;

    for ch in raw.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                normalized.push('-');
                in_whitespace = true;
            }
        } else {
            normalized.push(ch);
            in_whitespace = false;
        }
    }

    normalized
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_length() {
        let id = generate_short_id(DEFAULT_ID_LENGTH);
        assert_eq!(id.len(), 6);
    }

    #[test]
    fn test_generate_custom_length() {
        let id = generate_short_id(12);
        assert_eq!(id.len(), 12);
    }

    #[test]
    fn test_generate_is_alphanumeric() {
        let id = generate_short_id(64);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_zero_length() {
        assert_eq!(generate_short_id(0), "");
    }

    #[test]
    fn test_normalize_plain_slug_unchanged() {
        assert_eq!(normalize_custom_id("my-link"), "my-link");
    }

    #[test]
    fn test_normalize_single_spaces() {
        assert_eq!(normalize_custom_id("my cool link"), "my-cool-link");
    }

    #[test]
    fn test_normalize_collapses_whitespace_runs() {
        assert_eq!(normalize_custom_id("my \t cool\n\nlink"), "my-cool-link");
    }

    #[test]
    fn test_normalize_leading_and_trailing_whitespace() {
        assert_eq!(normalize_custom_id(" link "), "-link-");
    }

    #[test]
    fn test_normalize_whitespace_only() {
        assert_eq!(normalize_custom_id("   "), "-");
    }
}
