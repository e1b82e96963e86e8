//! Short key generation.
//!
//! Keys are opaque random tokens. The generator is a pure function over a
//! thread-local PRNG; it does not consult storage and does not retry on collision.

use rand::Rng;

/// Length of every generated short key.
pub const SHORT_KEY_LENGTH: usize = 10;

/// Alphabet short keys are drawn from: `[a-zA-Z0-9_]`.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

/// Generates a random short key of `length` characters.
///
/// Each character is sampled independently and uniformly, with replacement,
/// from [`ALPHABET`]. The source is `rand`'s thread-local generator, which is
/// good enough for opaque identifiers but makes no unguessability promise.
///
/// `length` should be positive; a length of zero yields an empty string.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(SHORT_KEY_LENGTH);
/// assert_eq!(code.len(), 10);
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` has the shape of a generated short key.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == SHORT_KEY_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_63_distinct_characters() {
        let unique: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(ALPHABET.len(), 63);
        assert_eq!(unique.len(), 63);
    }

    #[test]
    fn test_generate_code_has_requested_length() {
        assert_eq!(generate_code(SHORT_KEY_LENGTH).len(), 10);
        assert_eq!(generate_code(1).len(), 1);
        assert_eq!(generate_code(64).len(), 64);
    }

    #[test]
    fn test_generate_code_zero_length_is_empty() {
        assert!(generate_code(0).is_empty());
    }

    #[test]
    fn test_generate_code_uses_only_alphabet() {
        for _ in 0..200 {
            let code = generate_code(SHORT_KEY_LENGTH);
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_'),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn test_generate_code_produces_distinct_codes() {
        let codes: HashSet<_> = (0..1000).map(|_| generate_code(SHORT_KEY_LENGTH)).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_covers_alphabet() {
        let seen: HashSet<char> = generate_code(20_000).chars().collect();
        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn test_is_valid_code() {
        assert!(is_valid_code("abcDEF_789"));
        assert!(is_valid_code(&generate_code(SHORT_KEY_LENGTH)));
        assert!(!is_valid_code("short"));
        assert!(!is_valid_code("abcDEF-789"));
        assert!(!is_valid_code("abcDEF_7890"));
    }
}
