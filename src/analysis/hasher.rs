//! String Hasher
//!
//! Polynomial rolling hash used as the only entropy source for derived
//! metrics. Changing either constant changes every generated score, so both
//! are pinned by regression fixtures below.
//!
//! Not a security hash.

/// Multiplier of the rolling recurrence.
pub const HASH_MULTIPLIER: u64 = 31;

/// Modulus of the rolling recurrence (2^31). Outputs lie in `[0, 2^31)`.
pub const HASH_MODULUS: u64 = 1 << 31;

// == Hash ==
/// Hashes a string: `acc = (acc * 31 + code_point) mod 2^31` over its
/// Unicode scalar values, starting from zero.
pub fn hash(s: &str) -> u32 {
    hash_chars(s.chars())
}

// == Hash Chars ==
/// Streaming form of [`hash`]. `hash_chars(a.chars().chain(b.chars()))`
/// equals `hash(&format!("{a}{b}"))` without allocating.
pub fn hash_chars<I>(chars: I) -> u32
where
    I: IntoIterator<Item = char>,
{
    let acc = chars.into_iter().fold(0u64, |acc, c| {
        (acc * HASH_MULTIPLIER + u64::from(u32::from(c))) % HASH_MODULUS
    });

    // acc < 2^31 always fits
    acc as u32
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_fixtures() {
        assert_eq!(hash(""), 0);
        assert_eq!(hash("a"), 97);
        assert_eq!(hash("acme"), 2_988_346);
        assert_eq!(hash("example.com"), 203_470_589);
        assert_eq!(hash("https://example.com/page"), 1_330_315_056);
    }

    #[test]
    fn test_hash_non_ascii_uses_code_points() {
        assert_eq!(hash("héllo"), 103_094_734);
    }

    #[test]
    fn test_hash_chars_matches_concatenation() {
        let joined = hash("https://example.com/pagedomain-authority");
        let chained = hash_chars("https://example.com/page".chars().chain("domain-authority".chars()));
        assert_eq!(joined, chained);
        assert_eq!(joined, 1_484_208_298);
    }

    #[test]
    fn test_hash_stays_below_modulus() {
        let long = "z".repeat(10_000);
        assert!(u64::from(hash(&long)) < HASH_MODULUS);
        assert!(u64::from(hash("\u{10FFFF}\u{10FFFF}\u{10FFFF}")) < HASH_MODULUS);
    }

    #[test]
    fn test_hash_is_case_sensitive() {
        assert_ne!(hash("Example.com"), hash("example.com"));
    }
}
