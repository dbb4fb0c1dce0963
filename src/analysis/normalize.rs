//! Input Normalizer
//!
//! Canonicalizes user input so equivalent strings share cache keys and hashes.

// == Normalize ==
/// Trims, lowercases ASCII letters and collapses every whitespace run into a
/// single space.
///
/// Non-ASCII letters are kept as-is and no URL canonicalization happens:
/// `"https://Example.com/"` and `"example.com"` stay distinct.
///
/// ```
/// use geoscan::analysis::normalize;
///
/// assert_eq!(normalize("  Example.COM  "), "example.com");
/// assert_eq!(normalize("Acme\t\n Corp"), "acme corp");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());

    for word in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.extend(word.chars().map(|c| c.to_ascii_lowercase()));
    }

    out
}
