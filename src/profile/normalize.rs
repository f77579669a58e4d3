// Token normalization.
//
// Every raw whitespace-delimited token is reduced to a comparison key: ASCII
// letters and digits only, uppercased. Anything else (punctuation, symbols,
// non-ASCII characters) is dropped. An empty result means the token carried
// no content and must not be counted.

/// Reduce a raw token to its normalized comparison key.
///
/// Returns an empty string when the token contains no ASCII alphanumerics.
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
