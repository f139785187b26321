/// Tokens must be longer than this many characters to become tags
pub const MIN_TAG_CHARS: usize = 2;

/// Derives search tags from a product name
///
/// The name is lowercased, commas become spaces, and whitespace-separated
/// tokens longer than [`MIN_TAG_CHARS`] characters are kept in order.
/// Duplicates are kept.
///
/// # Examples
///
/// ```
/// use emag_scraper::derive_tags;
///
/// assert_eq!(
///     derive_tags(Some("Laptop Dell XPS, 15 inch")),
///     vec!["laptop", "dell", "xps", "inch"]
/// );
/// assert!(derive_tags(None).is_empty());
/// ```
pub fn derive_tags(name: Option<&str>) -> Vec<String> {
    let Some(name) = name else {
        return Vec::new();
    };

    name.to_lowercase()
        .replace(',', " ")
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TAG_CHARS)
        .map(str::to_string)
        .collect()
}
