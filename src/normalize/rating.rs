/// Parses an average rating, falling back to `0.0`
///
/// A product with no rating data and one explicitly rated zero both come
/// out as `0.0`.
///
/// # Examples
///
/// ```
/// use emag_scraper::normalize_rating;
///
/// assert_eq!(normalize_rating("4.5"), 4.5);
/// assert_eq!(normalize_rating(""), 0.0);
/// ```
pub fn normalize_rating(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
