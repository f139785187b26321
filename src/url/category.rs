use crate::UrlError;
use percent_encoding::percent_decode_str;
use url::Url;

/// Slug used when a category URL has an empty path
pub const FALLBACK_SLUG: &str = "other";

/// Builds the listing URL for a category
///
/// The category is appended to the base URL as a path, so both
/// `"https://www.emag.ro"` and `"https://www.emag.ro/"` combined with
/// `"laptopuri/c"` or `"/laptopuri/c"` yield `https://www.emag.ro/laptopuri/c`.
///
/// # Arguments
///
/// * `base_url` - The site base URL
/// * `category` - The category path relative to the base URL
///
/// # Returns
///
/// * `Ok(Url)` - The absolute category URL
/// * `Err(UrlError)` - The combined URL is not a valid HTTP(S) URL
///
/// # Examples
///
/// ```
/// use emag_scraper::url::category_url;
///
/// let url = category_url("https://www.emag.ro", "laptopuri/c").unwrap();
/// assert_eq!(url.as_str(), "https://www.emag.ro/laptopuri/c");
/// ```
pub fn category_url(base_url: &str, category: &str) -> Result<Url, UrlError> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        category.trim().trim_start_matches('/')
    );

    let url = Url::parse(&joined).map_err(|e| UrlError::Parse(format!("{}: {}", joined, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost(joined));
    }

    Ok(url)
}

/// Derives the category slug from a listing URL
///
/// The slug is the first non-empty path segment, percent-decoded so it reads
/// as the category was written, or [`FALLBACK_SLUG`] when the path is empty.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use emag_scraper::url::category_slug;
///
/// let url = Url::parse("https://www.emag.ro/laptopuri/c").unwrap();
/// assert_eq!(category_slug(&url), "laptopuri");
///
/// let url = Url::parse("https://www.emag.ro/").unwrap();
/// assert_eq!(category_slug(&url), "other");
/// ```
pub fn category_slug(url: &Url) -> String {
    url.path()
        .trim_matches('/')
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_SLUG.to_string())
}
