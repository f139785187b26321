use url::Url;

/// Resolves an href found in a product card against the page URL
///
/// Returns an empty string for blank input. Hrefs that cannot be joined onto
/// the page URL, or that resolve to something other than HTTP(S), are kept as
/// written (trimmed) so the raw value still reaches the dataset.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use emag_scraper::url::resolve_href;
///
/// let page = Url::parse("https://www.emag.ro/laptopuri/c").unwrap();
/// assert_eq!(
///     resolve_href("/laptop-x/pd/ABC/", &page),
///     "https://www.emag.ro/laptop-x/pd/ABC/"
/// );
/// assert_eq!(resolve_href("   ", &page), "");
/// ```
pub fn resolve_href(href: &str, page_url: &Url) -> String {
    let href = href.trim();

    if href.is_empty() {
        return String::new();
    }

    match page_url.join(href) {
        Ok(absolute) if absolute.scheme() == "http" || absolute.scheme() == "https" => {
            absolute.to_string()
        }
        _ => href.to_string(),
    }
}
