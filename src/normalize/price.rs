/// Currency suffix printed after listing prices
pub const CURRENCY_SUFFIX: &str = "Lei";

/// Characters used as thousands separators in listing prices
const THOUSANDS_SEPARATORS: &[char] = &['.', ' ', '\u{a0}'];

/// Converts a listing price such as `"1.234,56 Lei"` into a number
///
/// Steps: trim, drop the currency suffix (case-insensitive), drop thousands
/// separators, turn the decimal comma into a decimal point, then parse.
/// Anything that does not parse into a finite number yields `None`.
///
/// # Examples
///
/// ```
/// use emag_scraper::normalize_price;
///
/// assert_eq!(normalize_price("1.234,56 Lei"), Some(1234.56));
/// assert_eq!(normalize_price("n/a"), None);
/// ```
pub fn normalize_price(raw: &str) -> Option<f64> {
    let amount = strip_currency(raw.trim()).trim();

    let numeric: String = amount
        .chars()
        .filter(|c| !THOUSANDS_SEPARATORS.contains(c))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    numeric.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn strip_currency(text: &str) -> &str {
    let split = text.len().saturating_sub(CURRENCY_SUFFIX.len());
    match (text.get(..split), text.get(split..)) {
        (Some(amount), Some(suffix)) if suffix.eq_ignore_ascii_case(CURRENCY_SUFFIX) => amount,
        _ => text,
    }
}
