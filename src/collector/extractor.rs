//! Product card extraction
//!
//! Turns a parsed listing page into candidate [`RawItem`]s, one per product
//! card, in document order. Extraction never filters, deduplicates, or limits.

use crate::config::SelectorConfig;
use crate::url::resolve_href;
use crate::ConfigError;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use url::Url;

/// Rating text used when a card shows no rating
pub const DEFAULT_RATING_TEXT: &str = "0";

/// A candidate product as found on a listing page
#[derive(Debug, Clone, PartialEq)]
pub struct RawItem {
    /// Product name, if the card carries one
    pub name: Option<String>,

    /// Slug of the category the card was listed under
    pub category: String,

    /// Price text as displayed (e.g., "1.234,56 Lei")
    pub price_text: String,

    /// Average rating text, `"0"` when the card has none
    pub rating_text: String,

    /// Image URL, empty when the card has none
    pub image_url: String,

    /// Product page URL, empty when the card has none
    pub product_url: String,
}

/// A product card that could not be turned into a candidate
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("product card is missing its {field}")]
    MissingField { field: &'static str },
}

/// Compiled selectors for one site layout
#[derive(Debug, Clone)]
pub struct ProductExtractor {
    card: Selector,
    price: Selector,
    rating: Selector,
    image: Selector,
    link: Selector,
    name_attribute: String,
    image_attribute: String,
}

impl ProductExtractor {
    /// Compiles the configured selectors
    ///
    /// # Returns
    ///
    /// * `Ok(ProductExtractor)` - All selectors compiled
    /// * `Err(ConfigError::InvalidSelector)` - A selector is not valid CSS
    pub fn new(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            card: compile("product_card", &config.product_card)?,
            price: compile("price", &config.price)?,
            rating: compile("rating", &config.rating)?,
            image: compile("image", &config.image)?,
            link: compile("link", &config.link)?,
            name_attribute: config.name_attribute.clone(),
            image_attribute: config.image_attribute.clone(),
        })
    }

    /// Lazily extracts candidates from a listing page
    ///
    /// # Arguments
    ///
    /// * `document` - The parsed listing page
    /// * `page_url` - URL the page was requested from, used to resolve relative hrefs
    /// * `category` - Category slug stamped on every candidate
    ///
    /// # Returns
    ///
    /// One result per product card in document order. A card without a price
    /// yields an [`ExtractionError`] without interrupting the sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use emag_scraper::collector::ProductExtractor;
    /// use emag_scraper::config::SelectorConfig;
    /// use scraper::Html;
    /// use url::Url;
    ///
    /// let html = r#"<div class="card-standard" data-name="Mouse Logitech">
    ///     <p class="product-new-price">99,99 Lei</p>
    ///     <a class="js-product-url" href="/mouse/pd/M1/">Mouse</a>
    /// </div>"#;
    /// let extractor = ProductExtractor::new(&SelectorConfig::default()).unwrap();
    /// let document = Html::parse_document(html);
    /// let page_url = Url::parse("https://www.emag.ro/mouse/c").unwrap();
    ///
    /// let items: Vec<_> = extractor.extract(&document, &page_url, "mouse").collect();
    /// let item = items[0].as_ref().unwrap();
    /// assert_eq!(item.product_url, "https://www.emag.ro/mouse/pd/M1/");
    /// assert_eq!(item.rating_text, "0");
    /// ```
    pub fn extract<'a>(
        &'a self,
        document: &'a Html,
        page_url: &'a Url,
        category: &'a str,
    ) -> impl Iterator<Item = Result<RawItem, ExtractionError>> + 'a {
        document
            .select(&self.card)
            .map(move |card| self.extract_card(card, page_url, category))
    }

    /// Extracts a single product card
    fn extract_card(
        &self,
        card: ElementRef<'_>,
        page_url: &Url,
        category: &str,
    ) -> Result<RawItem, ExtractionError> {
        let name = card
            .value()
            .attr(&self.name_attribute)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        let price_text = card
            .select(&self.price)
            .next()
            .map(element_text)
            .ok_or(ExtractionError::MissingField { field: "price" })?;

        let rating_text = card
            .select(&self.rating)
            .next()
            .map(element_text)
            .unwrap_or_else(|| DEFAULT_RATING_TEXT.to_string());

        let image_url = card
            .select(&self.image)
            .next()
            .and_then(|img| img.value().attr(&self.image_attribute))
            .map(|src| resolve_href(src, page_url))
            .unwrap_or_default();

        let product_url = card
            .select(&self.link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(|href| resolve_href(href, page_url))
            .unwrap_or_default();

        Ok(RawItem {
            name,
            category: category.to_string(),
            price_text,
            rating_text,
            image_url,
            product_url,
        })
    }
}

fn compile(field: &str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector)
        .map_err(|e| ConfigError::InvalidSelector(format!("{} '{}': {}", field, selector, e)))
}

/// Concatenated, trimmed text content of an element
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
