use serde::Deserialize;

/// Browser-like identity sent with every listing page request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub limits: LimitsConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
    pub output: OutputConfig,
}

/// Target site and traversal order
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the site (e.g., "https://www.emag.ro")
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Category paths relative to the base URL, in priority order
    pub categories: Vec<String>,
}

/// Collection quotas
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LimitsConfig {
    /// Maximum number of products accepted across the whole run
    #[serde(rename = "max-products")]
    pub max_products: usize,

    /// Maximum number of products accepted from a single category
    #[serde(rename = "max-per-category")]
    pub max_per_category: usize,
}

/// HTTP request settings
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(
        rename = "connect-timeout-secs",
        default = "default_connect_timeout_secs"
    )]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// CSS selectors locating product data inside a listing page
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SelectorConfig {
    /// One element per product card
    pub product_card: String,

    /// Attribute of the card holding the product name
    pub name_attribute: String,

    /// Element holding the price text (mandatory per card)
    pub price: String,

    /// Element holding the average rating text
    pub rating: String,

    pub image: String,

    /// Attribute of the image element holding its URL
    pub image_attribute: String,

    /// Anchor linking to the product page
    pub link: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            product_card: "div.card-standard".to_string(),
            name_attribute: "data-name".to_string(),
            price: "p.product-new-price".to_string(),
            rating: "span.average-rating".to_string(),
            image: "img".to_string(),
            image_attribute: "src".to_string(),
            link: "a.js-product-url".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the JSON dataset
    #[serde(rename = "dataset-path")]
    pub dataset_path: String,

    /// Optional path of the markdown run report
    #[serde(rename = "summary-path", default)]
    pub summary_path: Option<String>,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}
