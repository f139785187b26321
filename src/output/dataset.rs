//! JSON dataset writer
//!
//! Accepted items are normalized into [`ProductRecord`]s at write time and
//! serialized as one pretty-printed JSON array.

use crate::collector::RawItem;
use crate::normalize::{derive_tags, normalize_price, normalize_rating};
use crate::output::types::{OutputError, OutputResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One product in the output dataset
///
/// Field order matches the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// `p<N>`, N being the 1-based acceptance position
    pub id: String,
    pub name: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub price: Option<f64>,
    pub rating: f64,
    pub image_url: String,
    pub product_url: String,
}

impl ProductRecord {
    /// Normalizes an accepted item at the given 1-based position
    pub fn from_raw(position: usize, raw: &RawItem) -> Self {
        Self {
            id: format!("p{}", position),
            name: raw.name.clone(),
            category: raw.category.clone(),
            tags: derive_tags(raw.name.as_deref()),
            price: normalize_price(&raw.price_text),
            rating: normalize_rating(&raw.rating_text),
            image_url: raw.image_url.clone(),
            product_url: raw.product_url.clone(),
        }
    }
}

/// Builds dataset records in acceptance order
pub fn build_records(items: &[RawItem]) -> Vec<ProductRecord> {
    items
        .iter()
        .enumerate()
        .map(|(index, raw)| ProductRecord::from_raw(index + 1, raw))
        .collect()
}

/// Writes the dataset for the accepted items
///
/// # Arguments
///
/// * `items` - Accepted items in acceptance order
/// * `output_path` - Destination of the JSON file (overwritten)
///
/// # Returns
///
/// * `Ok(usize)` - Number of records written
/// * `Err(OutputError)` - The dataset could not be serialized or written
pub fn write_dataset(items: &[RawItem], output_path: &Path) -> OutputResult<usize> {
    let records = build_records(items);
    let json = serde_json::to_string_pretty(&records)?;

    let write_error = |source| OutputError::Write {
        path: output_path.display().to_string(),
        source,
    };

    let mut file = File::create(output_path).map_err(write_error)?;
    file.write_all(json.as_bytes()).map_err(write_error)?;

    for record in &records {
        tracing::trace!("{}", format_product(record));
    }

    tracing::info!(
        "Saved {} products to {}",
        records.len(),
        output_path.display()
    );

    Ok(records.len())
}

/// Renders a record as a short multi-line description for logs and terminals
pub fn format_product(record: &ProductRecord) -> String {
    let price = record
        .price
        .map(|p| format!("{:.2}", p))
        .unwrap_or_else(|| "n/a".to_string());

    format!(
        "Product: {}\nCategory: {}\nPrice: {}\nRating: {}\nImage: {}\nURL: {}",
        record.name.as_deref().unwrap_or("(unnamed)"),
        record.category,
        price,
        record.rating,
        record.image_url,
        record.product_url
    )
}
