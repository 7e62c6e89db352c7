//! Normalization from raw feed records to [`zencat_core::Product`].
//!
//! One record in, one product or one [`CatalogError::Malformed`] out; the
//! skip-and-continue policy lives in [`crate::store`], not here.

use zencat_core::Product;

use crate::error::CatalogError;
use crate::types::RawRecord;

/// Fallback color note, matching what the scraper writes when a card has no
/// color element.
const COLORS_FALLBACK: &str = "N/A";

/// Normalizes a raw feed record into a [`Product`].
///
/// # Errors
///
/// Returns [`CatalogError::Malformed`] when the record has an empty name or
/// an absent, non-finite, or negative `new_price`.
pub fn normalize_record(record: RawRecord) -> Result<Product, CatalogError> {
    if record.name.trim().is_empty() {
        return Err(CatalogError::Malformed {
            name: record.product_link,
            reason: "empty name".to_string(),
        });
    }

    let Some(new_price) = record.new_price else {
        return Err(CatalogError::Malformed {
            name: record.name,
            reason: "missing new_price".to_string(),
        });
    };
    if !new_price.is_finite() || new_price < 0.0 {
        return Err(CatalogError::Malformed {
            name: record.name,
            reason: format!("invalid new_price {new_price}"),
        });
    }

    // A non-finite old price cannot carry a discount; drop it rather than
    // rejecting an otherwise-valid record.
    let old_price = record.old_price.filter(|p| p.is_finite());

    let colors = record
        .colors
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| COLORS_FALLBACK.to_string());

    Ok(Product {
        name: record.name,
        image_url: record.image_url,
        new_price,
        old_price,
        colors,
        product_link: record.product_link,
    })
}
