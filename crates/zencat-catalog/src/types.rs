//! Wire types for the scraped Zen catalog feed (`zen_products.json`).
//!
//! ## Observed shape from the Selenium scraper's output
//!
//! ### `new_price`
//! Normally a number, but the scraper writes `null` when its price
//! extraction fails on a card (it logs the error and keeps the record).
//! We model it as `Option<f64>` and reject `None` during normalization —
//! a product without a current price cannot be sorted or rendered.
//!
//! ### `old_price`
//! `null` when the card shows a single price (no advertised discount).
//! When present it is the struck-through pre-sale price.
//!
//! ### `colors`
//! The text of the card's color note when one exists, `"N/A"` otherwise
//! (the scraper's own fallback). Older dumps omit the field entirely, so
//! `#[serde(default)]` covers both `null` and absent.
//!
//! ### `product_link`
//! Always present; the scraper dedups on it while scrolling, but partial
//! dumps concatenated by hand can still repeat links, so the loader dedups
//! again (first occurrence wins).

use serde::Deserialize;

/// A single record from the scraped feed, field-for-field as written by the
/// scraper.
#[derive(Debug, Deserialize)]
pub struct RawRecord {
    /// Display name from the card's heading.
    pub name: String,

    /// Storefront CDN image URL.
    pub image_url: String,

    /// Current price in TND, or `null` when price extraction failed.
    #[serde(default)]
    pub new_price: Option<f64>,

    /// Pre-sale price in TND, or `null` when no discount is advertised.
    #[serde(default)]
    pub old_price: Option<f64>,

    /// Free-form color note; `"N/A"` fallback written by the scraper. May
    /// be absent in older dumps.
    #[serde(default)]
    pub colors: Option<String>,

    /// Canonical storefront URL for the product page.
    pub product_link: String,
}
