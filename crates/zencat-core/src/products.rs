use serde::{Deserialize, Serialize};

use crate::discount::{compute_discount, DiscountInfo};

/// A product scraped from the Zen storefront, normalized for sorting and
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name from the product card. Not guaranteed unique in source
    /// data; `product_link` is the unique handle.
    pub name: String,
    /// Storefront CDN image URL, passed through opaquely.
    pub image_url: String,
    /// Current price in TND.
    pub new_price: f64,
    /// Pre-sale price, or `None` when no discount is advertised.
    pub old_price: Option<f64>,
    /// Free-form color note from the card, e.g. `"+ 2 couleurs"`. The
    /// scraper emits `"N/A"` when the card shows none. Display-only.
    pub colors: String,
    /// Canonical storefront URL. Unique per record after feed dedup.
    pub product_link: String,
}

impl Product {
    /// Derives the discount display data for this product.
    #[must_use]
    pub fn discount(&self) -> DiscountInfo {
        compute_discount(self.old_price, self.new_price)
    }

    /// Stable key for the rendered card.
    #[must_use]
    pub fn render_key(&self) -> &str {
        &self.product_link
    }
}
