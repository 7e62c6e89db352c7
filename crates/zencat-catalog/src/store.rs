//! The catalog store: an immutable, versioned product collection loaded
//! from the scraper's JSON feed.
//!
//! Per-record failures are logged and skipped rather than propagated so a
//! single bad record does not abort the feed. Only a whole-feed failure
//! (unreadable file, document not a JSON array) is an error.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use zencat_core::Product;

use crate::error::CatalogError;
use crate::normalize::normalize_record;
use crate::types::RawRecord;

/// Outcome of parsing a feed document: the accepted products plus counts of
/// what was dropped on the way.
#[derive(Debug)]
pub struct ParsedFeed {
    /// Accepted products in feed order.
    pub products: Vec<Product>,
    /// Records that failed to deserialize or normalize.
    pub skipped: usize,
    /// Records dropped because an earlier record had the same `product_link`.
    pub duplicates: usize,
}

/// Parse a feed document into products.
///
/// Malformed records are skipped with a warning and counted. Duplicate
/// `product_link`s keep the first occurrence, matching the scraper's own
/// dedup rule.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the document is not a JSON array.
pub fn parse_feed(raw: &str) -> Result<ParsedFeed, CatalogError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| CatalogError::Parse {
            context: "catalog feed".to_string(),
            source: e,
        })?;

    let mut products = Vec::with_capacity(values.len());
    let mut seen_links: HashSet<String> = HashSet::new();
    let mut skipped = 0usize;
    let mut duplicates = 0usize;

    for value in values {
        let record: RawRecord = match serde_json::from_value(value.clone()) {
            Ok(record) => record,
            Err(e) => {
                let name = value
                    .get("name")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("<unnamed>");
                tracing::warn!(name, error = %e, "skipping record — does not match feed shape");
                skipped += 1;
                continue;
            }
        };

        let product = match normalize_record(record) {
            Ok(product) => product,
            Err(e) => {
                tracing::warn!(error = %e, "skipping record — normalization failed");
                skipped += 1;
                continue;
            }
        };

        if !seen_links.insert(product.product_link.clone()) {
            tracing::debug!(link = %product.product_link, "dropping duplicate product_link");
            duplicates += 1;
            continue;
        }

        products.push(product);
    }

    Ok(ParsedFeed {
        products,
        skipped,
        duplicates,
    })
}

/// The raw product collection, read-only after load, plus the version stamp
/// that keys derived views.
#[derive(Debug)]
pub struct CatalogStore {
    products: Vec<Product>,
    version: u64,
    loaded_at: DateTime<Utc>,
}

impl CatalogStore {
    /// Build a store directly from already-normalized products. Version
    /// starts at 1.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products,
            version: 1,
            loaded_at: Utc::now(),
        }
    }

    /// Load the store from a feed file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Read`] if the file cannot be read and
    /// [`CatalogError::Parse`] if the document is not a JSON array. Both
    /// are load failures; the presentation boundary surfaces them as an
    /// empty catalog plus an error banner.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let parsed = read_feed(path)?;
        tracing::info!(
            path = %path.display(),
            products = parsed.products.len(),
            skipped = parsed.skipped,
            duplicates = parsed.duplicates,
            "catalog loaded"
        );
        Ok(Self::from_products(parsed.products))
    }

    /// Replace the collection from a feed file, bumping the version so
    /// memoized views recompute.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CatalogStore::load`]; on failure the current
    /// collection and version are left untouched.
    pub fn reload(&mut self, path: &Path) -> Result<(), CatalogError> {
        let parsed = read_feed(path)?;
        self.products = parsed.products;
        self.version += 1;
        self.loaded_at = Utc::now();
        Ok(())
    }

    /// The full collection in source order. Same elements on every call;
    /// sorting always works on a derived copy.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Memoization key component for derived views; bumped on every
    /// successful reload.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// When the current collection was loaded.
    #[must_use]
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn read_feed(path: &Path) -> Result<ParsedFeed, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_feed(&raw)
}
