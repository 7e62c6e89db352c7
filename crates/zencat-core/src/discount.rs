//! Per-product discount derivation.
//!
//! Derived on demand for each rendered card and never cached; the
//! computation is O(1), so recomputing on every view refresh costs less
//! than carrying cache state.

/// Discount display data derived from a product's price pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountInfo {
    pub is_discounted: bool,
    /// Percent reduction from the old price, rounded to one decimal place
    /// for the badge. `0.0` when `is_discounted` is `false`.
    pub percent_off: f64,
}

impl DiscountInfo {
    /// The value for every card without an advertised discount.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            is_discounted: false,
            percent_off: 0.0,
        }
    }
}

/// Computes discount display data from an optional pre-sale price and the
/// current price.
///
/// A discount exists only when an old price is present, finite, strictly
/// positive, and strictly greater than the new price. A zero or negative
/// old price is a scrape artifact and is treated as "no discount" rather
/// than divided by.
#[must_use]
pub fn compute_discount(old_price: Option<f64>, new_price: f64) -> DiscountInfo {
    let Some(old) = old_price else {
        return DiscountInfo::none();
    };
    if !old.is_finite() || old <= 0.0 || new_price >= old {
        return DiscountInfo::none();
    }
    let percent = (old - new_price) / old * 100.0;
    DiscountInfo {
        is_discounted: true,
        percent_off: (percent * 10.0).round() / 10.0,
    }
}
