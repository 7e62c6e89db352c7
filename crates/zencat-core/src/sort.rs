//! Deterministic ordering of the product collection.
//!
//! The engine is pure: given the same `(products, criterion)` pair it always
//! yields the same output and never mutates its input. [`SortedView`] layers
//! the explicit memoization contract on top, keyed on the catalog version
//! and the active criterion.

use crate::products::Product;

/// User-selected sort order for the catalog view.
///
/// Transient per-invocation state; never persisted between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortCriterion {
    /// Source order, exactly as scraped.
    #[default]
    Default,
    /// `new_price` non-decreasing.
    PriceAscending,
    /// `new_price` non-increasing.
    PriceDescending,
}

impl std::fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortCriterion::Default => write!(f, "Default"),
            SortCriterion::PriceAscending => write!(f, "Price: Low to High"),
            SortCriterion::PriceDescending => write!(f, "Price: High to Low"),
        }
    }
}

/// Parse a selection token into a [`SortCriterion`].
///
/// Recognizes the storefront wire tokens (`""`, `"priceAsc"`, `"priceDesc"`)
/// and their kebab-case CLI spellings. Anything else falls back to
/// [`SortCriterion::Default`] silently — the selection set is open at the UI
/// boundary, and an unknown token is not an error.
#[must_use]
pub fn parse_criterion(s: &str) -> SortCriterion {
    match s.trim() {
        "priceAsc" | "price-asc" => SortCriterion::PriceAscending,
        "priceDesc" | "price-desc" => SortCriterion::PriceDescending,
        _ => SortCriterion::Default,
    }
}

/// Produce the display ordering for `criterion` as an independent sequence.
///
/// The input slice is never mutated. Ties on `new_price` keep their relative
/// source order (stable sort), and `Default` is the identity transform, so a
/// later `Default` call still reflects source order rather than the last
/// produced ordering.
#[must_use]
pub fn sort_products(products: &[Product], criterion: SortCriterion) -> Vec<Product> {
    let mut view = products.to_vec();
    match criterion {
        SortCriterion::Default => {}
        SortCriterion::PriceAscending => {
            view.sort_by(|a, b| a.new_price.total_cmp(&b.new_price));
        }
        SortCriterion::PriceDescending => {
            view.sort_by(|a, b| b.new_price.total_cmp(&a.new_price));
        }
    }
    view
}

/// Memoized derived view over a versioned product source.
///
/// Caches the last sorted sequence keyed on `(source_version, criterion)`
/// and recomputes only when the key changes — a criterion selection or a
/// catalog reload. Callers must bump the version whenever the source
/// collection changes; the cache trusts the key, not the slice contents.
#[derive(Debug, Default)]
pub struct SortedView {
    key: Option<(u64, SortCriterion)>,
    cached: Vec<Product>,
}

impl SortedView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ordered view for `criterion`, recomputing only when the
    /// source version or criterion differs from the cached key.
    pub fn products(
        &mut self,
        source_version: u64,
        source: &[Product],
        criterion: SortCriterion,
    ) -> &[Product] {
        let key = (source_version, criterion);
        if self.key != Some(key) {
            self.cached = sort_products(source, criterion);
            self.key = Some(key);
        }
        &self.cached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(name: &str, new_price: f64) -> Product {
        Product {
            name: name.to_string(),
            image_url: "https://www.zen.com.tn/img/p/1/2/3/123.jpg".to_string(),
            new_price,
            old_price: None,
            colors: "N/A".to_string(),
            product_link: format!("https://www.zen.com.tn/fr/tn/{name}"),
        }
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn default_is_the_identity_transform() {
        let source = vec![
            make_product("a", 50.0),
            make_product("b", 30.0),
            make_product("c", 70.0),
        ];
        let view = sort_products(&source, SortCriterion::Default);
        assert_eq!(view, source);
    }

    #[test]
    fn ascending_orders_by_new_price_non_decreasing() {
        let source = vec![
            make_product("a", 50.0),
            make_product("b", 30.0),
            make_product("c", 70.0),
        ];
        let view = sort_products(&source, SortCriterion::PriceAscending);
        assert_eq!(names(&view), ["b", "a", "c"]);
        assert!(view.windows(2).all(|w| w[0].new_price <= w[1].new_price));
    }

    #[test]
    fn descending_orders_by_new_price_non_increasing() {
        let source = vec![
            make_product("a", 50.0),
            make_product("b", 30.0),
            make_product("c", 70.0),
        ];
        let view = sort_products(&source, SortCriterion::PriceDescending);
        assert_eq!(names(&view), ["c", "a", "b"]);
        assert!(view.windows(2).all(|w| w[0].new_price >= w[1].new_price));
    }

    #[test]
    fn equal_prices_keep_source_order_ascending() {
        let source = vec![
            make_product("a", 50.0),
            make_product("b", 30.0),
            make_product("c", 30.0),
        ];
        let view = sort_products(&source, SortCriterion::PriceAscending);
        assert_eq!(names(&view), ["b", "c", "a"]);
    }

    #[test]
    fn equal_prices_keep_source_order_descending() {
        let source = vec![
            make_product("a", 30.0),
            make_product("b", 70.0),
            make_product("c", 30.0),
        ];
        let view = sort_products(&source, SortCriterion::PriceDescending);
        assert_eq!(names(&view), ["b", "a", "c"]);
    }

    #[test]
    fn sorting_never_mutates_the_source() {
        let source = vec![
            make_product("a", 50.0),
            make_product("b", 30.0),
            make_product("c", 70.0),
        ];
        let before = source.clone();
        let _ = sort_products(&source, SortCriterion::PriceAscending);
        let _ = sort_products(&source, SortCriterion::PriceDescending);
        assert_eq!(source, before);
    }

    #[test]
    fn default_after_ascending_reflects_source_order() {
        let source = vec![make_product("a", 50.0), make_product("b", 30.0)];
        let _ = sort_products(&source, SortCriterion::PriceAscending);
        let view = sort_products(&source, SortCriterion::Default);
        assert_eq!(names(&view), ["a", "b"]);
    }

    #[test]
    fn empty_input_yields_empty_output_for_any_criterion() {
        for criterion in [
            SortCriterion::Default,
            SortCriterion::PriceAscending,
            SortCriterion::PriceDescending,
        ] {
            assert!(sort_products(&[], criterion).is_empty());
        }
    }

    #[test]
    fn parse_criterion_recognizes_wire_tokens() {
        assert_eq!(parse_criterion(""), SortCriterion::Default);
        assert_eq!(parse_criterion("priceAsc"), SortCriterion::PriceAscending);
        assert_eq!(parse_criterion("priceDesc"), SortCriterion::PriceDescending);
    }

    #[test]
    fn parse_criterion_recognizes_cli_spellings() {
        assert_eq!(parse_criterion("price-asc"), SortCriterion::PriceAscending);
        assert_eq!(parse_criterion("price-desc"), SortCriterion::PriceDescending);
    }

    #[test]
    fn parse_criterion_unknown_falls_back_to_default() {
        assert_eq!(parse_criterion("alphabetical"), SortCriterion::Default);
        assert_eq!(parse_criterion("PRICEASC"), SortCriterion::Default);
    }

    #[test]
    fn display_labels_match_the_selection_control() {
        assert_eq!(SortCriterion::Default.to_string(), "Default");
        assert_eq!(
            SortCriterion::PriceAscending.to_string(),
            "Price: Low to High"
        );
        assert_eq!(
            SortCriterion::PriceDescending.to_string(),
            "Price: High to Low"
        );
    }

    #[test]
    fn sorted_view_reuses_cache_for_unchanged_key() {
        let source = vec![make_product("a", 50.0), make_product("b", 30.0)];
        let mut view = SortedView::new();

        let first = view
            .products(1, &source, SortCriterion::PriceAscending)
            .to_vec();
        // Same key with a different slice: the cache trusts the version and
        // must not recompute.
        let other = vec![make_product("z", 1.0)];
        let second = view
            .products(1, &other, SortCriterion::PriceAscending)
            .to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn sorted_view_recomputes_when_criterion_changes() {
        let source = vec![make_product("a", 50.0), make_product("b", 30.0)];
        let mut view = SortedView::new();

        let asc = view
            .products(1, &source, SortCriterion::PriceAscending)
            .to_vec();
        assert_eq!(names(&asc), ["b", "a"]);
        let desc = view
            .products(1, &source, SortCriterion::PriceDescending)
            .to_vec();
        assert_eq!(names(&desc), ["a", "b"]);
    }

    #[test]
    fn sorted_view_recomputes_when_version_changes() {
        let old_source = vec![make_product("a", 50.0)];
        let new_source = vec![make_product("b", 30.0)];
        let mut view = SortedView::new();

        let _ = view.products(1, &old_source, SortCriterion::Default);
        let reloaded = view
            .products(2, &new_source, SortCriterion::Default)
            .to_vec();
        assert_eq!(names(&reloaded), ["b"]);
    }
}
