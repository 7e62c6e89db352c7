//! The browse command: load the catalog, derive the ordered view, render
//! the card grid.

use std::path::Path;

use zencat_catalog::CatalogStore;
use zencat_core::{parse_criterion, parse_theme, AppConfig, SortedView};

use crate::render;

/// Load and render the catalog under the selected criterion and theme.
///
/// A load failure is surfaced as an error banner over an empty grid, not a
/// process failure: the feed comes from an external scraper, and a bad dump
/// must not look like a broken browser. An unknown `--theme` IS a hard
/// error — themes are a closed set — while an unknown sort token silently
/// falls back to source order.
pub(crate) fn run_browse(
    config: &AppConfig,
    catalog_path: &Path,
    sort: Option<&str>,
    theme: Option<&str>,
) -> anyhow::Result<()> {
    let criterion = sort.map_or(config.default_criterion, parse_criterion);
    let theme = match theme {
        Some(raw) => parse_theme(raw)
            .ok_or_else(|| anyhow::anyhow!("unknown theme '{raw}' (expected 'light' or 'dark')"))?,
        None => config.theme,
    };

    let store = match CatalogStore::load(catalog_path) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, path = %catalog_path.display(), "catalog load failed");
            println!("{}", render::render_load_failure(&e, theme));
            return Ok(());
        }
    };

    let mut view = SortedView::new();
    let ordered = view.products(store.version(), store.products(), criterion);
    println!("{}", render::render_catalog(ordered, criterion, theme));
    Ok(())
}
