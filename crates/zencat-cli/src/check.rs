//! The check command: validate a feed file without rendering.

use std::path::Path;

use zencat_catalog::parse_feed;

/// Parse the feed and report what a load would keep and drop.
///
/// # Errors
///
/// Unlike browse, an unreadable or unparsable feed is a hard error here,
/// and so is any malformed record: check exists to fail loudly on bad
/// dumps before they reach a browse.
pub(crate) fn run_check(catalog_path: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(catalog_path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", catalog_path.display()))?;
    let parsed = parse_feed(&raw)?;

    let discounted = parsed
        .products
        .iter()
        .filter(|p| p.discount().is_discounted)
        .count();

    println!("checked {}", catalog_path.display());
    println!("  products:   {}", parsed.products.len());
    println!("  discounted: {discounted}");
    println!("  skipped:    {}", parsed.skipped);
    println!("  duplicates: {}", parsed.duplicates);

    if parsed.skipped > 0 {
        anyhow::bail!("{} malformed record(s) in feed", parsed.skipped);
    }
    Ok(())
}
