//! Terminal rendering of the card grid.
//!
//! One card per product: name, price line, color note, image and product
//! links. The struck-through old price and the percent-off badge appear
//! only when the discount derivation says so. Price tones follow the
//! storefront: current price green, old price red.

use colored::{ColoredString, Colorize};
use zencat_catalog::CatalogError;
use zencat_core::{DiscountInfo, Product, SortCriterion, Theme};

/// Render the full ordered view as a card grid.
pub(crate) fn render_catalog(
    products: &[Product],
    criterion: SortCriterion,
    theme: Theme,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}\n\n",
        title(&format!("Zen catalog — {} products", products.len()), theme),
        muted(&format!("sorted by: {criterion}"), theme),
    ));
    for product in products {
        out.push_str(&render_card(product, product.discount(), theme));
        out.push('\n');
    }
    out
}

/// Render a single product card from the `(product, discount)` pair the
/// presentation contract hands over.
pub(crate) fn render_card(product: &Product, discount: DiscountInfo, theme: Theme) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", title(&product.name, theme)));

    let price = format!("{:.2} TND", product.new_price).green().bold();
    match (discount.is_discounted, product.old_price) {
        (true, Some(old)) => {
            let struck = format!("{old:.2} TND").red().strikethrough();
            let badge = format!("{:.1}% OFF", discount.percent_off)
                .bold()
                .white()
                .on_red();
            out.push_str(&format!("  {price}  {struck}  {badge}\n"));
        }
        _ => out.push_str(&format!("  {price}\n")),
    }

    out.push_str(&format!("  {}\n", muted(&product.colors, theme)));
    out.push_str(&format!("  {}\n", muted(&product.image_url, theme)));
    out.push_str(&format!("  {}\n", muted(&product.product_link, theme)));
    out
}

/// Error banner plus an empty grid for a feed that could not be loaded.
pub(crate) fn render_load_failure(error: &CatalogError, theme: Theme) -> String {
    format!(
        "{}\n{}\n",
        format!("could not load catalog: {error}").red().bold(),
        muted("0 products to show", theme),
    )
}

fn title(s: &str, theme: Theme) -> ColoredString {
    match theme {
        Theme::Light => s.black().bold(),
        Theme::Dark => s.bright_white().bold(),
    }
}

fn muted(s: &str, theme: Theme) -> ColoredString {
    match theme {
        Theme::Light => s.dimmed(),
        Theme::Dark => s.bright_black(),
    }
}
