use std::path::PathBuf;

use crate::app_config::{AppConfig, Theme};
use crate::error::ConfigError;
use crate::sort::parse_criterion;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let catalog_path = PathBuf::from(or_default(
        "ZENCAT_CATALOG_PATH",
        "./data/zen_products.json",
    ));
    let log_level = or_default("ZENCAT_LOG_LEVEL", "info");

    let raw_theme = or_default("ZENCAT_THEME", "light");
    let theme = parse_theme(&raw_theme).ok_or_else(|| ConfigError::InvalidEnvVar {
        var: "ZENCAT_THEME".to_string(),
        reason: format!("unknown theme '{raw_theme}' (expected 'light' or 'dark')"),
    })?;

    // Unrecognized criterion tokens fall back to Default silently; the
    // selection set is open at the UI boundary, unlike themes.
    let default_criterion = parse_criterion(&or_default("ZENCAT_SORT", ""));

    Ok(AppConfig {
        catalog_path,
        log_level,
        theme,
        default_criterion,
    })
}

/// Parse a string into a `Theme`. Themes are a closed set; `None` means the
/// value is not one of them.
#[must_use]
pub fn parse_theme(s: &str) -> Option<Theme> {
    match s.to_ascii_lowercase().as_str() {
        "light" => Some(Theme::Light),
        "dark" => Some(Theme::Dark),
        _ => None,
    }
}
