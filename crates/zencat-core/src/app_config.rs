use std::path::PathBuf;

use crate::sort::SortCriterion;

/// Presentation theme for the rendered grid.
///
/// Passed down explicitly to the renderer; never held as a process global,
/// so the rendering path stays independently testable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Application configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the scraped catalog JSON feed.
    pub catalog_path: PathBuf,
    /// Fallback log filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub theme: Theme,
    /// Criterion applied when the user selects none.
    pub default_criterion: SortCriterion,
}
