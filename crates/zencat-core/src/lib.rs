pub mod app_config;
pub mod config;
pub mod discount;
pub mod error;
pub mod products;
pub mod sort;

pub use app_config::{AppConfig, Theme};
pub use config::{load_app_config, load_app_config_from_env, parse_theme};
pub use discount::{compute_discount, DiscountInfo};
pub use error::ConfigError;
pub use products::Product;
pub use sort::{parse_criterion, sort_products, SortCriterion, SortedView};
