pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::rest::RestCatalog;
pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::catalog::CatalogService;
pub use core::featured::{
    composite_score, is_featurable, select_featured, select_featured_by_category,
    select_random_featured, select_random_featured_with, DEFAULT_FEATURED_LIMIT,
};
pub use domain::model::{MenuCategory, MenuItem, MenuItemPatch, NewMenuItem};
pub use utils::error::{MenuError, Result};
