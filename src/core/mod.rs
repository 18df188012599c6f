pub mod catalog;
pub mod featured;

pub use crate::domain::model::{MenuCategory, MenuItem, MenuItemPatch, NewMenuItem};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
