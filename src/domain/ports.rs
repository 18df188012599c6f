use crate::domain::model::{MenuCategory, MenuItem, MenuItemPatch, NewMenuItem};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote catalog the client talks to. The REST adapter implements this;
/// tests substitute an in-memory fake.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_categories(&self) -> Result<Vec<MenuCategory>>;

    async fn create_category(&self, name: &str) -> Result<MenuCategory>;
    async fn rename_category(&self, category_id: &str, name: &str) -> Result<MenuCategory>;
    async fn delete_category(&self, category_id: &str) -> Result<()>;

    async fn create_item(&self, category_id: &str, item: &NewMenuItem) -> Result<MenuItem>;
    async fn update_item(
        &self,
        category_id: &str,
        item_id: u64,
        patch: &MenuItemPatch,
    ) -> Result<MenuItem>;
    async fn delete_item(&self, category_id: &str, item_id: u64) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn featured_limit(&self) -> usize;
    fn timeout_seconds(&self) -> u64;
}
