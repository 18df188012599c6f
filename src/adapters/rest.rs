//! REST implementation of [`CatalogSource`].
//!
//! Endpoint shape:
//!   GET    /categories
//!   POST   /categories                     { "name": ... }
//!   PUT    /categories/{id}                { "name": ... }
//!   DELETE /categories/{id}
//!   POST   /categories/{id}/items
//!   PUT    /categories/{id}/items/{item_id}
//!   DELETE /categories/{id}/items/{item_id}

use crate::domain::model::{MenuCategory, MenuItem, MenuItemPatch, NewMenuItem};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RestCatalog {
    base_url: String,
    client: Client,
}

impl RestCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            client: Client::new(),
        }
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: normalize_base_url(base_url.into()),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[async_trait]
impl CatalogSource for RestCatalog {
    async fn fetch_categories(&self) -> Result<Vec<MenuCategory>> {
        tracing::debug!("GET {}", self.url("categories"));
        let categories = self
            .client
            .get(self.url("categories"))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<MenuCategory>>()
            .await?;
        Ok(categories)
    }

    async fn create_category(&self, name: &str) -> Result<MenuCategory> {
        let created = self
            .client
            .post(self.url("categories"))
            .json(&json!({ "name": name }))
            .send()
            .await?
            .error_for_status()?
            .json::<MenuCategory>()
            .await?;
        Ok(created)
    }

    async fn rename_category(&self, category_id: &str, name: &str) -> Result<MenuCategory> {
        let updated = self
            .client
            .put(self.url(&format!("categories/{}", category_id)))
            .json(&json!({ "name": name }))
            .send()
            .await?
            .error_for_status()?
            .json::<MenuCategory>()
            .await?;
        Ok(updated)
    }

    async fn delete_category(&self, category_id: &str) -> Result<()> {
        self.client
            .delete(self.url(&format!("categories/{}", category_id)))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn create_item(&self, category_id: &str, item: &NewMenuItem) -> Result<MenuItem> {
        let created = self
            .client
            .post(self.url(&format!("categories/{}/items", category_id)))
            .json(item)
            .send()
            .await?
            .error_for_status()?
            .json::<MenuItem>()
            .await?;
        Ok(created)
    }

    async fn update_item(
        &self,
        category_id: &str,
        item_id: u64,
        patch: &MenuItemPatch,
    ) -> Result<MenuItem> {
        let updated = self
            .client
            .put(self.url(&format!("categories/{}/items/{}", category_id, item_id)))
            .json(patch)
            .send()
            .await?
            .error_for_status()?
            .json::<MenuItem>()
            .await?;
        Ok(updated)
    }

    async fn delete_item(&self, category_id: &str, item_id: u64) -> Result<()> {
        self.client
            .delete(self.url(&format!("categories/{}/items/{}", category_id, item_id)))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
