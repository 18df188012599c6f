//! In-memory catalog snapshot synced against a remote [`CatalogSource`].
//!
//! Mutations go to the source first; the local snapshot is only patched once
//! the remote call succeeds, so the snapshot never gets ahead of the API.

use crate::core::featured;
use crate::domain::model::{MenuCategory, MenuItem, MenuItemPatch, NewMenuItem};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{MenuError, Result};

pub struct CatalogService<S: CatalogSource> {
    source: S,
    snapshot: Vec<MenuCategory>,
}

impl<S: CatalogSource> CatalogService<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            snapshot: Vec::new(),
        }
    }

    /// Reload the full catalog from the source.
    pub async fn refresh(&mut self) -> Result<()> {
        let categories = self.source.fetch_categories().await?;
        tracing::debug!("Loaded {} categories from API", categories.len());
        self.snapshot = categories;
        Ok(())
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.snapshot
    }

    pub fn category(&self, category_id: &str) -> Option<&MenuCategory> {
        self.snapshot.iter().find(|c| c.id == category_id)
    }

    pub async fn add_category(&mut self, name: &str) -> Result<MenuCategory> {
        let created = self.source.create_category(name).await?;
        tracing::info!("Category added: {} ({})", created.name, created.id);
        self.snapshot.push(created.clone());
        Ok(created)
    }

    pub async fn rename_category(&mut self, category_id: &str, name: &str) -> Result<()> {
        let updated = self.source.rename_category(category_id, name).await?;
        let category = self.category_mut(category_id)?;
        category.name = updated.name;
        tracing::info!("Category renamed: {}", category_id);
        Ok(())
    }

    pub async fn remove_category(&mut self, category_id: &str) -> Result<()> {
        self.source.delete_category(category_id).await?;
        self.snapshot.retain(|c| c.id != category_id);
        tracing::info!("Category removed: {}", category_id);
        Ok(())
    }

    pub async fn add_item(&mut self, category_id: &str, item: &NewMenuItem) -> Result<MenuItem> {
        let created = self.source.create_item(category_id, item).await?;
        let category = self.category_mut(category_id)?;
        category.items.push(created.clone());
        tracing::info!("Item added: {} ({})", created.title, created.id);
        Ok(created)
    }

    pub async fn update_item(
        &mut self,
        category_id: &str,
        item_id: u64,
        patch: &MenuItemPatch,
    ) -> Result<MenuItem> {
        let updated = self.source.update_item(category_id, item_id, patch).await?;
        let category = self.category_mut(category_id)?;
        match category.items.iter_mut().find(|i| i.id == item_id) {
            Some(slot) => *slot = updated.clone(),
            None => {
                return Err(MenuError::NotFound {
                    resource: "menu item".to_string(),
                    id: item_id.to_string(),
                })
            }
        }
        tracing::info!("Item updated: {}", item_id);
        Ok(updated)
    }

    pub async fn remove_item(&mut self, category_id: &str, item_id: u64) -> Result<()> {
        self.source.delete_item(category_id, item_id).await?;
        let category = self.category_mut(category_id)?;
        category.items.retain(|i| i.id != item_id);
        tracing::info!("Item removed: {}", item_id);
        Ok(())
    }

    /// Featured dishes across every category of the current snapshot.
    pub fn featured_dishes(&self, limit: usize) -> Vec<MenuItem> {
        let all_items = self.flatten();
        featured::select_featured(&all_items, limit)
    }

    /// Featured dishes from a single category. Empty if the category is unknown.
    pub fn featured_by_category(&self, category_id: &str, limit: usize) -> Vec<MenuItem> {
        featured::select_featured_by_category(&self.snapshot, category_id, limit)
    }

    /// Randomized featured dishes, drawn from an oversampled ranked pool.
    pub fn random_featured(&self, limit: usize) -> Vec<MenuItem> {
        let all_items = self.flatten();
        featured::select_random_featured(&all_items, limit)
    }

    fn flatten(&self) -> Vec<MenuItem> {
        self.snapshot
            .iter()
            .flat_map(|c| c.items.iter().cloned())
            .collect()
    }

    fn category_mut(&mut self, category_id: &str) -> Result<&mut MenuCategory> {
        self.snapshot
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or_else(|| MenuError::NotFound {
                resource: "category".to_string(),
                id: category_id.to_string(),
            })
    }
}
