use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, Validate,
};
use serde::{Deserialize, Serialize};

/// A single dish as served by the menu API.
///
/// `image` is either empty, a URL, or a base64 `data:image/...` URI.
/// `rating` is expected in `[0, 5]` and `reviews` is a plain count; neither
/// is validated here — see [`crate::core::featured`] for how out-of-range
/// values behave during scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub rating: f64,
    pub reviews: u32,
}

/// A menu category with its nested items, the shape `GET /categories` returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// Payload for creating an item; the API assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub rating: f64,
    pub reviews: u32,
}

impl Validate for NewMenuItem {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("title", &self.title)?;
        validate_non_empty_string("description", &self.description)?;
        validate_positive_number("price", self.price)?;
        validate_range("rating", self.rating, 0.0, 5.0)?;
        Ok(())
    }
}

/// Partial update for an existing item. Fields left as `None` are not sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
}
