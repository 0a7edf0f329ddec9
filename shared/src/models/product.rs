//! Product Model

use serde::{Deserialize, Serialize};

/// Menu category (closed set)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Coffee,
    Tea,
    Food,
    Dessert,
}

impl ProductCategory {
    /// All categories, in menu display order
    pub const ALL: [ProductCategory; 4] = [
        ProductCategory::Coffee,
        ProductCategory::Tea,
        ProductCategory::Food,
        ProductCategory::Dessert,
    ];

    /// Wire/route segment form (e.g. `/products/category/coffee`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coffee => "coffee",
            Self::Tea => "tea",
            Self::Food => "food",
            Self::Dessert => "dessert",
        }
    }

    /// Parse a wire string, rejecting anything outside the known set
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "coffee" => Some(Self::Coffee),
            "tea" => Some(Self::Tea),
            "food" => Some(Self::Food),
            "dessert" => Some(Self::Dessert),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in cents
    pub price: i64,
    pub category: ProductCategory,
    /// Image URL
    pub image: String,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    /// Price in cents
    pub price: i64,
    pub category: ProductCategory,
    pub image: Option<String>,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub category: Option<ProductCategory>,
    pub image: Option<String>,
}
