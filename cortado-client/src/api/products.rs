//! Product endpoints

use crate::{ApiClient, ClientResult};
use shared::models::{Product, ProductCategory, ProductCreate, ProductUpdate};

impl ApiClient {
    /// List all products
    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.get("products").await
    }

    /// List products in a category
    pub async fn products_by_category(
        &self,
        category: ProductCategory,
    ) -> ClientResult<Vec<Product>> {
        self.get(&format!("products/category/{}", category.as_str()))
            .await
    }

    /// Create a product
    pub async fn create_product(&self, payload: &ProductCreate) -> ClientResult<Product> {
        self.post("products", payload).await
    }

    /// Replace a product; returns the updated product
    pub async fn update_product(&self, id: &str, payload: &ProductUpdate) -> ClientResult<Product> {
        self.put(&format!("products/{}", id), payload).await
    }

    /// Delete a product
    pub async fn delete_product(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("products/{}", id)).await
    }
}
