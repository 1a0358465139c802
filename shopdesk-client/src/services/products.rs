//! Product API

use shared::models::{ActiveUpdate, Product, ProductCreate, ProductUpdate};
use shared::query::{PageQuery, ProductFilters};
use shared::Page;

use super::resource::PRODUCTS;
use crate::error::ClientResult;
use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct ProductService<C> {
    client: C,
}

impl<C: HttpClient> ProductService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        page: u32,
        page_size: u32,
        filters: &ProductFilters,
    ) -> ClientResult<Page<Product>> {
        PRODUCTS
            .list_page(&self.client, PageQuery::new(page, page_size), filters)
            .await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Product> {
        PRODUCTS.fetch_one(&self.client, id).await
    }

    pub async fn create(&self, payload: &ProductCreate) -> ClientResult<Product> {
        PRODUCTS.create(&self.client, payload).await
    }

    pub async fn update(&self, id: &str, payload: &ProductUpdate) -> ClientResult<Product> {
        PRODUCTS.update(&self.client, id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        PRODUCTS.remove(&self.client, id).await
    }

    /// Show or hide a product on the storefront
    pub async fn set_active(&self, id: &str, is_active: bool) -> ClientResult<Product> {
        PRODUCTS
            .patch_item(&self.client, id, "status", &ActiveUpdate { is_active })
            .await
    }
}
