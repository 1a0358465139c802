//! Category API

use shared::models::{Category, CategoryCreate, CategoryUpdate};

use super::resource::CATEGORIES;
use crate::error::ClientResult;
use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct CategoryService<C> {
    client: C,
}

impl<C: HttpClient> CategoryService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn list_all(&self) -> ClientResult<Vec<Category>> {
        CATEGORIES.list_all(&self.client).await
    }

    pub async fn create(&self, payload: &CategoryCreate) -> ClientResult<Category> {
        CATEGORIES.create(&self.client, payload).await
    }

    pub async fn update(&self, id: &str, payload: &CategoryUpdate) -> ClientResult<Category> {
        CATEGORIES.update(&self.client, id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        CATEGORIES.remove(&self.client, id).await
    }
}
