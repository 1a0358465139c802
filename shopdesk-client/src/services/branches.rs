//! Branch API

use shared::models::{Branch, BranchCreate, BranchUpdate};

use super::resource::BRANCHES;
use crate::error::ClientResult;
use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct BranchService<C> {
    client: C,
}

impl<C: HttpClient> BranchService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn list_all(&self) -> ClientResult<Vec<Branch>> {
        BRANCHES.list_all(&self.client).await
    }

    /// Branches currently open to customers
    pub async fn list_active(&self) -> ClientResult<Vec<Branch>> {
        let branches = self.list_all().await?;
        Ok(branches.into_iter().filter(|b| b.is_active).collect())
    }

    pub async fn create(&self, payload: &BranchCreate) -> ClientResult<Branch> {
        BRANCHES.create(&self.client, payload).await
    }

    pub async fn update(&self, id: &str, payload: &BranchUpdate) -> ClientResult<Branch> {
        BRANCHES.update(&self.client, id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        BRANCHES.remove(&self.client, id).await
    }
}
