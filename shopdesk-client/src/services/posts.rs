//! Blog post API

use shared::models::{Post, PostCreate, PostUpdate};
use shared::query::{PageQuery, PostFilters};
use shared::Page;

use super::resource::POSTS;
use crate::error::ClientResult;
use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct PostService<C> {
    client: C,
}

impl<C: HttpClient> PostService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        page: u32,
        page_size: u32,
        filters: &PostFilters,
    ) -> ClientResult<Page<Post>> {
        POSTS
            .list_page(&self.client, PageQuery::new(page, page_size), filters)
            .await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Post> {
        POSTS.fetch_one(&self.client, id).await
    }

    pub async fn create(&self, payload: &PostCreate) -> ClientResult<Post> {
        POSTS.create(&self.client, payload).await
    }

    pub async fn update(&self, id: &str, payload: &PostUpdate) -> ClientResult<Post> {
        POSTS.update(&self.client, id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        POSTS.remove(&self.client, id).await
    }
}
