//! Banner API

use shared::models::{Banner, BannerCreate, BannerUpdate};

use super::resource::BANNERS;
use crate::error::ClientResult;
use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct BannerService<C> {
    client: C,
}

impl<C: HttpClient> BannerService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// All banners in display order
    pub async fn list_all(&self) -> ClientResult<Vec<Banner>> {
        let mut banners: Vec<Banner> = BANNERS.list_all(&self.client).await?;
        banners.sort_by_key(|b| b.position);
        Ok(banners)
    }

    pub async fn create(&self, payload: &BannerCreate) -> ClientResult<Banner> {
        BANNERS.create(&self.client, payload).await
    }

    pub async fn update(&self, id: &str, payload: &BannerUpdate) -> ClientResult<Banner> {
        BANNERS.update(&self.client, id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        BANNERS.remove(&self.client, id).await
    }
}
