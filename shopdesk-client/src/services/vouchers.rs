//! Voucher API

use shared::models::{ActiveUpdate, Voucher, VoucherCreate, VoucherUpdate};
use shared::query::{PageQuery, VoucherFilters};
use shared::Page;

use super::resource::VOUCHERS;
use crate::error::ClientResult;
use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct VoucherService<C> {
    client: C,
}

impl<C: HttpClient> VoucherService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        page: u32,
        page_size: u32,
        filters: &VoucherFilters,
    ) -> ClientResult<Page<Voucher>> {
        VOUCHERS
            .list_page(&self.client, PageQuery::new(page, page_size), filters)
            .await
    }

    /// Codes are stored upper-case
    pub async fn create(&self, payload: &VoucherCreate) -> ClientResult<Voucher> {
        let mut payload = payload.clone();
        payload.code = payload.code.trim().to_uppercase();
        VOUCHERS.create(&self.client, &payload).await
    }

    pub async fn update(&self, id: &str, payload: &VoucherUpdate) -> ClientResult<Voucher> {
        VOUCHERS.update(&self.client, id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        VOUCHERS.remove(&self.client, id).await
    }

    pub async fn set_active(&self, id: &str, is_active: bool) -> ClientResult<Voucher> {
        VOUCHERS
            .patch_item(&self.client, id, "status", &ActiveUpdate { is_active })
            .await
    }
}
