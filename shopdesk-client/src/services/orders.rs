//! Order API

use shared::models::{Order, OrderStatus, OrderStatusUpdate};
use shared::query::{OrderFilters, PageQuery};
use shared::Page;

use super::resource::ORDERS;
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct OrderService<C> {
    client: C,
}

impl<C: HttpClient> OrderService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        page: u32,
        page_size: u32,
        filters: &OrderFilters,
    ) -> ClientResult<Page<Order>> {
        ORDERS
            .list_page(&self.client, PageQuery::new(page, page_size), filters)
            .await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Order> {
        ORDERS.fetch_one(&self.client, id).await
    }

    pub async fn update_status(&self, id: &str, status: OrderStatus) -> ClientResult<Order> {
        if status == OrderStatus::Unknown {
            return Err(ClientError::Validation("Unknown order status".into()));
        }
        ORDERS
            .patch_item(&self.client, id, "status", &OrderStatusUpdate { status })
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        ORDERS.remove(&self.client, id).await
    }
}
