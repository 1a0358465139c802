//! Shipping fee API

use shared::models::{ShippingFee, ShippingFeeCreate, ShippingFeeUpdate};

use super::resource::SHIPPING_FEES;
use crate::error::ClientResult;
use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct ShippingFeeService<C> {
    client: C,
}

impl<C: HttpClient> ShippingFeeService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn list_all(&self) -> ClientResult<Vec<ShippingFee>> {
        SHIPPING_FEES.list_all(&self.client).await
    }

    pub async fn create(&self, payload: &ShippingFeeCreate) -> ClientResult<ShippingFee> {
        SHIPPING_FEES.create(&self.client, payload).await
    }

    pub async fn update(&self, id: &str, payload: &ShippingFeeUpdate) -> ClientResult<ShippingFee> {
        SHIPPING_FEES.update(&self.client, id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        SHIPPING_FEES.remove(&self.client, id).await
    }
}
