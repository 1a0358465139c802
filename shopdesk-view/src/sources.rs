//! List sources backed by the resource services
//!
//! Each source turns the string-valued [`FilterState`] of its page into the
//! typed filters its service sends. A filter value the backend cannot
//! understand fails the fetch with [`ClientError::Validation`] instead of
//! being sent.

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{Order, OrderStatus, Post, Product, User, Voucher};
use shared::query::{OrderFilters, PostFilters, ProductFilters, UserFilters, VoucherFilters};
use shared::Page;
use shopdesk_client::services::{
    OrderService, PostService, ProductService, UserService, VoucherService,
};
use shopdesk_client::{ClientError, ClientResult, HttpClient};

use crate::filter::{
    FilterSchema, FilterState, ORDER_FILTERS, POST_FILTERS, PRODUCT_FILTERS, USER_FILTERS,
    VOUCHER_FILTERS,
};
use crate::list::ListSource;

fn owned(state: &FilterState, key: &str) -> Option<String> {
    state.active(key).map(str::to_string)
}

/// `active` / `inactive` status filter
fn active_flag(state: &FilterState, key: &str) -> ClientResult<Option<bool>> {
    state.active(key).map(parse_active).transpose()
}

fn parse_active(value: &str) -> ClientResult<bool> {
    match value {
        "active" => Ok(true),
        "inactive" => Ok(false),
        other => Err(ClientError::Validation(format!("Unknown status `{other}`"))),
    }
}

pub fn product_filters(state: &FilterState) -> ClientResult<ProductFilters> {
    Ok(ProductFilters {
        search: owned(state, "search"),
        category: owned(state, "category"),
        is_active: active_flag(state, "status")?,
        is_featured: None,
    })
}

pub fn order_filters(state: &FilterState) -> ClientResult<OrderFilters> {
    let status = state
        .active("status")
        .map(|s| {
            s.parse::<OrderStatus>()
                .map_err(|e| ClientError::Validation(e.to_string()))
        })
        .transpose()?;
    let date = state
        .active("date")
        .map(|d| {
            NaiveDate::parse_from_str(d, "%Y-%m-%d")
                .map_err(|_| ClientError::Validation(format!("Invalid date `{d}`")))
        })
        .transpose()?;
    Ok(OrderFilters {
        search: owned(state, "search"),
        status,
        date,
    })
}

pub fn user_filters(state: &FilterState) -> UserFilters {
    UserFilters {
        search: owned(state, "search"),
        role: owned(state, "role"),
    }
}

pub fn voucher_filters(state: &FilterState) -> ClientResult<VoucherFilters> {
    Ok(VoucherFilters {
        search: owned(state, "search"),
        is_active: active_flag(state, "status")?,
    })
}

pub fn post_filters(state: &FilterState) -> PostFilters {
    PostFilters {
        search: owned(state, "search"),
        category: owned(state, "category"),
        is_published: None,
    }
}

#[derive(Debug, Clone)]
pub struct ProductList<C> {
    service: ProductService<C>,
}

impl<C: HttpClient> ProductList<C> {
    pub fn new(client: C) -> Self {
        Self {
            service: ProductService::new(client),
        }
    }
}

#[async_trait]
impl<C: HttpClient + 'static> ListSource for ProductList<C> {
    type Item = Product;

    fn schema(&self) -> &'static FilterSchema {
        &PRODUCT_FILTERS
    }

    async fn fetch(&self, filters: &FilterState, page_size: u32) -> ClientResult<Page<Product>> {
        let query = product_filters(filters)?;
        self.service.list(filters.page(), page_size, &query).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.service.delete(id).await
    }

    async fn update_status(&self, id: &str, status: &str) -> ClientResult<()> {
        self.service.set_active(id, parse_active(status)?).await?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct OrderList<C> {
    service: OrderService<C>,
}

impl<C: HttpClient> OrderList<C> {
    pub fn new(client: C) -> Self {
        Self {
            service: OrderService::new(client),
        }
    }
}

#[async_trait]
impl<C: HttpClient + 'static> ListSource for OrderList<C> {
    type Item = Order;

    fn schema(&self) -> &'static FilterSchema {
        &ORDER_FILTERS
    }

    async fn fetch(&self, filters: &FilterState, page_size: u32) -> ClientResult<Page<Order>> {
        let query = order_filters(filters)?;
        self.service.list(filters.page(), page_size, &query).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.service.delete(id).await
    }

    async fn update_status(&self, id: &str, status: &str) -> ClientResult<()> {
        let status = status
            .parse::<OrderStatus>()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        self.service.update_status(id, status).await?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct UserList<C> {
    service: UserService<C>,
}

impl<C: HttpClient> UserList<C> {
    pub fn new(client: C) -> Self {
        Self {
            service: UserService::new(client),
        }
    }
}

#[async_trait]
impl<C: HttpClient + 'static> ListSource for UserList<C> {
    type Item = User;

    fn schema(&self) -> &'static FilterSchema {
        &USER_FILTERS
    }

    async fn fetch(&self, filters: &FilterState, page_size: u32) -> ClientResult<Page<User>> {
        self.service
            .list(filters.page(), page_size, &user_filters(filters))
            .await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.service.delete(id).await
    }

    async fn update_status(&self, id: &str, status: &str) -> ClientResult<()> {
        self.service.set_active(id, parse_active(status)?).await?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct VoucherList<C> {
    service: VoucherService<C>,
}

impl<C: HttpClient> VoucherList<C> {
    pub fn new(client: C) -> Self {
        Self {
            service: VoucherService::new(client),
        }
    }
}

#[async_trait]
impl<C: HttpClient + 'static> ListSource for VoucherList<C> {
    type Item = Voucher;

    fn schema(&self) -> &'static FilterSchema {
        &VOUCHER_FILTERS
    }

    async fn fetch(&self, filters: &FilterState, page_size: u32) -> ClientResult<Page<Voucher>> {
        let query = voucher_filters(filters)?;
        self.service.list(filters.page(), page_size, &query).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.service.delete(id).await
    }

    async fn update_status(&self, id: &str, status: &str) -> ClientResult<()> {
        self.service.set_active(id, parse_active(status)?).await?;
        Ok(())
    }
}

/// Blog posts; no status toggle from the list
#[derive(Debug, Clone)]
pub struct PostList<C> {
    service: PostService<C>,
}

impl<C: HttpClient> PostList<C> {
    pub fn new(client: C) -> Self {
        Self {
            service: PostService::new(client),
        }
    }
}

#[async_trait]
impl<C: HttpClient + 'static> ListSource for PostList<C> {
    type Item = Post;

    fn schema(&self) -> &'static FilterSchema {
        &POST_FILTERS
    }

    async fn fetch(&self, filters: &FilterState, page_size: u32) -> ClientResult<Page<Post>> {
        self.service
            .list(filters.page(), page_size, &post_filters(filters))
            .await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.service.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(schema: &'static FilterSchema, pairs: &[(&str, &str)]) -> FilterState {
        let mut state = FilterState::new(schema);
        for (k, v) in pairs {
            state.set(k, v).unwrap();
        }
        state
    }

    #[test]
    fn test_product_filters_omit_empty_values() {
        let filters = product_filters(&state(&PRODUCT_FILTERS, &[("search", "  ")])).unwrap();
        assert_eq!(filters, ProductFilters::default());
    }

    #[test]
    fn test_product_status_maps_to_active_flag() {
        let filters = product_filters(&state(
            &PRODUCT_FILTERS,
            &[("search", "tea"), ("status", "inactive")],
        ))
        .unwrap();
        assert_eq!(filters.search.as_deref(), Some("tea"));
        assert_eq!(filters.is_active, Some(false));
    }

    #[test]
    fn test_unknown_status_is_validation_error() {
        let err = voucher_filters(&state(&VOUCHER_FILTERS, &[("status", "paused")])).unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[test]
    fn test_order_filters_parse_status_and_date() {
        let filters = order_filters(&state(
            &ORDER_FILTERS,
            &[("status", "shipping"), ("date", "2024-03-09")],
        ))
        .unwrap();
        assert_eq!(filters.status, Some(OrderStatus::Shipping));
        assert_eq!(filters.date, NaiveDate::from_ymd_opt(2024, 3, 9));

        let bad = order_filters(&state(&ORDER_FILTERS, &[("date", "09/03/2024")]));
        assert!(matches!(bad, Err(ClientError::Validation(_))));
    }
}
