//! Dashboard summary
//!
//! Gathers recent orders, the product count and user stats concurrently.
//! Each part falls back to zeroed defaults on its own; the dashboard never
//! fails as a whole.

use rust_decimal::Decimal;
use shared::models::{DashboardSummary, OrderStatus};
use shared::query::{OrderFilters, ProductFilters};

use super::{OrderService, ProductService, UserService};
use crate::http::HttpClient;

const RECENT_ORDERS: u32 = 5;

#[derive(Debug, Clone)]
pub struct DashboardService<C> {
    orders: OrderService<C>,
    products: ProductService<C>,
    users: UserService<C>,
}

impl<C: HttpClient + Clone> DashboardService<C> {
    pub fn new(client: C) -> Self {
        Self {
            orders: OrderService::new(client.clone()),
            products: ProductService::new(client.clone()),
            users: UserService::new(client),
        }
    }

    pub async fn summary(&self) -> DashboardSummary {
        let no_filters = OrderFilters::default();
        let all_products = ProductFilters::default();
        let (orders, products, stats) = tokio::join!(
            self.orders.list(1, RECENT_ORDERS, &no_filters),
            self.products.list(1, 1, &all_products),
            self.users.stats(),
        );

        let orders = orders.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Dashboard orders unavailable");
            Default::default()
        });
        let product_total = products.map(|p| p.total).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Dashboard product count unavailable");
            0
        });
        let user_stats = stats.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Dashboard user stats unavailable");
            Default::default()
        });

        let recent_revenue = orders
            .items
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .map(|o| o.total)
            .sum::<Decimal>();

        DashboardSummary {
            order_total: orders.total,
            recent_orders: orders.items,
            product_total,
            recent_revenue,
            user_stats,
        }
    }
}
