//! Dashboard summary

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Order, UserStats};

/// Aggregated figures for the dashboard landing page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub recent_orders: Vec<Order>,
    pub order_total: u64,
    pub product_total: u64,
    /// Revenue of the loaded recent orders, cancelled ones excluded
    pub recent_revenue: Decimal,
    pub user_stats: UserStats,
}
