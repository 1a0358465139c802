//! Voucher Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// How a voucher discount is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// `discount_value` is a percentage of the order total
    Percent,
    /// `discount_value` is an absolute amount
    Fixed,
}

/// Voucher entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    #[serde(alias = "_id")]
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    #[serde(default)]
    pub min_order_value: Option<Decimal>,
    #[serde(default)]
    pub max_discount: Option<Decimal>,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub used_count: u32,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

impl Voucher {
    /// Whether the voucher can still be redeemed at `now`
    pub fn is_redeemable(&self, now: DateTime<Utc>) -> bool {
        if !self.is_active {
            return false;
        }
        if self.starts_at.is_some_and(|start| now < start) {
            return false;
        }
        if self.expires_at.is_some_and(|end| now >= end) {
            return false;
        }
        self.usage_limit.is_none_or(|limit| self.used_count < limit)
    }
}

/// Create voucher payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VoucherCreate {
    #[validate(length(min = 3, max = 32, message = "Voucher code must be 3-32 characters"))]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub discount_type: DiscountType,
    #[validate(custom(function = "super::non_negative"))]
    pub discount_value: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Update voucher payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VoucherUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "super::non_negative"))]
    pub discount_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn voucher() -> Voucher {
        Voucher {
            id: "v1".into(),
            code: "SALE10".into(),
            description: None,
            discount_type: DiscountType::Percent,
            discount_value: Decimal::new(10, 0),
            min_order_value: None,
            max_discount: None,
            usage_limit: Some(2),
            used_count: 0,
            starts_at: None,
            expires_at: None,
            is_active: true,
        }
    }

    #[test]
    fn test_redeemable_window_and_limit() {
        let now = Utc::now();
        let mut v = voucher();
        assert!(v.is_redeemable(now));

        v.expires_at = Some(now - Duration::hours(1));
        assert!(!v.is_redeemable(now));

        v.expires_at = None;
        v.used_count = 2;
        assert!(!v.is_redeemable(now));
    }
}
