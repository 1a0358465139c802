//! Shipping fee Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Flat shipping fee per province
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingFee {
    #[serde(alias = "_id")]
    pub id: String,
    pub province: String,
    pub fee: Decimal,
    #[serde(default)]
    pub estimated_days: Option<String>,
}

/// Create shipping fee payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShippingFeeCreate {
    #[validate(length(min = 1, message = "Province is required"))]
    pub province: String,
    #[validate(custom(function = "super::non_negative"))]
    pub fee: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_days: Option<String>,
}

/// Update shipping fee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShippingFeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "super::non_negative"))]
    pub fee: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_days: Option<String>,
}
