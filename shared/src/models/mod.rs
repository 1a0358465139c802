//! Data models
//!
//! Plain records mirrored from the backend's response shapes. Optional
//! fields follow backend nullability; the backend speaks camelCase JSON and
//! some collections still answer with Mongo-style `_id` keys.

pub mod banner;
pub mod branch;
pub mod category;
pub mod dashboard;
pub mod order;
pub mod post;
pub mod product;
pub mod shipping_fee;
pub mod testimonial;
pub mod user;
pub mod voucher;

// Re-exports
pub use banner::*;
pub use branch::*;
pub use category::*;
pub use dashboard::*;
pub use order::*;
pub use post::*;
pub use product::*;
pub use shipping_fee::*;
pub use testimonial::*;
pub use user::*;
pub use voucher::*;

use serde::{Deserialize, Serialize};

/// Toggle payload shared by every resource with an `isActive` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveUpdate {
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

fn non_negative(value: &rust_decimal::Decimal) -> Result<(), validator::ValidationError> {
    if value.is_sign_negative() {
        return Err(validator::ValidationError::new("negative_amount"));
    }
    Ok(())
}
