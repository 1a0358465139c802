//! List filters
//!
//! A [`FilterState`] is a flat record of string filters plus a page number.
//! The [`FilterController`] keeps two copies of it: the pending state, which
//! follows every keystroke and is mirrored into the URL, and the committed
//! state, a debounced projection of the pending one that keys data fetches.

mod controller;
mod location;
mod state;

pub use controller::FilterController;
pub use location::{Location, MemoryLocation};
pub use state::{
    FilterSchema, FilterState, ORDER_FILTERS, PAGE_KEY, POST_FILTERS, PRODUCT_FILTERS,
    USER_FILTERS, VOUCHER_FILTERS,
};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Unknown filter `{key}` for {schema} list")]
    UnknownKey { schema: &'static str, key: String },

    #[error("Page must be a positive integer, got `{0}`")]
    InvalidPage(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
