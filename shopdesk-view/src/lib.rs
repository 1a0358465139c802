//! Shopdesk View - headless list pages for the admin console
//!
//! Every list page (products, orders, users, vouchers) is the same machine:
//! filter inputs update a pending state at once and mirror it into the URL,
//! a debounced copy of that state keys the data fetch, and the fetched page
//! is shown while row mutations invalidate it.
//!
//! - [`debounce`]: the one debounced-value primitive every page shares
//! - [`filter`]: filter state, its URL codec and the controller
//! - [`list`]: the list view state machine over a [`list::ListSource`]
//! - [`sources`]: list sources for the backend resources

pub mod config;
pub mod debounce;
pub mod filter;
pub mod list;
pub mod notify;
pub mod sources;

pub use config::ViewConfig;
pub use debounce::{Debounced, debounce_stream};
pub use filter::{FilterController, FilterError, FilterSchema, FilterState, Location, MemoryLocation};
pub use list::{ListEvent, ListSource, ListView, LoadPhase};
pub use notify::{Notification, NotificationLevel, Notifications};
pub use sources::{OrderList, PostList, ProductList, UserList, VoucherList};
