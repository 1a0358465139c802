//! Resource services
//!
//! One service per backend resource. Each is a thin typed facade over the
//! shared plumbing in [`resource`]; services clone cheaply and can be held
//! by list views.

pub mod auth;
pub mod banners;
pub mod branches;
pub mod categories;
pub mod dashboard;
pub mod orders;
pub mod posts;
pub mod products;
pub mod resource;
pub mod shipping_fees;
pub mod testimonials;
pub mod users;
pub mod vouchers;

pub use auth::AuthService;
pub use banners::BannerService;
pub use branches::BranchService;
pub use categories::CategoryService;
pub use dashboard::DashboardService;
pub use orders::OrderService;
pub use posts::PostService;
pub use products::ProductService;
pub use resource::{MissingPolicy, RESOURCES, Resource};
pub use shipping_fees::ShippingFeeService;
pub use testimonials::TestimonialService;
pub use users::UserService;
pub use vouchers::VoucherService;
