//! Console-wide client facade

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::NetworkHttpClient;
use crate::services::{
    AuthService, BannerService, BranchService, CategoryService, DashboardService, OrderService,
    PostService, ProductService, ShippingFeeService, TestimonialService, UserService,
    VoucherService,
};
use crate::session::{AuthContext, LaunchRoute, SessionStore};
use crate::storage::StorageClient;

/// Everything a console page needs, built once at start-up
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use shopdesk_client::{ClientConfig, FileSessionStore, LaunchRoute, ShopdeskClient};
///
/// # async fn example() -> Result<(), shopdesk_client::ClientError> {
/// let store = Arc::new(FileSessionStore::new("./.shopdesk", "session.json"));
/// let client = ShopdeskClient::new(&ClientConfig::from_env(), store)?;
///
/// if client.launch_route() == LaunchRoute::Login {
///     client.auth().login("admin@shop.test", "secret123").await?;
/// }
/// let summary = client.dashboard().summary().await;
/// println!("{} orders", summary.order_total);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ShopdeskClient {
    http: NetworkHttpClient,
    storage: StorageClient,
}

impl ShopdeskClient {
    pub fn new(config: &ClientConfig, store: Arc<dyn SessionStore>) -> ClientResult<Self> {
        let auth = AuthContext::new(store);
        Ok(Self {
            http: NetworkHttpClient::new(config, auth)?,
            storage: StorageClient::new(config)?,
        })
    }

    pub fn http(&self) -> &NetworkHttpClient {
        &self.http
    }

    pub fn storage(&self) -> &StorageClient {
        &self.storage
    }

    pub fn launch_route(&self) -> LaunchRoute {
        self.http.auth().launch_route()
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.http.clone())
    }

    pub fn products(&self) -> ProductService<NetworkHttpClient> {
        ProductService::new(self.http.clone())
    }

    pub fn categories(&self) -> CategoryService<NetworkHttpClient> {
        CategoryService::new(self.http.clone())
    }

    pub fn orders(&self) -> OrderService<NetworkHttpClient> {
        OrderService::new(self.http.clone())
    }

    pub fn posts(&self) -> PostService<NetworkHttpClient> {
        PostService::new(self.http.clone())
    }

    pub fn banners(&self) -> BannerService<NetworkHttpClient> {
        BannerService::new(self.http.clone())
    }

    pub fn branches(&self) -> BranchService<NetworkHttpClient> {
        BranchService::new(self.http.clone())
    }

    pub fn testimonials(&self) -> TestimonialService<NetworkHttpClient> {
        TestimonialService::new(self.http.clone())
    }

    pub fn vouchers(&self) -> VoucherService<NetworkHttpClient> {
        VoucherService::new(self.http.clone())
    }

    pub fn shipping_fees(&self) -> ShippingFeeService<NetworkHttpClient> {
        ShippingFeeService::new(self.http.clone())
    }

    pub fn users(&self) -> UserService<NetworkHttpClient> {
        UserService::new(self.http.clone())
    }

    pub fn dashboard(&self) -> DashboardService<NetworkHttpClient> {
        DashboardService::new(self.http.clone())
    }
}
