//! Resource table and the CRUD plumbing every service shares
//!
//! All backend resources follow the same envelope convention. Whether a 404
//! on a read means "broken" or "backend has not shipped this endpoint yet"
//! is declared once per resource in [`RESOURCES`], not decided per call.

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::query::PageQuery;
use shared::{ApiResponse, Page};
use validator::Validate;

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

/// What a 404 on a read means for a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Surface the 404 as an error
    Propagate,
    /// Endpoint may not exist yet; read as the empty default
    Empty,
}

/// A backend collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub path: &'static str,
    pub missing: MissingPolicy,
}

pub const PRODUCTS: Resource = Resource::strict("products");
pub const CATEGORIES: Resource = Resource::strict("categories");
pub const ORDERS: Resource = Resource::strict("orders");
pub const POSTS: Resource = Resource::strict("posts");
pub const BANNERS: Resource = Resource::strict("banners");
pub const BRANCHES: Resource = Resource::strict("branches");
pub const TESTIMONIALS: Resource = Resource::lenient("testimonials");
pub const VOUCHERS: Resource = Resource::strict("vouchers");
pub const SHIPPING_FEES: Resource = Resource::lenient("shipping-fees");
pub const USERS: Resource = Resource::lenient("users");
pub const USER_STATS: Resource = Resource::lenient("users/stats");

/// Every resource the console talks to
pub const RESOURCES: &[Resource] = &[
    PRODUCTS,
    CATEGORIES,
    ORDERS,
    POSTS,
    BANNERS,
    BRANCHES,
    TESTIMONIALS,
    VOUCHERS,
    SHIPPING_FEES,
    USERS,
    USER_STATS,
];

/// Page window and filters flattened into one query string
#[derive(Serialize)]
struct ListQuery<'a, F: Serialize> {
    #[serde(flatten)]
    page: PageQuery,
    #[serde(flatten)]
    filters: &'a F,
}

impl Resource {
    pub const fn strict(path: &'static str) -> Self {
        Self {
            path,
            missing: MissingPolicy::Propagate,
        }
    }

    pub const fn lenient(path: &'static str) -> Self {
        Self {
            path,
            missing: MissingPolicy::Empty,
        }
    }

    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.path, id)
    }

    /// Apply the missing-endpoint policy to a read
    fn tolerate<T: Default>(&self, result: ClientResult<T>) -> ClientResult<T> {
        match result {
            Err(e) if e.is_not_found() && self.missing == MissingPolicy::Empty => {
                tracing::warn!(resource = self.path, "Endpoint returned 404, using empty result");
                Ok(T::default())
            }
            other => other,
        }
    }

    fn log_failure<T>(&self, op: &'static str, result: ClientResult<T>) -> ClientResult<T> {
        result.inspect_err(|e| {
            tracing::error!(resource = self.path, op, error = %e, "API call failed");
        })
    }

    /// Paginated list
    pub async fn list_page<C, T, F>(
        &self,
        client: &C,
        page: PageQuery,
        filters: &F,
    ) -> ClientResult<Page<T>>
    where
        C: HttpClient,
        T: DeserializeOwned,
        F: Serialize + Sync,
    {
        let query = ListQuery { page, filters };
        let result = async {
            let resp: ApiResponse<Vec<T>> = client.get_with_query(self.path, &query).await?;
            Ok(check(resp, client.fallback_message())?.into_page())
        }
        .await;
        self.log_failure("list", self.tolerate(result))
    }

    /// Unpaginated list
    pub async fn list_all<C, T>(&self, client: &C) -> ClientResult<Vec<T>>
    where
        C: HttpClient,
        T: DeserializeOwned,
    {
        let result = async {
            let resp: ApiResponse<Vec<T>> = client.get(self.path).await?;
            Ok(check(resp, client.fallback_message())?
                .data
                .unwrap_or_default())
        }
        .await;
        self.log_failure("list", self.tolerate(result))
    }

    /// Single object at the collection path itself (stats-like endpoints)
    pub async fn read<C, T>(&self, client: &C) -> ClientResult<T>
    where
        C: HttpClient,
        T: DeserializeOwned + Default,
    {
        let result = async {
            let resp: ApiResponse<T> = client.get(self.path).await?;
            Ok(check(resp, client.fallback_message())?
                .data
                .unwrap_or_default())
        }
        .await;
        self.log_failure("read", self.tolerate(result))
    }

    pub async fn fetch_one<C, T>(&self, client: &C, id: &str) -> ClientResult<T>
    where
        C: HttpClient,
        T: DeserializeOwned,
    {
        let result = async {
            let resp: ApiResponse<T> = client.get(&self.item_path(id)).await?;
            require_data(resp, client.fallback_message())
        }
        .await;
        self.log_failure("get", result)
    }

    pub async fn create<C, T, B>(&self, client: &C, body: &B) -> ClientResult<T>
    where
        C: HttpClient,
        T: DeserializeOwned,
        B: Serialize + Validate + Sync,
    {
        body.validate()?;
        let result = async {
            let resp: ApiResponse<T> = client.post(self.path, body).await?;
            require_data(resp, client.fallback_message())
        }
        .await;
        self.log_failure("create", result)
    }

    pub async fn update<C, T, B>(&self, client: &C, id: &str, body: &B) -> ClientResult<T>
    where
        C: HttpClient,
        T: DeserializeOwned,
        B: Serialize + Validate + Sync,
    {
        body.validate()?;
        let result = async {
            let resp: ApiResponse<T> = client.put(&self.item_path(id), body).await?;
            require_data(resp, client.fallback_message())
        }
        .await;
        self.log_failure("update", result)
    }

    /// PATCH a sub-path of one item, e.g. `orders/{id}/status`
    pub async fn patch_item<C, T, B>(
        &self,
        client: &C,
        id: &str,
        action: &str,
        body: &B,
    ) -> ClientResult<T>
    where
        C: HttpClient,
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        let path = format!("{}/{}", self.item_path(id), action);
        let result = async {
            let resp: ApiResponse<T> = client.patch(&path, body).await?;
            require_data(resp, client.fallback_message())
        }
        .await;
        self.log_failure("patch", result)
    }

    pub async fn remove<C: HttpClient>(&self, client: &C, id: &str) -> ClientResult<()> {
        let result = async {
            let resp: ApiResponse<serde_json::Value> = client.delete(&self.item_path(id)).await?;
            check(resp, client.fallback_message()).map(|_| ())
        }
        .await;
        self.log_failure("delete", result)
    }
}

/// Reject `success: false` envelopes
pub(crate) fn check<T>(resp: ApiResponse<T>, fallback: &str) -> ClientResult<ApiResponse<T>> {
    if resp.success {
        return Ok(resp);
    }
    Err(ClientError::Api {
        status: 200,
        message: resp
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string()),
    })
}

/// Successful envelope that must carry data
pub(crate) fn require_data<T>(resp: ApiResponse<T>, fallback: &str) -> ClientResult<T> {
    check(resp, fallback)?
        .data
        .ok_or_else(|| ClientError::InvalidResponse {
            message: fallback.to_string(),
            detail: "Missing data".into(),
        })
}
