//! User API
//!
//! The user endpoints are rolled out after the rest of the backend, so
//! list and stats reads tolerate 404 (see [`super::resource::RESOURCES`]).

use shared::models::{ActiveUpdate, User, UserRoleUpdate, UserStats};
use shared::query::{PageQuery, UserFilters};
use shared::Page;

use super::resource::{USERS, USER_STATS};
use crate::error::ClientResult;
use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct UserService<C> {
    client: C,
}

impl<C: HttpClient> UserService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Paginated users; an empty page when the endpoint is missing
    pub async fn list(
        &self,
        page: u32,
        page_size: u32,
        filters: &UserFilters,
    ) -> ClientResult<Page<User>> {
        USERS
            .list_page(&self.client, PageQuery::new(page, page_size), filters)
            .await
    }

    pub async fn get(&self, id: &str) -> ClientResult<User> {
        USERS.fetch_one(&self.client, id).await
    }

    /// Zeroed counters when the endpoint is missing
    pub async fn stats(&self) -> ClientResult<UserStats> {
        USER_STATS.read(&self.client).await
    }

    pub async fn update_role(&self, id: &str, role: &str) -> ClientResult<User> {
        USERS
            .patch_item(
                &self.client,
                id,
                "role",
                &UserRoleUpdate {
                    role: role.to_string(),
                },
            )
            .await
    }

    pub async fn set_active(&self, id: &str, is_active: bool) -> ClientResult<User> {
        USERS
            .patch_item(&self.client, id, "status", &ActiveUpdate { is_active })
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        USERS.remove(&self.client, id).await
    }
}
