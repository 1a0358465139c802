//! Auth API

use shared::client::{LoginRequest, LoginResponse, UserInfo};
use shared::ApiResponse;
use validator::Validate;

use super::resource::require_data;
use crate::error::{ClientError, ClientResult};
use crate::http::{HttpClient, NetworkHttpClient};

/// Login, logout and the current admin
///
/// Bound to [`NetworkHttpClient`] because it writes the session the client
/// reads its token from.
#[derive(Debug, Clone)]
pub struct AuthService {
    client: NetworkHttpClient,
}

impl AuthService {
    pub fn new(client: NetworkHttpClient) -> Self {
        Self { client }
    }

    /// Sign in and persist the token and user
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let req = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        req.validate()?;

        let resp: ApiResponse<LoginResponse> = self.client.post("auth/login", &req).await?;
        let login = require_data(resp, self.client.fallback_message())?;
        if !login.user.is_admin() {
            tracing::warn!(email = %login.user.email, "Rejected non-admin login");
            return Err(ClientError::Api {
                status: 403,
                message: "This account cannot access the admin console".into(),
            });
        }
        self.client.auth().sign_in(&login)?;
        tracing::info!(user = %login.user.email, "Signed in");
        Ok(login)
    }

    /// Current user as the backend sees it
    pub async fn me(&self) -> ClientResult<UserInfo> {
        let resp: ApiResponse<UserInfo> = self.client.get("auth/me").await?;
        require_data(resp, self.client.fallback_message())
    }

    /// Drop the local session. Nothing is sent to the backend.
    pub fn logout(&self) -> ClientResult<()> {
        self.client.auth().sign_out()?;
        tracing::info!("Signed out");
        Ok(())
    }
}
