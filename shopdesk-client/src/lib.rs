//! Shopdesk Client - HTTP client for the storefront admin API
//!
//! Provides the authenticated fetch client, one service per backend
//! resource, the object storage client used for image uploads, and the
//! session store the console signs in against.

pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod services;
pub mod session;
pub mod storage;

mod client;

pub use client::ShopdeskClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use session::{
    AuthContext, FileSessionStore, LaunchRoute, MemorySessionStore, Session, SessionStore,
};
pub use storage::{Bucket, StorageClient};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, UserInfo};
pub use shared::{ApiResponse, Page, Pagination};
