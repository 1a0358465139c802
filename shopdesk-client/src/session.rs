//! Session storage and the auth context handed to the HTTP client
//!
//! The console persists two things between runs: the bearer token and the
//! signed-in user. Stores are explicit objects; the HTTP client reads the
//! token through an [`AuthContext`] on every request.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use shared::client::{LoginResponse, UserInfo};

use crate::error::{ClientError, ClientResult};

/// Persisted session: token plus the serialized current user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

/// Where the console keeps its session between runs
pub trait SessionStore: Send + Sync + fmt::Debug {
    fn load(&self) -> ClientResult<Option<Session>>;
    fn save(&self, session: &Session) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;
}

/// In-memory store, mostly for tests and short-lived tools
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            session: RwLock::new(Some(Session {
                token: token.into(),
                user: None,
            })),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> ClientResult<Option<Session>> {
        self.session
            .read()
            .map(|s| s.clone())
            .map_err(|_| ClientError::Session("session lock poisoned".into()))
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        let mut guard = self
            .session
            .write()
            .map_err(|_| ClientError::Session("session lock poisoned".into()))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        let mut guard = self
            .session
            .write()
            .map_err(|_| ClientError::Session("session lock poisoned".into()))?;
        *guard = None;
        Ok(())
    }
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        Self {
            path: base_path.into().join(filename),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> ClientResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json =
            fs::read_to_string(&self.path).map_err(|e| ClientError::Session(e.to_string()))?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        self.ensure_dir()
            .map_err(|e| ClientError::Session(e.to_string()))?;
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json).map_err(|e| ClientError::Session(e.to_string()))
    }

    fn clear(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| ClientError::Session(e.to_string()))?;
        }
        Ok(())
    }
}

/// Where the console lands on start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchRoute {
    Login,
    Dashboard,
}

/// Shared handle to the session store
#[derive(Debug, Clone)]
pub struct AuthContext {
    store: Arc<dyn SessionStore>,
}

impl AuthContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Context without any session
    pub fn anonymous() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }

    /// Bearer token, if one is stored and non-empty
    ///
    /// An unreadable store counts as signed out.
    pub fn token(&self) -> Option<String> {
        match self.store.load() {
            Ok(session) => session.map(|s| s.token).filter(|t| !t.trim().is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read session, continuing without token");
                None
            }
        }
    }

    pub fn current_user(&self) -> Option<UserInfo> {
        self.store.load().ok().flatten().and_then(|s| s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a successful login
    pub fn sign_in(&self, login: &LoginResponse) -> ClientResult<()> {
        self.store.save(&Session {
            token: login.token.clone(),
            user: Some(login.user.clone()),
        })
    }

    pub fn sign_out(&self) -> ClientResult<()> {
        self.store.clear()
    }

    /// Login page unless both a token and a user record are stored
    pub fn launch_route(&self) -> LaunchRoute {
        if self.is_authenticated() && self.current_user().is_some() {
            LaunchRoute::Dashboard
        } else {
            LaunchRoute::Login
        }
    }
}
