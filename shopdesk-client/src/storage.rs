//! Object storage client for image uploads
//!
//! Talks to the bucket-scoped storage REST API directly (not through the
//! backend). Objects are addressed as `<bucket>/<path>`; public objects are
//! served from `<storage>/storage/v1/object/public/<bucket>/<path>`.

use std::fmt;
use std::path::Path;

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

pub const UPLOAD_FAILED: &str = "Image upload failed";
pub const DELETE_FAILED: &str = "Image delete failed";

const OBJECT_PREFIX: &str = "storage/v1/object";

/// Image buckets, one per kind of resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Products,
    Banners,
    Branches,
    Testimonials,
    Categories,
    Avatars,
    News,
    Galleries,
}

impl Bucket {
    pub const ALL: [Bucket; 8] = [
        Self::Products,
        Self::Banners,
        Self::Branches,
        Self::Testimonials,
        Self::Categories,
        Self::Avatars,
        Self::News,
        Self::Galleries,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Banners => "banners",
            Self::Branches => "branches",
            Self::Testimonials => "testimonials",
            Self::Categories => "categories",
            Self::Avatars => "avatars",
            Self::News => "news",
            Self::Galleries => "galleries",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize)]
struct DeleteRequest<'a> {
    prefixes: &'a [String],
}

/// Storage REST client
#[derive(Debug, Clone)]
pub struct StorageClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl StorageClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: config.storage_url.trim_end_matches('/').to_string(),
            api_key: config.storage_key.clone(),
        })
    }

    /// Public URL of an object. Pure string construction, no request.
    pub fn public_url(&self, bucket: Bucket, path: &str) -> String {
        format!(
            "{}/{}/public/{}/{}",
            self.base_url,
            OBJECT_PREFIX,
            bucket,
            path.trim_start_matches('/')
        )
    }

    /// Object path of a public URL issued for `bucket`, if it is one
    pub fn object_path_from_url<'a>(&self, bucket: Bucket, url: &'a str) -> Option<&'a str> {
        let prefix = format!("{}/{}/public/{}/", self.base_url, OBJECT_PREFIX, bucket);
        url.strip_prefix(prefix.as_str()).filter(|p| !p.is_empty())
    }

    fn object_url(&self, bucket: Bucket, path: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url,
            OBJECT_PREFIX,
            bucket,
            path.trim_start_matches('/')
        )
    }

    fn authorized(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
    }

    /// Upload bytes and return the public URL
    pub async fn upload(
        &self,
        bucket: Bucket,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> ClientResult<String> {
        let req = self
            .authorized(self.client.post(self.object_url(bucket, path)))
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "true")
            .body(bytes);

        match req.send().await {
            Ok(resp) if resp.status().is_success() => {
                tracing::debug!(%bucket, path, "Uploaded object");
                Ok(self.public_url(bucket, path))
            }
            Ok(resp) => {
                tracing::error!(%bucket, path, status = resp.status().as_u16(), "Upload rejected");
                Err(ClientError::Storage(UPLOAD_FAILED.into()))
            }
            Err(e) => {
                tracing::error!(%bucket, path, error = %e, "Upload failed");
                Err(ClientError::Storage(UPLOAD_FAILED.into()))
            }
        }
    }

    /// Upload under a fresh unique name derived from `file_name`
    pub async fn upload_file(
        &self,
        bucket: Bucket,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<String> {
        let path = unique_object_path(file_name);
        let mime = mime_guess::from_path(file_name).first_or_octet_stream();
        self.upload(bucket, &path, bytes, mime.essence_str()).await
    }

    /// Delete objects by path
    pub async fn delete(&self, bucket: Bucket, paths: &[String]) -> ClientResult<()> {
        if paths.is_empty() {
            return Ok(());
        }
        let url = format!("{}/{}/{}", self.base_url, OBJECT_PREFIX, bucket);
        let req = self
            .authorized(self.client.delete(url))
            .json(&DeleteRequest { prefixes: paths });

        match req.send().await {
            Ok(resp) if resp.status().is_success() => Ok(()),
            Ok(resp) => {
                tracing::error!(%bucket, status = resp.status().as_u16(), "Delete rejected");
                Err(ClientError::Storage(DELETE_FAILED.into()))
            }
            Err(e) => {
                tracing::error!(%bucket, error = %e, "Delete failed");
                Err(ClientError::Storage(DELETE_FAILED.into()))
            }
        }
    }

    /// Delete the object behind a public URL; foreign URLs are ignored
    pub async fn delete_by_url(&self, bucket: Bucket, url: &str) -> ClientResult<()> {
        match self.object_path_from_url(bucket, url) {
            Some(path) => self.delete(bucket, &[path.to_string()]).await,
            None => {
                tracing::debug!(%bucket, url, "Not a storage URL, nothing to delete");
                Ok(())
            }
        }
    }
}

/// `<uuid>.<ext>` keeping the original extension, lower-cased
pub fn unique_object_path(file_name: &str) -> String {
    let id = uuid::Uuid::new_v4();
    match Path::new(file_name).extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => format!("{id}.{}", ext.to_ascii_lowercase()),
        _ => id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> StorageClient {
        StorageClient::new(&ClientConfig::new("http://api").with_storage("http://files.test/", "k"))
            .unwrap()
    }

    #[test]
    fn test_bucket_names_are_distinct() {
        let mut names: Vec<_> = Bucket::ALL.iter().map(|b| b.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Bucket::ALL.len());
    }

    #[test]
    fn test_public_url_round_trip() {
        let s = storage();
        let url = s.public_url(Bucket::Banners, "/2024/hero.png");
        assert_eq!(
            url,
            "http://files.test/storage/v1/object/public/banners/2024/hero.png"
        );
        assert_eq!(
            s.object_path_from_url(Bucket::Banners, &url),
            Some("2024/hero.png")
        );
        assert_eq!(s.object_path_from_url(Bucket::Products, &url), None);
        assert_eq!(
            s.object_path_from_url(Bucket::Banners, "https://cdn.other/x.png"),
            None
        );
    }

    #[test]
    fn test_unique_object_path_keeps_extension() {
        let a = unique_object_path("Photo.JPG");
        let b = unique_object_path("Photo.JPG");
        assert!(a.ends_with(".jpg"));
        assert_ne!(a, b);
        assert!(!unique_object_path("README").contains('.'));
    }
}
