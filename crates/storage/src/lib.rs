//! Filesystem-backed object store for demo assets.
//!
//! Stands in for the hosted storage buckets: one bucket for studio logos,
//! one for project files. Objects are addressed as `{bucket}/{key}` under a
//! configured root directory and exposed over HTTP at
//! `{public_base_url}/files/{bucket}/{key}`.
//!
//! Binary saves are two-phase (object write, then metadata row); callers
//! compensate a failed metadata write with [`ObjectStore::delete`].

use std::path::{Path, PathBuf};

/// Bucket for studio logo uploads.
pub const BUCKET_STUDIO_LOGOS: &str = "studio-logos";

/// Bucket for project files (phase images and documents).
pub const BUCKET_PROJECT_FILES: &str = "project-files";

/// Errors from object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Bucket name is not one of the known buckets.
    #[error("Unknown bucket '{0}'")]
    UnknownBucket(String),

    /// Key failed validation (empty, absolute, or path-traversing).
    #[error("Invalid object key '{0}'")]
    InvalidKey(String),

    /// Underlying filesystem failure.
    #[error("Storage I/O error for '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A stored object's address and public URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub bucket: &'static str,
    pub key: String,
    pub public_url: String,
}

/// Filesystem-backed object store.
#[derive(Debug, Clone)]
pub struct ObjectStore {
    root: PathBuf,
    public_base_url: String,
}

impl ObjectStore {
    /// Create a store rooted at `root`, deriving public URLs from
    /// `public_base_url` (no trailing slash, e.g. `http://localhost:3000`).
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        let mut public_base_url = public_base_url.into();
        while public_base_url.ends_with('/') {
            public_base_url.pop();
        }
        Self {
            root: root.into(),
            public_base_url,
        }
    }

    /// Directory all objects live under (served via the `/files` route).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `bytes` under `{bucket}/{key}`, returning the stored address.
    ///
    /// Overwrites silently; key namespacing (random names per upload) makes
    /// collisions a caller decision, not a store concern.
    pub async fn put(
        &self,
        bucket: &str,
        key: &str,
        bytes: &[u8],
    ) -> Result<StoredObject, StorageError> {
        let bucket = validate_bucket(bucket)?;
        validate_key(key)?;

        let path = self.root.join(bucket).join(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|source| {
                StorageError::Io {
                    path: parent.display().to_string(),
                    source,
                }
            })?;
        }
        tokio::fs::write(&path, bytes).await.map_err(|source| {
            StorageError::Io {
                path: path.display().to_string(),
                source,
            }
        })?;

        tracing::debug!(bucket, key, size = bytes.len(), "Stored object");

        Ok(StoredObject {
            bucket,
            key: key.to_string(),
            public_url: self.public_url(bucket, key),
        })
    }

    /// Remove `{bucket}/{key}`. Missing objects are not an error, so the
    /// compensating delete after a failed metadata write is idempotent.
    pub async fn delete(&self, bucket: &str, key: &str) -> Result<(), StorageError> {
        let bucket = validate_bucket(bucket)?;
        validate_key(key)?;

        let path = self.root.join(bucket).join(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Whether `{bucket}/{key}` currently exists.
    pub async fn exists(&self, bucket: &str, key: &str) -> Result<bool, StorageError> {
        let bucket = validate_bucket(bucket)?;
        validate_key(key)?;
        Ok(tokio::fs::try_exists(self.root.join(bucket).join(key))
            .await
            .unwrap_or(false))
    }

    /// Public URL for `{bucket}/{key}`.
    pub fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/files/{bucket}/{key}", self.public_base_url)
    }
}

fn validate_bucket(bucket: &str) -> Result<&'static str, StorageError> {
    match bucket {
        BUCKET_STUDIO_LOGOS => Ok(BUCKET_STUDIO_LOGOS),
        BUCKET_PROJECT_FILES => Ok(BUCKET_PROJECT_FILES),
        other => Err(StorageError::UnknownBucket(other.to_string())),
    }
}

/// Keys must be relative, non-empty, and free of `..` segments.
fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('/')
        && !key.contains('\\')
        && !key.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..");
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, ObjectStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ObjectStore::new(dir.path(), "http://localhost:3000/");
        (dir, store)
    }

    #[tokio::test]
    async fn put_writes_bytes_and_derives_public_url() {
        let (_dir, store) = store();
        let object = store
            .put(BUCKET_PROJECT_FILES, "abc/concept/x.jpg", b"bytes")
            .await
            .unwrap();
        assert_eq!(
            object.public_url,
            "http://localhost:3000/files/project-files/abc/concept/x.jpg"
        );
        assert!(store.exists(BUCKET_PROJECT_FILES, "abc/concept/x.jpg").await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_object_and_is_idempotent() {
        let (_dir, store) = store();
        store.put(BUCKET_STUDIO_LOGOS, "logo.png", b"png").await.unwrap();
        store.delete(BUCKET_STUDIO_LOGOS, "logo.png").await.unwrap();
        assert!(!store.exists(BUCKET_STUDIO_LOGOS, "logo.png").await.unwrap());
        // Second delete of a missing object succeeds.
        store.delete(BUCKET_STUDIO_LOGOS, "logo.png").await.unwrap();
    }

    #[tokio::test]
    async fn unknown_bucket_is_rejected() {
        let (_dir, store) = store();
        let err = store.put("secrets", "k", b"x").await.unwrap_err();
        assert!(matches!(err, StorageError::UnknownBucket(_)));
    }

    #[tokio::test]
    async fn traversal_keys_are_rejected() {
        let (_dir, store) = store();
        for key in ["../escape", "a/../../b", "/abs", "", "a//b", "a\\b"] {
            let err = store.put(BUCKET_PROJECT_FILES, key, b"x").await.unwrap_err();
            assert!(matches!(err, StorageError::InvalidKey(_)), "key {key:?}");
        }
    }

    #[test]
    fn base_url_trailing_slashes_are_trimmed() {
        let store = ObjectStore::new("/tmp/x", "http://host///");
        assert_eq!(
            store.public_url(BUCKET_STUDIO_LOGOS, "k.png"),
            "http://host/files/studio-logos/k.png"
        );
    }
}
