//! Session persistence for the portal client.
//!
//! Stores the login session in `${BEESCORE_HOME}/session.json` with restricted
//! permissions (0600). Tokens are never logged or displayed in full.
//!
//! Storage is an injected capability (`SessionStore`) so the submission flows
//! can be exercised against an in-memory fake.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// Storage key for the auth token written on login.
pub const KEY_AUTH_TOKEN: &str = "authToken";
/// Storage key for the user id written on login.
pub const KEY_UID: &str = "uid";
/// Storage key for the business email written on login.
pub const KEY_BUSINESS_EMAIL: &str = "businessEmail";
/// Storage key for the user id written on sign-up.
pub const KEY_USER_ID: &str = "userId";

/// Persistent key-value storage capability for session data.
///
/// The submission flows only ever write; nothing in this crate reads the
/// values back except `clear` and diagnostics.
pub trait SessionStore: Send {
    /// Returns the stored value for a key, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores a value under a key.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes all stored keys.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    fn clear(&mut self) -> Result<()>;
}

/// The identity triple persisted after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub token: String,
    pub uid: String,
    pub business_email: String,
}

impl SessionRecord {
    /// Writes the triple under its fixed keys.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn persist(&self, store: &mut dyn SessionStore) -> Result<()> {
        store.set(KEY_AUTH_TOKEN, &self.token)?;
        store.set(KEY_UID, &self.uid)?;
        store.set(KEY_BUSINESS_EMAIL, &self.business_email)?;
        Ok(())
    }
}

/// On-disk session file structure: a flat string map.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct SessionFile {
    #[serde(flatten)]
    values: HashMap<String, String>,
}

impl SessionFile {
    fn load(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session from {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {}", path.display()))
    }

    fn save(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize session")?;

        // Write with restricted permissions
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(path)
                .with_context(|| format!("Failed to open {} for writing", path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        Ok(())
    }
}

/// Write-through file-backed session store.
///
/// Every `set` loads the current file, applies the change, and saves it back,
/// so concurrent headless invocations don't clobber each other's keys.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store over the default session path.
    pub fn new() -> Self {
        Self {
            path: paths::session_path(),
        }
    }

    /// Creates a store over an explicit file path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        SessionFile::load(&self.path)
            .ok()
            .and_then(|file| file.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut file = SessionFile::load(&self.path)?;
        file.values.insert(key.to_string(), value.to_string());
        file.save(&self.path)
    }

    fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}

/// In-memory session store for tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.values.clear();
        Ok(())
    }
}

/// Returns a masked version of a token for display (first 12 chars + ...).
pub fn mask_token(token: &str) -> String {
    if token.chars().count() <= 16 {
        return "***".to_string();
    }
    let prefix: String = token.chars().take(12).collect();
    format!("{prefix}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: record persist writes the three fixed login keys.
    #[test]
    fn test_record_persist_keys() {
        let mut store = MemorySessionStore::new();
        let record = SessionRecord {
            token: "t1".to_string(),
            uid: "u1".to_string(),
            business_email: "a@b.com".to_string(),
        };
        record.persist(&mut store).unwrap();

        assert_eq!(store.get(KEY_AUTH_TOKEN).as_deref(), Some("t1"));
        assert_eq!(store.get(KEY_UID).as_deref(), Some("u1"));
        assert_eq!(store.get(KEY_BUSINESS_EMAIL).as_deref(), Some("a@b.com"));
        assert_eq!(store.get(KEY_USER_ID), None);
    }

    /// Test: file store writes through and reloads.
    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let mut store = FileSessionStore::at(path.clone());
        store.set(KEY_USER_ID, "u42").unwrap();
        store.set(KEY_AUTH_TOKEN, "tok").unwrap();

        // A fresh store over the same path sees both keys.
        let reopened = FileSessionStore::at(path);
        assert_eq!(reopened.get(KEY_USER_ID).as_deref(), Some("u42"));
        assert_eq!(reopened.get(KEY_AUTH_TOKEN).as_deref(), Some("tok"));
    }

    /// Test: the session file is a flat JSON map with the raw keys.
    #[test]
    fn test_file_store_layout() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let mut store = FileSessionStore::at(path.clone());
        store.set(KEY_BUSINESS_EMAIL, "a@b.com").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(json["businessEmail"], "a@b.com");
    }

    /// Test: clear removes the backing file.
    #[test]
    fn test_file_store_clear() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let mut store = FileSessionStore::at(path.clone());
        store.set(KEY_UID, "u1").unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(!path.exists());
        assert_eq!(store.get(KEY_UID), None);
    }

    /// Test: token masking, including multi-byte characters near the cut.
    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("eyJhbGciOiJIUzI1NiJ9.payload"), "eyJhbGciOiJI...");
        assert_eq!(mask_token("short"), "***");
        // The token is server data; a char straddling the cut must not panic.
        assert_eq!(mask_token("abcdefghijk€zzzzz"), "abcdefghijk€...");
    }
}
