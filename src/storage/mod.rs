pub mod sqlite;

pub use sqlite::SqliteStore;

use async_trait::async_trait;
use std::error::Error;
use std::fmt;

use crate::model::{StoredTeam, Team};

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::new(format!("sqlite: {value}"))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::new(format!("roster json: {value}"))
    }
}

/// The persisted team collection. Every write replaces whole documents.
#[async_trait]
pub trait TeamStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<StoredTeam>, StorageError>;
    /// First match in insertion order; names are not unique.
    async fn find_by_name(&self, name: &str) -> Result<Option<StoredTeam>, StorageError>;
    async fn insert(&self, team: Team) -> Result<StoredTeam, StorageError>;
    async fn save(&self, team: &StoredTeam) -> Result<(), StorageError>;
    async fn clear_all_players(&self) -> Result<(), StorageError>;
    async fn delete_all_teams(&self) -> Result<(), StorageError>;
    async fn close(&self) -> Result<(), StorageError>;
}
