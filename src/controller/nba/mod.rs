pub mod client;

pub use client::*;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::model::RawTeam;

/// Lookups against the third-party sports data API.
#[async_trait]
pub trait NbaApiClient: Send + Sync {
    /// Every team flagged as an NBA franchise. An empty list is not an error, a
    /// body without a team list is.
    async fn list_teams(&self) -> Result<Vec<RawTeam>, CoreError>;

    async fn find_team_by_name(&self, name: &str) -> Result<Option<RawTeam>, CoreError>;
}
