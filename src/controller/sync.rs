use tracing::info;

use crate::error::CoreError;
use crate::model::{RawTeam, StoredTeam, Team};
use crate::storage::TeamStore;

/// Builds a local team from an upstream record, starting with an empty roster.
#[must_use]
pub fn team_from_raw(raw: &RawTeam) -> Team {
    Team {
        name: raw.name().to_string(),
        mascot: raw.mascot().to_string(),
        city: raw.city().to_string(),
        players: Vec::new(),
    }
}

/// Persists an upstream team. No existence check is made, so importing the same
/// team twice stores two records.
///
/// # Errors
///
/// Will return `Err` if the store write fails
pub async fn import_team(store: &dyn TeamStore, raw: &RawTeam) -> Result<StoredTeam, CoreError> {
    let stored = store.insert(team_from_raw(raw)).await?;
    info!(id = stored.id, name = %stored.team.name, "imported team");
    Ok(stored)
}
