use regex::{Regex, RegexBuilder};
use tracing::{debug, info};

use crate::error::CoreError;
use crate::model::{Player, PlayerQuery, PlayerSearchResult, StoredTeam};
use crate::storage::TeamStore;

/// Compiled form of a `PlayerQuery`: case-insensitive substring matchers.
#[derive(Debug)]
pub struct PlayerMatcher {
    first_name: Option<Regex>,
    last_name: Option<Regex>,
}

fn substring_regex(needle: Option<&str>) -> Result<Option<Regex>, regex::Error> {
    needle
        .map(|n| {
            RegexBuilder::new(&regex::escape(n))
                .case_insensitive(true)
                .build()
        })
        .transpose()
}

impl PlayerMatcher {
    /// # Errors
    ///
    /// Will return `Err` if a search term is too large to compile
    pub fn new(query: &PlayerQuery) -> Result<Self, regex::Error> {
        Ok(Self {
            first_name: substring_regex(query.first_name.as_deref())?,
            last_name: substring_regex(query.last_name.as_deref())?,
        })
    }

    #[must_use]
    pub fn matches(&self, player: &Player) -> bool {
        self.first_name
            .as_ref()
            .is_none_or(|re| re.is_match(&player.first_name))
            && self
                .last_name
                .as_ref()
                .is_none_or(|re| re.is_match(&player.last_name))
    }

    /// One row per matching player per team, in team order then roster order.
    #[must_use]
    pub fn collect(&self, teams: &[StoredTeam]) -> Vec<PlayerSearchResult> {
        teams
            .iter()
            .flat_map(|stored| {
                stored
                    .team
                    .players
                    .iter()
                    .filter(|player| self.matches(player))
                    .map(|player| PlayerSearchResult::new(&stored.team, player))
            })
            .collect()
    }
}

/// Appends a player to the first team whose name equals `team_name`.
///
/// # Errors
///
/// Will return `Err` with `TeamNotFound` if no team has that name, or if the store fails
pub async fn add_player(
    store: &dyn TeamStore,
    team_name: &str,
    player: Player,
) -> Result<StoredTeam, CoreError> {
    let team_name = team_name.trim();
    let mut stored = store
        .find_by_name(team_name)
        .await?
        .ok_or_else(|| CoreError::TeamNotFound(team_name.to_string()))?;

    info!(
        team = %stored.team.name,
        first_name = %player.first_name,
        last_name = %player.last_name,
        "adding player"
    );
    stored.team.players.push(player);
    store.save(&stored).await?;
    Ok(stored)
}

/// # Errors
///
/// Will return `Err` with `TeamNotFound` if no team has that name, or if the store fails
pub async fn get_roster(store: &dyn TeamStore, team_name: &str) -> Result<StoredTeam, CoreError> {
    store
        .find_by_name(team_name)
        .await?
        .ok_or_else(|| CoreError::TeamNotFound(team_name.to_string()))
}

/// Blank query fields impose no constraint, so an empty query lists every player.
///
/// # Errors
///
/// Will return `Err` if the store read fails or a search term cannot be compiled
pub async fn search_players(
    store: &dyn TeamStore,
    query: &PlayerQuery,
) -> Result<Vec<PlayerSearchResult>, CoreError> {
    let matcher = PlayerMatcher::new(query)?;
    let teams = store.find_all().await?;
    let results = matcher.collect(&teams);
    debug!(?query, hits = results.len(), "player search");
    Ok(results)
}

/// # Errors
///
/// Will return `Err` if the store read fails
pub async fn list_teams(store: &dyn TeamStore) -> Result<Vec<StoredTeam>, CoreError> {
    Ok(store.find_all().await?)
}

/// # Errors
///
/// Will return `Err` if the store write fails
pub async fn clear_all_players(store: &dyn TeamStore) -> Result<(), CoreError> {
    Ok(store.clear_all_players().await?)
}

/// # Errors
///
/// Will return `Err` if the store write fails
pub async fn delete_all_teams(store: &dyn TeamStore) -> Result<(), CoreError> {
    Ok(store.delete_all_teams().await?)
}
