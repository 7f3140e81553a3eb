#![allow(dead_code)]

use async_trait::async_trait;
use nba_roster::CoreError;
use nba_roster::controller::AppState;
use nba_roster::controller::nba::{NbaApiClient, TeamsEnvelope};
use nba_roster::model::{Player, RawTeam, StoredTeam, Team};
use nba_roster::storage::{SqliteStore, StorageError, TeamStore};
use std::sync::Arc;

pub fn player(first_name: &str, last_name: &str, age: u32, height: &str) -> Player {
    Player {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        age: f64::from(age),
        height: height.to_string(),
    }
}

pub fn team(name: &str, mascot: &str, city: &str, players: Vec<Player>) -> Team {
    Team {
        name: name.to_string(),
        mascot: mascot.to_string(),
        city: city.to_string(),
        players,
    }
}

pub fn raw_team(name: &str, nickname: &str, city: &str, nba_franchise: bool) -> RawTeam {
    RawTeam {
        id: None,
        name: Some(name.to_string()),
        nickname: Some(nickname.to_string()),
        city: Some(city.to_string()),
        code: None,
        nba_franchise,
    }
}

/// Two teams with rosters plus an empty one.
pub fn fixture_teams() -> Vec<Team> {
    vec![
        team(
            "Utah Jazz",
            "Jazz",
            "Utah",
            vec![
                player("John", "Stockton", 35, "6-1"),
                player("Karl", "Malone", 36, "6-9"),
            ],
        ),
        team(
            "Phoenix Suns",
            "Suns",
            "Phoenix",
            vec![
                player("Joanna", "Smith", 24, "5-11"),
                player("Mark", "Jackson", 33, "6-3"),
            ],
        ),
        team("Los Angeles Lakers", "Lakers", "Los Angeles", vec![]),
    ]
}

pub async fn setup_store(fixture: Vec<Team>) -> Result<SqliteStore, StorageError> {
    let store = SqliteStore::open(":memory:")?;
    for team in fixture {
        store.insert(team).await?;
    }
    Ok(store)
}

pub fn upstream_teams() -> Vec<RawTeam> {
    vec![
        raw_team("Los Angeles Lakers", "Lakers", "Los Angeles", true),
        raw_team("Boston Celtics", "Celtics", "Boston", true),
        raw_team("Team Lebron", "Team Lebron", "", false),
    ]
}

/// Stand-in for the sports data API.
pub struct FakeNbaClient {
    pub teams: Vec<RawTeam>,
    pub fail: bool,
    /// Raw response body, decoded the same way the HTTP client decodes it.
    pub body: Option<String>,
}

impl FakeNbaClient {
    pub fn with_teams(teams: Vec<RawTeam>) -> Self {
        Self {
            teams,
            fail: false,
            body: None,
        }
    }

    pub fn failing() -> Self {
        Self {
            teams: vec![],
            fail: true,
            body: None,
        }
    }

    pub fn with_body(body: &str) -> Self {
        Self {
            teams: vec![],
            fail: false,
            body: Some(body.to_string()),
        }
    }
}

#[async_trait]
impl NbaApiClient for FakeNbaClient {
    async fn list_teams(&self) -> Result<Vec<RawTeam>, CoreError> {
        if self.fail {
            return Err(CoreError::Upstream("connection refused".into()));
        }
        if let Some(body) = &self.body {
            return Ok(TeamsEnvelope::from_body(body)?.nba_franchises());
        }
        Ok(self
            .teams
            .iter()
            .filter(|t| t.nba_franchise)
            .cloned()
            .collect())
    }

    async fn find_team_by_name(&self, name: &str) -> Result<Option<RawTeam>, CoreError> {
        if self.fail {
            return Err(CoreError::Upstream("connection refused".into()));
        }
        if let Some(body) = &self.body {
            return Ok(TeamsEnvelope::from_body(body)?.first());
        }
        Ok(self.teams.iter().find(|t| t.name() == name).cloned())
    }
}

/// Store whose every operation fails, for the 500 paths.
pub struct FailingStore;

#[async_trait]
impl TeamStore for FailingStore {
    async fn find_all(&self) -> Result<Vec<StoredTeam>, StorageError> {
        Err(StorageError::new("disk I/O error"))
    }
    async fn find_by_name(&self, _name: &str) -> Result<Option<StoredTeam>, StorageError> {
        Err(StorageError::new("disk I/O error"))
    }
    async fn insert(&self, _team: Team) -> Result<StoredTeam, StorageError> {
        Err(StorageError::new("disk I/O error"))
    }
    async fn save(&self, _team: &StoredTeam) -> Result<(), StorageError> {
        Err(StorageError::new("disk I/O error"))
    }
    async fn clear_all_players(&self) -> Result<(), StorageError> {
        Err(StorageError::new("disk I/O error"))
    }
    async fn delete_all_teams(&self) -> Result<(), StorageError> {
        Err(StorageError::new("disk I/O error"))
    }
    async fn close(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

pub fn app_state(store: Arc<dyn TeamStore>, api: FakeNbaClient) -> AppState {
    AppState::new(store, Arc::new(api))
}
