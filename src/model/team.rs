use serde::{Deserialize, Serialize};

/// `age` is whatever number was submitted; negative and fractional values are kept.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub first_name: String,
    pub last_name: String,
    pub age: f64,
    pub height: String,
}

/// A franchise record. Players are embedded and have no identity outside their team.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Team {
    pub name: String,
    pub mascot: String,
    pub city: String,
    pub players: Vec<Player>,
}

/// A team as persisted. `id` is assigned by the store, so two imports of the same
/// franchise stay distinguishable.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StoredTeam {
    pub id: i64,
    #[serde(flatten)]
    pub team: Team,
}

/// Team record as returned by the sports data API, before it is persisted.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct RawTeam {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(rename = "nbaFranchise", default)]
    pub nba_franchise: bool,
}

impl RawTeam {
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn mascot(&self) -> &str {
        self.nickname.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn city(&self) -> &str {
        self.city.as_deref().unwrap_or_default()
    }
}

/// One row of a player search: the player plus the team it was found on.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerSearchResult {
    pub first_name: String,
    pub last_name: String,
    pub age: f64,
    pub height: String,
    pub team_name: String,
    pub team_city: String,
    pub team_mascot: String,
}

impl PlayerSearchResult {
    #[must_use]
    pub fn new(team: &Team, player: &Player) -> Self {
        Self {
            first_name: player.first_name.clone(),
            last_name: player.last_name.clone(),
            age: player.age,
            height: player.height.clone(),
            team_name: team.name.clone(),
            team_city: team.city.clone(),
            team_mascot: team.mascot.clone(),
        }
    }
}

/// Substring constraints for a player search. `None` leaves that name unconstrained.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
