use actix_web::http::StatusCode;

use crate::error::ValidationError;

/// A user-facing message plus where the browser should go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub status: StatusCode,
    pub message: String,
    pub redirect_to: &'static str,
}

impl Notice {
    fn new(status: StatusCode, message: impl Into<String>, redirect_to: &'static str) -> Self {
        Self {
            status,
            message: message.into(),
            redirect_to,
        }
    }

    #[must_use]
    pub fn no_teams_available() -> Self {
        Self::new(
            StatusCode::OK,
            "No teams available to load. Please try again later.",
            "/",
        )
    }

    #[must_use]
    pub fn invalid_team() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Invalid Team!", "/loadTeam")
    }

    #[must_use]
    pub fn team_loaded(name: &str) -> Self {
        Self::new(StatusCode::OK, format!("Team {name} loaded successfully!"), "/")
    }

    #[must_use]
    pub fn team_not_loaded() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "Team not found! Please load the team first.",
            "/searchRoster",
        )
    }

    #[must_use]
    pub fn player_added(first_name: &str, last_name: &str, team_name: &str) -> Self {
        Self::new(
            StatusCode::OK,
            format!("Player {first_name} {last_name} added to {team_name}!"),
            "/",
        )
    }

    #[must_use]
    pub fn team_not_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "Team not found. Please select a valid team.",
            "/searchRoster",
        )
    }

    #[must_use]
    pub fn no_teams_loaded() -> Self {
        Self::new(
            StatusCode::OK,
            "No teams have been loaded. Please load a team first.",
            "/",
        )
    }

    #[must_use]
    pub fn invalid_input(err: &ValidationError, redirect_to: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, format!("Invalid input: {err}."), redirect_to)
    }
}
