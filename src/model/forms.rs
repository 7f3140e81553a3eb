use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::team::{Player, PlayerQuery};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SelectTeamForm {
    #[serde(default)]
    pub selected_team: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamNameForm {
    #[serde(default)]
    pub team_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddPlayerForm {
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub height: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchPlayerForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewPlayer {
    pub team_name: String,
    pub player: Player,
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Missing(field));
    }
    Ok(value.to_string())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl SelectTeamForm {
    /// # Errors
    ///
    /// Will return `Err` if no team was selected
    pub fn team_name(&self) -> Result<String, ValidationError> {
        required(&self.selected_team, "selectedTeam")
    }
}

impl TeamNameForm {
    /// # Errors
    ///
    /// Will return `Err` if the team name is blank
    pub fn team_name(&self) -> Result<String, ValidationError> {
        required(&self.team_name, "teamName")
    }
}

impl AddPlayerForm {
    /// Age must be a finite number, with no range check. Height is free-form.
    ///
    /// # Errors
    ///
    /// Will return `Err` if a name field is blank or age is not a number
    pub fn validate(&self) -> Result<NewPlayer, ValidationError> {
        let team_name = required(&self.team_name, "teamName")?;
        let first_name = required(&self.first_name, "firstName")?;
        let last_name = required(&self.last_name, "lastName")?;
        let age_str = required(&self.age, "age")?;
        let age = age_str
            .parse::<f64>()
            .ok()
            .filter(|age| age.is_finite())
            .ok_or_else(|| ValidationError::NotANumber {
                field: "age",
                value: age_str.clone(),
            })?;

        Ok(NewPlayer {
            team_name,
            player: Player {
                first_name,
                last_name,
                age,
                height: self.height.trim().to_string(),
            },
        })
    }
}

impl SearchPlayerForm {
    #[must_use]
    pub fn query(&self) -> PlayerQuery {
        PlayerQuery {
            first_name: optional(&self.first_name),
            last_name: optional(&self.last_name),
        }
    }
}
