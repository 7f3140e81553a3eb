use maud::{Markup, html};

use super::layout::render_page;
use crate::model::{RawTeam, StoredTeam};

fn stored_team_select(name: &str, teams: &[StoredTeam]) -> Markup {
    html! {
        select name=(name) id=(name) {
            @for stored in teams {
                option value=(stored.team.name) {
                    (stored.team.name)
                }
            }
        }
    }
}

/// Upstream teams offered for import.
#[must_use]
pub fn render_load_team(teams: &[RawTeam]) -> Markup {
    render_page(
        "Load a Team",
        None,
        html! {
            form method="post" action="/loadTeam" {
                label for="selectedTeam" { "Team" }
                select name="selectedTeam" id="selectedTeam" {
                    @for team in teams {
                        option value=(team.name()) {
                            (team.name())
                            @if !team.city().is_empty() {
                                " (" (team.city()) ")"
                            }
                        }
                    }
                }
                button type="submit" { "Load" }
            }
        },
    )
}

#[must_use]
pub fn render_add_player(teams: &[StoredTeam]) -> Markup {
    render_page(
        "Add a Player",
        None,
        html! {
            @if teams.is_empty() {
                p { "No teams have been loaded yet. " a href="/loadTeam" { "Load a team" } " first." }
            } @else {
                form method="post" action="/addPlayer" {
                    label for="teamName" { "Team" }
                    (stored_team_select("teamName", teams))
                    label for="firstName" { "First name" }
                    input type="text" name="firstName" id="firstName";
                    label for="lastName" { "Last name" }
                    input type="text" name="lastName" id="lastName";
                    label for="age" { "Age" }
                    input type="number" name="age" id="age" step="any";
                    label for="height" { "Height" }
                    input type="text" name="height" id="height" placeholder="6-9";
                    button type="submit" { "Add Player" }
                }
            }
        },
    )
}

#[must_use]
pub fn render_search_roster(teams: &[StoredTeam]) -> Markup {
    render_page(
        "View a Team Roster",
        None,
        html! {
            form method="post" action="/searchRoster" {
                label for="teamName" { "Team" }
                (stored_team_select("teamName", teams))
                button type="submit" { "Show Roster" }
            }
        },
    )
}

#[must_use]
pub fn render_search_player(teams: &[StoredTeam]) -> Markup {
    render_page(
        "Search for a Player",
        None,
        html! {
            form method="post" action="/searchPlayer" {
                label for="firstName" { "First name contains" }
                input type="text" name="firstName" id="firstName";
                label for="lastName" { "Last name contains" }
                input type="text" name="lastName" id="lastName";
                button type="submit" { "Search" }
            }
            h3 { "Loaded teams" }
            @if teams.is_empty() {
                p { "None yet." }
            } @else {
                ul class="team-list" {
                    @for stored in teams {
                        li { (stored.team.name) " (" (stored.team.players.len()) " players)" }
                    }
                }
            }
        },
    )
}
