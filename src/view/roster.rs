use maud::{Markup, html};

use super::layout::render_page;
use crate::model::StoredTeam;

#[must_use]
pub fn render_roster(stored: &StoredTeam) -> Markup {
    let team = &stored.team;
    render_page(
        &format!("{} Roster", team.name),
        None,
        html! {
            p class="team-meta" {
                (team.city) " " (team.mascot)
            }
            @if team.players.is_empty() {
                p { "No players on this roster yet." }
            } @else {
                table class="styled-table" {
                    thead {
                        tr {
                            th { "First Name" }
                            th { "Last Name" }
                            th { "Age" }
                            th { "Height" }
                        }
                    }
                    tbody {
                        @for player in &team.players {
                            tr {
                                td { (player.first_name) }
                                td { (player.last_name) }
                                td { (player.age) }
                                td { (player.height) }
                            }
                        }
                    }
                }
            }
            a href="/searchRoster" { "View another roster" }
        },
    )
}
