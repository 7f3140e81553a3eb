use maud::{Markup, html};

use super::layout::render_page;
use crate::model::PlayerSearchResult;

#[must_use]
pub fn render_player_results(results: &[PlayerSearchResult]) -> Markup {
    render_page(
        "Player Search Results",
        None,
        html! {
            @if results.is_empty() {
                p class="empty" { "No players found." }
            } @else {
                table class="styled-table" {
                    thead {
                        tr {
                            th { "Name" }
                            th { "Age" }
                            th { "Height" }
                            th { "Team" }
                            th { "City" }
                            th { "Mascot" }
                            th {}
                        }
                    }
                    tbody {
                        @for row in results {
                            tr {
                                td { (row.first_name) " " (row.last_name) }
                                td { (row.age) }
                                td { (row.height) }
                                td { (row.team_name) }
                                td { (row.team_city) }
                                td { (row.team_mascot) }
                                td {
                                    form method="post" action="/teamRoster" {
                                        input type="hidden" name="teamName" value=(row.team_name);
                                        button type="submit" { "Roster" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            a href="/searchPlayer" { "Search again" }
        },
    )
}
