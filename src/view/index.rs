use maud::{Markup, html};

use super::layout::{SITE_TITLE, render_page};

const MENU: [(&str, &str); 6] = [
    ("/loadTeam", "Load a team"),
    ("/addPlayer", "Add a player"),
    ("/searchRoster", "View a team roster"),
    ("/searchPlayer", "Search for a player"),
    ("/removePlayers", "Remove all players"),
    ("/removeTeams", "Remove all teams"),
];

#[must_use]
pub fn render_index_template() -> Markup {
    render_page(
        SITE_TITLE,
        None,
        html! {
            ul class="menu" {
                @for (href, label) in MENU {
                    li { a href=(href) { (label) } }
                }
            }
        },
    )
}
