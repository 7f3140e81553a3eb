use maud::{Markup, html};

use super::layout::render_page;

fn render_confirm(title: &str, action: &str, warning: &str) -> Markup {
    render_page(
        title,
        None,
        html! {
            p class="warning" { (warning) }
            form method="post" action=(action) {
                button type="submit" { "Yes, remove them" }
            }
            a href="/" { "Cancel" }
        },
    )
}

#[must_use]
pub fn render_remove_players_confirm() -> Markup {
    render_confirm(
        "Remove All Players",
        "/removePlayers",
        "This empties the roster of every loaded team. Teams stay loaded.",
    )
}

#[must_use]
pub fn render_remove_teams_confirm() -> Markup {
    render_confirm(
        "Remove All Teams",
        "/removeTeams",
        "This deletes every loaded team along with its roster.",
    )
}

#[must_use]
pub fn render_remove_success(what: &str) -> Markup {
    render_page(
        "Removed",
        None,
        html! {
            p { "All " (what) " have been removed." }
            a href="/" { "Back to home" }
        },
    )
}
