use maud::{Markup, html};

use crate::STYLESHEET_PATH;

pub const SITE_TITLE: &str = "NBA Roster Manager";

/// Shared page shell. `head_extra` is spliced into `<head>` after the title.
#[must_use]
pub fn render_page(title: &str, head_extra: Option<Markup>, content: Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link rel="stylesheet" type="text/css" href=(STYLESHEET_PATH);
                title { (title) " | " (SITE_TITLE) }
                @if let Some(extra) = head_extra {
                    (extra)
                }
            }
            body {
                nav class="top-nav" {
                    a href="/" { "Home" }
                }
                h1 { (title) }
                (content)
            }
        }
    }
}
