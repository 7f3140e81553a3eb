use maud::{Markup, html};

use super::layout::render_page;
use crate::controller::notice::Notice;

pub const NOTICE_REDIRECT_SECONDS: u32 = 3;

#[must_use]
pub fn render_notice(notice: &Notice) -> Markup {
    let refresh = format!("{NOTICE_REDIRECT_SECONDS};url={}", notice.redirect_to);
    render_page(
        "Notice",
        Some(html! { meta http-equiv="refresh" content=(refresh); }),
        html! {
            div class="notice" {
                p { (notice.message) }
                a href=(notice.redirect_to) { "Continue" }
            }
        },
    )
}
