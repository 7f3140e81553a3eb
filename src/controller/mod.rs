pub mod http_handlers;
pub mod nba;
pub mod notice;
pub mod roster;
pub mod sync;

pub use http_handlers::{AppState, configure};
