pub mod index;
pub mod layout;
pub mod notice;
pub mod players;
pub mod remove;
pub mod roster;
pub mod teams;

pub use index::*;
pub use layout::*;
pub use notice::*;
pub use players::*;
pub use remove::*;
pub use roster::*;
pub use teams::*;
