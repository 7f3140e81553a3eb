pub mod forms;
pub mod team;

pub use forms::*;
pub use team::*;
