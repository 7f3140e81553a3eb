pub mod args;
pub mod console;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod storage;
pub mod view;

pub const STYLESHEET_PATH: &str = "/static/styles.css";

pub use error::{CoreError, ValidationError};
