use clap::Parser;
use std::path::PathBuf;

use crate::controller::nba::{DEFAULT_API_BASE_URL, DEFAULT_API_HOST};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// SQLite database file. Use :memory: for a throwaway store.
    #[arg(
        short = 'n',
        long,
        value_name = "DATABASE_NAME",
        env = "DB_NAME",
        default_value = "nba_roster.db"
    )]
    pub db_name: String,
    #[arg(long, value_name = "HOST", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short = 'p', long, value_name = "PORT", env = "PORT", default_value_t = 5001)]
    pub port: u16,
    /// RapidAPI key for the NBA data API.
    #[arg(
        short = 'k',
        long,
        value_name = "API_KEY",
        env = "API_NBA_KEY",
        hide_env_values = true
    )]
    pub api_key: String,
    #[arg(long, value_name = "API_HOST", env = "API_NBA_HOST", default_value = DEFAULT_API_HOST)]
    pub api_host: String,
    #[arg(
        long,
        value_name = "API_BASE_URL",
        env = "API_NBA_BASE_URL",
        default_value = DEFAULT_API_BASE_URL
    )]
    pub api_base_url: String,
    /// Directory served under /static.
    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub db_name: String,
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub api_host: String,
    pub api_base_url: String,
    pub static_dir: PathBuf,
}
