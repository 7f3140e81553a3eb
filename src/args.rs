use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

use crate::controller::nba::NbaApiConfig;

/// Loads `.env`, parses the command line and validates it. Exits with the
/// validation message on failure.
#[must_use]
pub fn args_checks() -> CleanArgs {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    if let Err(e) = args.validate() {
        eprintln!("Error: {e}");
        std::process::exit(2);
    }
    CleanArgs::new(args)
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            db_name: args.db_name.trim().to_string(),
            host: args.host.trim().to_string(),
            port: args.port,
            api_key: args.api_key.trim().to_string(),
            api_host: args.api_host.trim().to_string(),
            api_base_url: args.api_base_url.trim().trim_end_matches('/').to_string(),
            static_dir: args.static_dir,
        }
    }

    #[must_use]
    pub fn nba_api_config(&self) -> NbaApiConfig {
        NbaApiConfig {
            base_url: self.api_base_url.clone(),
            api_key: self.api_key.clone(),
            api_host: self.api_host.clone(),
        }
    }
}
