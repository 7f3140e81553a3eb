use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use nba_roster::args;
use nba_roster::console::wait_for_stop;
use nba_roster::controller::nba::RapidApiNbaClient;
use nba_roster::controller::{AppState, configure};
use nba_roster::logging::init_logging;
use nba_roster::storage::{SqliteStore, TeamStore};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info, warn};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();
    init_logging();

    let store = SqliteStore::open(&args.db_name)?;
    let api = RapidApiNbaClient::new(args.nba_api_config());
    let state = AppState::new(Arc::new(store.clone()), Arc::new(api));
    let static_dir = args.static_dir.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(state.clone()))
            .configure(configure)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind((args.host.as_str(), args.port))?
    .run();

    let handle = server.handle();
    let console_store = store.clone();
    actix_web::rt::spawn(async move {
        match wait_for_stop(BufReader::new(tokio::io::stdin())).await {
            Ok(true) => {
                if let Err(e) = console_store.close().await {
                    error!(error = %e, "failed to close store");
                }
                info!("Server stopped.");
                handle.stop(true).await;
            }
            Ok(false) => warn!("console input closed; 'stop' is no longer available"),
            Err(e) => error!(error = %e, "console read failed"),
        }
    });

    info!("Server running at http://{}:{}", args.host, args.port);
    server.await?;
    store.close().await?;
    Ok(())
}
