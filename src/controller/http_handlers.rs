use actix_web::http::StatusCode;
use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use maud::Markup;
use std::sync::Arc;
use tracing::{error, warn};

use crate::controller::nba::NbaApiClient;
use crate::controller::notice::Notice;
use crate::controller::roster::{
    add_player, clear_all_players, delete_all_teams, get_roster, list_teams, search_players,
};
use crate::controller::sync::import_team;
use crate::error::CoreError;
use crate::model::{AddPlayerForm, SearchPlayerForm, SelectTeamForm, TeamNameForm};
use crate::storage::TeamStore;
use crate::view;

/// Collaborators shared by every request. Built once in `main` (or a test) and
/// handed to actix as `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TeamStore>,
    pub api: Arc<dyn NbaApiClient>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn TeamStore>, api: Arc<dyn NbaApiClient>) -> Self {
        Self { store, api }
    }
}

/// Registers the full route table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .service(
            web::resource("/loadTeam")
                .route(web::get().to(load_team_page))
                .route(web::post().to(load_team_submit)),
        )
        .service(
            web::resource("/addPlayer")
                .route(web::get().to(add_player_page))
                .route(web::post().to(add_player_submit)),
        )
        .route("/teamRoster", web::post().to(team_roster))
        .service(
            web::resource("/searchRoster")
                .route(web::get().to(search_roster_page))
                .route(web::post().to(search_roster_submit)),
        )
        .service(
            web::resource("/searchPlayer")
                .route(web::get().to(search_player_page))
                .route(web::post().to(search_player_submit)),
        )
        .service(
            web::resource("/removePlayers")
                .route(web::get().to(remove_players_page))
                .route(web::post().to(remove_players_submit)),
        )
        .service(
            web::resource("/removeTeams")
                .route(web::get().to(remove_teams_page))
                .route(web::post().to(remove_teams_submit)),
        )
        .route("/health", web::get().to(HttpResponse::Ok));
}

fn html_response(status: StatusCode, markup: Markup) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html")
        .body(markup.into_string())
}

fn page(markup: Markup) -> HttpResponse {
    html_response(StatusCode::OK, markup)
}

fn notice(notice: &Notice) -> HttpResponse {
    html_response(notice.status, view::render_notice(notice))
}

fn server_error(message: &'static str, err: &CoreError) -> HttpResponse {
    error!(error = %err, "{message}");
    HttpResponse::InternalServerError()
        .content_type("text/plain")
        .body(message)
}

pub async fn index() -> impl Responder {
    page(view::render_index_template())
}

pub async fn load_team_page(state: Data<AppState>) -> HttpResponse {
    match state.api.list_teams().await {
        Ok(teams) if teams.is_empty() => notice(&Notice::no_teams_available()),
        Ok(teams) => page(view::render_load_team(&teams)),
        Err(e) => server_error("An error occurred while fetching teams.", &e),
    }
}

pub async fn load_team_submit(
    state: Data<AppState>,
    form: web::Form<SelectTeamForm>,
) -> HttpResponse {
    let team_name = match form.team_name() {
        Ok(name) => name,
        Err(e) => return notice(&Notice::invalid_input(&e, "/loadTeam")),
    };

    let raw = match state.api.find_team_by_name(&team_name).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return notice(&Notice::invalid_team()),
        Err(e) => return server_error("Error loading team.", &e),
    };

    match import_team(&*state.store, &raw).await {
        Ok(stored) => notice(&Notice::team_loaded(&stored.team.name)),
        Err(e) => server_error("Error loading team.", &e),
    }
}

pub async fn add_player_page(state: Data<AppState>) -> HttpResponse {
    match list_teams(&*state.store).await {
        Ok(teams) => page(view::render_add_player(&teams)),
        Err(e) => server_error("Error loading Add Player page.", &e),
    }
}

pub async fn add_player_submit(
    state: Data<AppState>,
    form: web::Form<AddPlayerForm>,
) -> HttpResponse {
    let new_player = match form.validate() {
        Ok(new_player) => new_player,
        Err(e) => return notice(&Notice::invalid_input(&e, "/addPlayer")),
    };
    let first_name = new_player.player.first_name.clone();
    let last_name = new_player.player.last_name.clone();

    match add_player(&*state.store, &new_player.team_name, new_player.player).await {
        Ok(stored) => notice(&Notice::player_added(
            &first_name,
            &last_name,
            &stored.team.name,
        )),
        Err(CoreError::TeamNotFound(name)) => {
            warn!(team = %name, "add player for unknown team");
            notice(&Notice::team_not_loaded())
        }
        Err(e) => server_error("An error occurred while adding the player.", &e),
    }
}

async fn roster_response(
    state: &AppState,
    form: &TeamNameForm,
    error_message: &'static str,
) -> HttpResponse {
    let team_name = match form.team_name() {
        Ok(name) => name,
        Err(e) => return notice(&Notice::invalid_input(&e, "/searchRoster")),
    };

    match get_roster(&*state.store, &team_name).await {
        Ok(stored) => page(view::render_roster(&stored)),
        Err(CoreError::TeamNotFound(_)) => notice(&Notice::team_not_found()),
        Err(e) => server_error(error_message, &e),
    }
}

pub async fn team_roster(state: Data<AppState>, form: web::Form<TeamNameForm>) -> HttpResponse {
    roster_response(
        &state,
        &form,
        "An error occurred while fetching the team roster.",
    )
    .await
}

pub async fn search_roster_page(state: Data<AppState>) -> HttpResponse {
    match list_teams(&*state.store).await {
        Ok(teams) if teams.is_empty() => notice(&Notice::no_teams_loaded()),
        Ok(teams) => page(view::render_search_roster(&teams)),
        Err(e) => server_error("An error occurred while fetching teams.", &e),
    }
}

pub async fn search_roster_submit(
    state: Data<AppState>,
    form: web::Form<TeamNameForm>,
) -> HttpResponse {
    roster_response(&state, &form, "Error fetching roster.").await
}

pub async fn search_player_page(state: Data<AppState>) -> HttpResponse {
    match list_teams(&*state.store).await {
        Ok(teams) => page(view::render_search_player(&teams)),
        Err(e) => server_error("Error loading Search Player page.", &e),
    }
}

pub async fn search_player_submit(
    state: Data<AppState>,
    form: web::Form<SearchPlayerForm>,
) -> HttpResponse {
    match search_players(&*state.store, &form.query()).await {
        Ok(results) => page(view::render_player_results(&results)),
        Err(e) => server_error("Error occurred while searching for player.", &e),
    }
}

pub async fn remove_players_page() -> HttpResponse {
    page(view::render_remove_players_confirm())
}

pub async fn remove_players_submit(state: Data<AppState>) -> HttpResponse {
    match clear_all_players(&*state.store).await {
        Ok(()) => page(view::render_remove_success("players")),
        Err(e) => server_error("Error removing players.", &e),
    }
}

pub async fn remove_teams_page() -> HttpResponse {
    page(view::render_remove_teams_confirm())
}

pub async fn remove_teams_submit(state: Data<AppState>) -> HttpResponse {
    match delete_all_teams(&*state.store).await {
        Ok(()) => page(view::render_remove_success("teams")),
        Err(e) => server_error("Error removing teams.", &e),
    }
}
