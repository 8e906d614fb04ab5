//! JSON REST API over in-memory scoreboards.

use crate::{
    apply_settings, change_score, decrement_score, edit_scores, force_end_round, increment_score,
    next_round, reset, swap_sides, ConfigStore, GameConfig, Scoreboard, ScoreboardError,
    ScoreboardId, Team, TeamProfile,
};
use actix_web::{
    get, post, put,
    web::{Data, Json, Path, ServiceConfig},
    HttpResponse, Responder,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-scoreboard entry: match state + last activity time (for auto-cleanup).
pub struct ScoreboardEntry {
    pub scoreboard: Scoreboard,
    pub last_activity: Instant,
}

/// All live scoreboards by ID.
pub type Scoreboards = RwLock<HashMap<ScoreboardId, ScoreboardEntry>>;

type AppState = Data<Scoreboards>;

/// Inactivity threshold: scoreboards not accessed for this long are removed.
pub const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Empty shared state for `App::app_data`.
pub fn new_state() -> Data<Scoreboards> {
    Data::new(RwLock::new(HashMap::new()))
}

/// Register every API route. Expects `Data<Scoreboards>` and `Data<ConfigStore>` as app data.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(api_health)
        .service(api_settings_defaults)
        .service(api_create_scoreboard)
        .service(api_get_scoreboard)
        .service(api_change_score)
        .service(api_force_end)
        .service(api_next_round)
        .service(api_reset)
        .service(api_edit_scores)
        .service(api_swap)
        .service(api_save_settings);
}

/// Drop scoreboards idle for at least `timeout`. Returns how many were removed.
pub fn evict_inactive(state: &Scoreboards, timeout: Duration) -> usize {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return 0,
    };
    let before = g.len();
    g.retain(|_, entry| entry.last_activity.elapsed() < timeout);
    before - g.len()
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize, Default)]
struct CreateScoreboardBody {
    teams: Option<[TeamProfile; 2]>,
    config: Option<GameConfig>,
}

#[derive(Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
enum Direction {
    #[default]
    Up,
    Down,
}

#[derive(Deserialize)]
struct ScoreBody {
    team: Team,
    /// Explicit change; when absent, one score step in `direction`.
    delta: Option<i64>,
    #[serde(default)]
    direction: Direction,
}

#[derive(Deserialize)]
struct ScorePair {
    a: u32,
    b: u32,
}

#[derive(Deserialize)]
struct EditScoresBody {
    scores: Vec<ScorePair>,
}

#[derive(Deserialize)]
struct SettingsBody {
    teams: [TeamProfile; 2],
    config: GameConfig,
}

/// Path segment: scoreboard id (e.g. /api/scoreboards/{id})
#[derive(Deserialize)]
struct ScoreboardPath {
    id: ScoreboardId,
}

fn bad_request(e: ScoreboardError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No scoreboard" }))
}

/// Look up a scoreboard, refresh its activity time and apply `op`. Responds with the derived view.
fn with_scoreboard<F>(state: &AppState, id: ScoreboardId, op: F) -> HttpResponse
where
    F: FnOnce(&mut Scoreboard) -> Result<(), ScoreboardError>,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match op(&mut entry.scoreboard) {
        Ok(()) => HttpResponse::Ok().json(entry.scoreboard.view()),
        Err(e) => bad_request(e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "scoreboard-web",
    })
}

/// Default configuration and team profiles (for a "restore defaults" button).
#[get("/api/settings/defaults")]
async fn api_settings_defaults() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "teams": TeamProfile::defaults(),
        "config": GameConfig::default(),
    }))
}

/// Create a scoreboard. Without a config in the body, starts from the last saved settings.
#[post("/api/scoreboards")]
async fn api_create_scoreboard(
    state: AppState,
    store: Data<ConfigStore>,
    body: Option<Json<CreateScoreboardBody>>,
) -> HttpResponse {
    let body = body.map(Json::into_inner).unwrap_or_default();
    let config = body.config.unwrap_or_else(|| store.load());
    let teams = body.teams.unwrap_or_else(TeamProfile::defaults);

    let mut scoreboard = Scoreboard::new(GameConfig::default());
    if let Err(e) = apply_settings(&mut scoreboard, &teams, config) {
        return bad_request(e);
    }
    let id = scoreboard.id;
    let view = scoreboard.view();

    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        ScoreboardEntry {
            scoreboard,
            last_activity: Instant::now(),
        },
    );
    log::info!("Created scoreboard {}", id);
    HttpResponse::Ok().json(view)
}

/// Get a scoreboard's derived view (404 if not found). Touching it refreshes last_activity.
#[get("/api/scoreboards/{id}")]
async fn api_get_scoreboard(state: AppState, path: Path<ScoreboardPath>) -> HttpResponse {
    with_scoreboard(&state, path.id, |_| Ok(()))
}

/// Change one side's score in the current round.
#[post("/api/scoreboards/{id}/score")]
async fn api_change_score(state: AppState, path: Path<ScoreboardPath>, body: Json<ScoreBody>) -> HttpResponse {
    with_scoreboard(&state, path.id, |sb| match (body.delta, body.direction) {
        (Some(delta), _) => change_score(sb, body.team, delta),
        (None, Direction::Up) => increment_score(sb, body.team),
        (None, Direction::Down) => decrement_score(sb, body.team),
    })
}

/// End the current round immediately. The awarded side is the view's `winner`.
#[post("/api/scoreboards/{id}/force-end")]
async fn api_force_end(state: AppState, path: Path<ScoreboardPath>) -> HttpResponse {
    with_scoreboard(&state, path.id, |sb| force_end_round(sb).map(|_| ()))
}

/// Start the next round of a multi-round match.
#[post("/api/scoreboards/{id}/next-round")]
async fn api_next_round(state: AppState, path: Path<ScoreboardPath>) -> HttpResponse {
    with_scoreboard(&state, path.id, next_round)
}

/// Clear all rounds back to 0:0.
#[post("/api/scoreboards/{id}/reset")]
async fn api_reset(state: AppState, path: Path<ScoreboardPath>) -> HttpResponse {
    with_scoreboard(&state, path.id, |sb| {
        reset(sb);
        Ok(())
    })
}

/// Replace round history with corrected scores.
#[put("/api/scoreboards/{id}/rounds")]
async fn api_edit_scores(state: AppState, path: Path<ScoreboardPath>, body: Json<EditScoresBody>) -> HttpResponse {
    let scores: Vec<(u32, u32)> = body.scores.iter().map(|s| (s.a, s.b)).collect();
    with_scoreboard(&state, path.id, |sb| edit_scores(sb, &scores))
}

/// Swap sides: team profiles and every round's scores.
#[post("/api/scoreboards/{id}/swap")]
async fn api_swap(state: AppState, path: Path<ScoreboardPath>) -> HttpResponse {
    with_scoreboard(&state, path.id, |sb| {
        swap_sides(sb);
        Ok(())
    })
}

/// Save teams and config (restarts the match); the config is persisted for future scoreboards.
#[put("/api/scoreboards/{id}/settings")]
async fn api_save_settings(
    state: AppState,
    store: Data<ConfigStore>,
    path: Path<ScoreboardPath>,
    body: Json<SettingsBody>,
) -> HttpResponse {
    let response = with_scoreboard(&state, path.id, |sb| apply_settings(sb, &body.teams, body.config));
    if response.status().is_success() {
        if let Err(e) = store.save(&body.config) {
            log::warn!("Could not persist settings: {}", e);
        }
    }
    response
}
