//! Single binary web server: JSON REST API over in-memory scoreboards.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! The last saved configuration lives in SCOREBOARD_CONFIG (default scoreboard_config.json).

use actix_web::{web::Data, App, HttpServer};
use scoreboard_web::api::{self, INACTIVITY_TIMEOUT};
use scoreboard_web::ConfigStore;
use std::time::Duration;

/// How often idle scoreboards are swept.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(30 * 60);

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_config_path() -> String {
    "scoreboard_config.json".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let config_path = std::env::var("SCOREBOARD_CONFIG").unwrap_or_else(|_| default_config_path());
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = api::new_state();
    let store = Data::new(ConfigStore::new(config_path));
    log::info!("Settings file: {}", store.path().display());

    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = api::evict_inactive(&state_cleanup, INACTIVITY_TIMEOUT);
            if removed > 0 {
                log::info!("Evicted {} idle scoreboard(s)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(store.clone())
            .configure(api::configure)
    })
    .bind(bind)?
    .run()
    .await
}
