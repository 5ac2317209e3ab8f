//! Interclass games REST server.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT (see `config`).

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use interclass_games::api::{self, AppContext};
use interclass_games::config::ServerConfig;
use interclass_games::{import_participants, parse_roster, seed_teams, SportRegistry, Store};

/// Build the startup store: seed teams, then import the roster file if one is configured.
async fn initial_store(config: &ServerConfig) -> std::io::Result<Store> {
    let mut store = Store::new();
    if config.seed_teams {
        let added = seed_teams(&mut store);
        log::info!("Seeded {} teams", added);
    }
    if let Some(path) = &config.participants_csv {
        let csv = tokio::fs::read(path).await?;
        let rows = parse_roster(csv.as_slice()).map_err(std::io::Error::other)?;
        let imported = import_participants(&mut store, rows).map_err(std::io::Error::other)?;
        log::info!("Loaded {} participants from {}", imported.len(), path.display());
    }
    Ok(store)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(std::io::Error::other)?;
    let store = initial_store(&config).await?;
    let state = Data::new(AppContext::new(store, SportRegistry::standard(), config.paging));

    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(api::json_config())
            .wrap(Logger::default())
            .configure(api::configure)
    })
    .bind(bind)?
    .run()
    .await
}
