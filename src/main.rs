// Web server entry point
use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use energy_load_server::api;
use energy_load_server::config::ServerConfig;
use energy_load_server::models::ModelArtifact;
use energy_load_server::state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;

    // The server never starts without a usable artifact.
    let artifact = ModelArtifact::load(&config.artifact_path).with_context(|| {
        format!(
            "failed to load model artifact from {}",
            config.artifact_path.display()
        )
    })?;

    let shared_state = web::Data::new(AppState::new(artifact));
    let static_dir = config.static_dir.clone();

    log::info!("listening on http://{}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(shared_state.clone())
            .configure(api::configure)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind(config.bind_addr())?
    .run()
    .await?;

    Ok(())
}
