use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quiz_api::{app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware};

fn cors(config: &Config) -> Cors {
    if config.cors_allowed_origins.is_empty() {
        return Cors::permissive();
    }

    config
        .cors_allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let bind_address = (config.web_server_host.clone(), config.web_server_port);

    let state = AppState::new(config).await.map_err(|err| {
        log::error!("Failed to initialise application state: {}", err);
        std::io::Error::other(err)
    })?;

    log::info!(
        "Starting HTTP server on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors(&state.config))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
