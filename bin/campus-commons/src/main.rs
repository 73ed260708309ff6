//! # CampusCommons Binary
//!
//! The entry point that assembles the web client based on compile-time features.

use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use cc_config::Settings;
use cc_core::traits::ForumApi;
use cc_web::{configure_routes, middleware, AppState};

// Feature-gated imports: the backend plugin is chosen at compile time
#[cfg(feature = "api-http")]
use cc_api_http::HttpForumApi;

#[cfg(not(feature = "api-http"))]
compile_error!("campus-commons needs a backend plugin; enable the `api-http` feature");

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // 1. Load settings: defaults, campus-commons.toml, CC_* variables
    let settings = Settings::load().context("failed to load settings")?;

    // 2. Initialize the backend plugin
    #[cfg(feature = "api-http")]
    let api = HttpForumApi::new(
        &settings.api_base_url,
        Duration::from_secs(settings.request_timeout_secs),
    )
    .context("failed to build backend client")?;

    // 3. Probe the backend. Pages report their own errors, so a down
    //    backend is not fatal.
    match api.health().await {
        Ok(()) => log::info!("backend reachable at {}", settings.api_base_url),
        Err(err) => log::warn!("{err}"),
    }

    // 4. Wrap in AppState (dynamic dispatch over the plugin)
    let state = web::Data::new(AppState::new(Box::new(api), settings.session_cookie.clone()));

    log::info!("🚀 CampusCommons starting on http://{}", settings.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::security_headers())
            .wrap(middleware::standard_middleware())
            .configure(configure_routes)
    })
    .bind(settings.bind_addr.as_str())
    .with_context(|| format!("failed to bind {}", settings.bind_addr))?
    .run()
    .await?;

    Ok(())
}
