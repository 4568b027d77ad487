#![allow(non_snake_case)]

mod client;

use staffdesk::model;

#[cfg(feature = "server")]
use staffdesk::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;
        use tower_http::trace::TraceLayer;

        use crate::server::{config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let db = startup::connect_to_database(&config).await?;

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes()
            .with_state(AppState { db })
            .layer(startup::cors_layer(&config.cors_allowed_origins))
            .layer(TraceLayer::new_for_http());
        router = router.merge(server_routes);

        Ok(router)
    })
}
