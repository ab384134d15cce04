//! Orchard JSON API Server

use std::{process, sync::Arc};

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use orchard_app::{
    context::AppContext,
    identity::{FirebaseConfig, FirebaseIdentityService},
    shipping::{CarrierCredentials, ShippingGateway, ShiprocketClient},
};

use crate::{auth::admin::ADMIN_KEY_HEADER, config::ServerConfig, state::State};

mod addresses;
mod auth;
mod blog;
mod carts;
mod config;
mod extensions;
mod healthcheck;
mod orders;
mod products;
mod reviews;
mod router;
mod shipping;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod testimonials;

/// Orchard JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        // Logging is not initialized yet.
        eprintln!("Configuration error: {e}");

        process::exit(1);
    });

    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level));

    if config.logging.log_json {
        tracing_subscriber::fmt().json().with_env_filter(env_filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let identity = FirebaseIdentityService::new(FirebaseConfig {
        addr: config.auth.firebase_addr,
        api_key: config.auth.firebase_api_key,
    });

    let shipping = ShippingGateway::new(
        Arc::new(ShiprocketClient::new(config.shipping.shiprocket_addr)),
        CarrierCredentials {
            email: config.shipping.shiprocket_email,
            password: config.shipping.shiprocket_password,
        },
    );

    let app = match AppContext::from_database_url(&config.database.database_url, identity, shipping)
        .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::shared(app, config.auth.admin_api_key)))
        .push(router::app_router());

    let doc = OpenApi::new("Orchard API", "0.1.0")
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .add_security_scheme(
            "admin_api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ADMIN_KEY_HEADER))),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
