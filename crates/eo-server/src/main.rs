//! My English Online Site Server
//!
//! Serves the compiled site bundle and the published data files the widgets
//! read at runtime (notably `/data/reviews.json`).

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

const DEFAULT_PORT: u16 = 8080;

/// Server configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub site_dir: String,
    pub data_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: parse_port(std::env::var("PORT").ok()),
            site_dir: std::env::var("SITE_DIR").unwrap_or_else(|_| "./dist".to_string()),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
        }
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

async fn health_check() -> &'static str {
    "OK"
}

/// Build the site router: health, published data files, and the bundle with
/// `index.html` as the not-found fallback.
fn router(config: &ServerConfig) -> Router {
    let index = format!("{}/index.html", config.site_dir);
    Router::new()
        .route("/health", get(health_check))
        .nest_service("/data", ServeDir::new(&config.data_dir))
        .fallback_service(ServeDir::new(&config.site_dir).not_found_service(ServeFile::new(index)))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();
    let app = router(&config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Site listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app)
        .await
        .expect("Server error");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[test]
    fn test_port_falls_back_to_default() {
        assert_eq!(parse_port(None), DEFAULT_PORT);
        assert_eq!(parse_port(Some("not a port".to_string())), DEFAULT_PORT);
        assert_eq!(parse_port(Some("3001".to_string())), 3001);
    }

    #[tokio::test]
    async fn test_health_route_responds_ok() {
        let config = ServerConfig {
            port: 0,
            site_dir: ".".to_string(),
            data_dir: ".".to_string(),
        };
        let app = router(&config);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
