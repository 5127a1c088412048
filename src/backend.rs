use crate::{
    config::{SiteConfig, SITE_CONFIG_PATH},
    contact::is_valid_email,
};
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use thiserror::Error;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_FILTER: &str = "info";
const SITE_CONFIG_MAX_AGE_SECONDS: u64 = 300;
const REQUEST_ID_HEADER: &str = "x-request-id";

const ENV_PORT: &str = "PORT";
const ENV_DIST_DIR: &str = "DIST_DIR";
const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
const ENV_FORM_ENDPOINT: &str = "CONTACT_FORM_ENDPOINT";
const ENV_EMAIL: &str = "CONTACT_EMAIL";
const ENV_GITHUB_URL: &str = "GITHUB_PROFILE_URL";
const ENV_LINKEDIN_URL: &str = "LINKEDIN_PROFILE_URL";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} must be an http(s) URL, got {value:?}")]
    InvalidUrl { name: &'static str, value: String },
    #[error("{name} must be an email address, got {value:?}")]
    InvalidEmail { name: &'static str, value: String },
    #[error("{name} must be a TCP port number, got {value:?}")]
    InvalidPort { name: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub site: SiteConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads every setting through `lookup` so callers decide where values
    /// come from. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| non_empty(lookup(name));

        let port = match read(ENV_PORT) {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                name: ENV_PORT,
                value,
            })?,
            None => DEFAULT_PORT,
        };
        let dist_dir = read(ENV_DIST_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));

        let site = SiteConfig {
            form_endpoint: required_http_url(ENV_FORM_ENDPOINT, read(ENV_FORM_ENDPOINT))?,
            email: required_email(ENV_EMAIL, read(ENV_EMAIL))?,
            github_url: required_http_url(ENV_GITHUB_URL, read(ENV_GITHUB_URL))?,
            linkedin_url: required_http_url(ENV_LINKEDIN_URL, read(ENV_LINKEDIN_URL))?,
        };

        Ok(Self {
            port,
            dist_dir,
            site,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required_http_url(name: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    let value = value.ok_or(ConfigError::Missing(name))?;

    match Url::parse(&value) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => Ok(value),
        _ => Err(ConfigError::InvalidUrl { name, value }),
    }
}

fn required_email(name: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    let value = value.ok_or(ConfigError::Missing(name))?;

    if is_valid_email(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidEmail { name, value })
    }
}

#[derive(Clone)]
pub struct AppState {
    site: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(site: SiteConfig) -> Self {
        Self {
            site: Arc::new(site),
        }
    }
}

pub fn router(state: AppState, dist_dir: &Path) -> Router {
    let static_service = ServeDir::new(dist_dir).not_found_service(ServeFile::new(dist_dir.join("index.html")));

    Router::new()
        .route(SITE_CONFIG_PATH, get(get_site_config))
        .fallback_service(static_service)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn run() -> Result<(), ServerError> {
    init_tracing();

    let config = ServerConfig::from_env()?;
    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = router(AppState::new(config.site), &config.dist_dir);

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|source| ServerError::Bind { address, source })?;
    info!(
        event = "server_listening",
        url = %format!("http://127.0.0.1:{}", config.port),
        dist_dir = %config.dist_dir.display(),
        "portfolio host ready"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(ENV_LOG_LEVEL).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt().json().with_env_filter(filter).try_init();
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(event = "shutdown_signal_failed", %error, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!(event = "server_shutdown", "shutting down");
}

async fn get_site_config(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let request_id = resolve_request_id(&headers);

    info!(
        event = "site_config_served",
        request_id = request_id.as_str(),
        "served site configuration"
    );

    let mut response_headers = HeaderMap::new();
    response_headers.insert(
        header::CACHE_CONTROL,
        cache_control(&format!("public, max-age={SITE_CONFIG_MAX_AGE_SECONDS}")),
    );
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response_headers.insert(REQUEST_ID_HEADER, value);
    }

    (StatusCode::OK, response_headers, Json(SiteConfig::clone(&state.site)))
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use std::collections::HashMap;
    use tower::util::ServiceExt;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (ENV_FORM_ENDPOINT, "https://formspree.io/f/abc123"),
            (ENV_EMAIL, "hello@example.com"),
            (ENV_GITHUB_URL, "https://github.com/example"),
            (ENV_LINKEDIN_URL, "https://www.linkedin.com/in/example"),
        ])
    }

    fn config_from(env: &HashMap<&'static str, &'static str>) -> Result<ServerConfig, ConfigError> {
        ServerConfig::from_lookup(|name| env.get(name).map(|value| value.to_string()))
    }

    fn test_site() -> SiteConfig {
        config_from(&full_env()).expect("complete env").site
    }

    #[test]
    fn defaults_apply_when_optional_values_are_unset() {
        let config = config_from(&full_env()).expect("complete env parses");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(config.site.email, "hello@example.com");
    }

    #[test]
    fn blank_required_value_counts_as_missing() {
        let mut env = full_env();
        env.insert(ENV_FORM_ENDPOINT, "   ");

        assert_eq!(
            config_from(&env),
            Err(ConfigError::Missing(ENV_FORM_ENDPOINT))
        );
    }

    #[test]
    fn non_http_profile_url_is_rejected() {
        let mut env = full_env();
        env.insert(ENV_LINKEDIN_URL, "ftp://linkedin.example");

        assert!(matches!(
            config_from(&env),
            Err(ConfigError::InvalidUrl { name: ENV_LINKEDIN_URL, .. })
        ));
    }

    #[test]
    fn malformed_email_and_port_are_rejected() {
        let mut env = full_env();
        env.insert(ENV_EMAIL, "not-an-address");
        assert!(matches!(
            config_from(&env),
            Err(ConfigError::InvalidEmail { .. })
        ));

        let mut env = full_env();
        env.insert(ENV_PORT, "99999");
        assert_eq!(
            config_from(&env),
            Err(ConfigError::InvalidPort {
                name: ENV_PORT,
                value: "99999".to_string()
            })
        );
    }

    #[test]
    fn request_id_header_is_reused_when_present() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" abc-123 "));
        assert_eq!(resolve_request_id(&headers), "abc-123");

        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));
    }

    #[tokio::test]
    async fn site_config_route_serves_camel_case_json() {
        let dist = tempfile::tempdir().expect("temp dir");
        let app = router(AppState::new(test_site()), dist.path());

        let response = app
            .oneshot(
                Request::builder()
                    .uri(SITE_CONFIG_PATH)
                    .header(REQUEST_ID_HEADER, "req-test")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).and_then(|value| value.to_str().ok()),
            Some("public, max-age=300")
        );
        assert_eq!(
            response.headers().get(REQUEST_ID_HEADER).and_then(|value| value.to_str().ok()),
            Some("req-test")
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(json["formEndpoint"], "https://formspree.io/f/abc123");
        assert_eq!(json["githubUrl"], "https://github.com/example");

        let decoded: SiteConfig = serde_json::from_slice(&body).expect("decodes as SiteConfig");
        assert_eq!(decoded, test_site());
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index_html() {
        let dist = tempfile::tempdir().expect("temp dir");
        std::fs::write(dist.path().join("index.html"), "<div id=\"app\"></div>").expect("write index");
        let app = router(AppState::new(test_site()), dist.path());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/projects")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        assert_eq!(&body[..], b"<div id=\"app\"></div>");
    }
}
