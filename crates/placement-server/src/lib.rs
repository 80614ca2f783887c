//! HTTP server wiring for the placement API.
//!
//! Holds the runtime configuration and wraps [`placement_api::api_router`]
//! with request tracing. The binary in `main.rs` does the process setup.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use placement_core::store::PlacementStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `PLACEMENT_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:          "127.0.0.1".to_string(),
      port:          8080,
      database_path: PathBuf::from("placement.db"),
    }
  }
}

impl ServerConfig {
  /// Layer the optional TOML file at `path` under the environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("PLACEMENT"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The API router with per-request tracing spans.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: PlacementStore + 'static,
{
  placement_api::api_router(store).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use placement_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  fn from_toml(toml: &str) -> ServerConfig {
    config::Config::builder()
      .add_source(config::File::from_str(toml, config::FileFormat::Toml))
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap()
  }

  #[test]
  fn empty_config_uses_defaults() {
    assert_eq!(from_toml(""), ServerConfig::default());
  }

  #[test]
  fn partial_config_overrides_only_given_keys() {
    let cfg = from_toml("port = 9000\ndatabase_path = \"/var/lib/placement.db\"");
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.database_path, PathBuf::from("/var/lib/placement.db"));
    assert_eq!(cfg.address(), "127.0.0.1:9000");
  }

  #[test]
  fn missing_config_file_is_not_an_error() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/placement.toml")).unwrap();
    assert_eq!(cfg.host, ServerConfig::default().host);
  }

  #[test]
  fn expand_tilde_leaves_plain_paths_alone() {
    assert_eq!(expand_tilde(Path::new("/tmp/x.db")), PathBuf::from("/tmp/x.db"));
    assert_eq!(expand_tilde(Path::new("x.db")), PathBuf::from("x.db"));
  }

  #[tokio::test]
  async fn traced_app_serves_api_routes() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let req = Request::builder()
      .uri("/employers/ids-names")
      .body(Body::empty())
      .unwrap();
    let resp = app(Arc::new(store)).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
  }
}
