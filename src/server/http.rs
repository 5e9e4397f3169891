//! HTTP surface: catalog JSON API plus the static UI bundle

use axum::{
  extract::{Path, Query, State},
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::get,
  Json, Router,
};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::future::Future;
use std::path::Path as FsPath;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use super::ServerConfig;
use crate::catalog::{Bucket, Catalog, FileEntry};
use crate::filter;

#[derive(Clone)]
struct AppState {
  catalog: Arc<Catalog>,
}

pub struct CatalogServer {
  config: ServerConfig,
}

impl CatalogServer {
  pub fn new(config: ServerConfig) -> Self {
    Self { config }
  }

  /// Router with API routes, CORS and the UI bundle fallback
  pub fn router(&self) -> Router {
    let state = AppState {
      catalog: Arc::new(self.config.catalog.clone()),
    };

    let origins = &self.config.server.cors_origins;
    let cors = if origins.is_empty() || origins.iter().any(|o| o == "*") {
      CorsLayer::permissive()
    } else {
      let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
      CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
    };

    // SPA fallback: unknown paths get index.html
    let dist = FsPath::new(&self.config.server.dist_dir);
    let assets = ServeDir::new(dist).not_found_service(ServeFile::new(dist.join("index.html")));

    Router::new()
      .route("/health", get(health_check))
      .route("/api/catalog", get(api_catalog))
      .route("/api/buckets", get(api_buckets))
      .route("/api/buckets/{bucket}/files", get(api_bucket_files))
      .fallback_service(assets)
      .layer(cors)
      .with_state(state)
  }

  pub async fn run<F>(self, shutdown: F) -> Result<(), anyhow::Error>
  where
    F: Future<Output = ()> + Send + 'static,
  {
    let addr = self.config.address();
    let app = self.router();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
      buckets = self.config.catalog.buckets.len(),
      files = self.config.catalog.files.len(),
      "Bucket browser at http://{}",
      addr
    );

    axum::serve(listener, app.into_make_service())
      .with_graceful_shutdown(async move {
        shutdown.await;
        tracing::info!("Bucket browser shutting down");
      })
      .await?;
    Ok(())
  }
}

async fn health_check() -> StatusCode {
  StatusCode::OK
}

async fn api_catalog(State(state): State<AppState>) -> Json<Catalog> {
  Json(state.catalog.as_ref().clone())
}

#[derive(Deserialize)]
struct BucketQuery {
  #[serde(default)]
  search: String,
}

async fn api_buckets(
  State(state): State<AppState>,
  Query(q): Query<BucketQuery>,
) -> Json<Vec<Bucket>> {
  let buckets = filter::filter_buckets(&state.catalog.buckets, &q.search)
    .into_iter()
    .cloned()
    .collect();
  Json(buckets)
}

#[derive(Deserialize)]
struct FileQuery {
  #[serde(default)]
  search: String,
  /// Comma-separated tag list
  #[serde(default)]
  tags: String,
}

impl FileQuery {
  fn tag_set(&self) -> BTreeSet<String> {
    self
      .tags
      .split(',')
      .map(str::trim)
      .filter(|t| !t.is_empty())
      .map(String::from)
      .collect()
  }
}

async fn api_bucket_files(
  State(state): State<AppState>,
  Path(bucket): Path<String>,
  Query(q): Query<FileQuery>,
) -> Result<Json<Vec<FileEntry>>, AppError> {
  if state.catalog.bucket(&bucket).is_none() {
    return Err(AppError::NotFound(format!("Bucket '{}' not found", bucket)));
  }
  let files = filter::filter_files(&state.catalog.files, &bucket, &q.search, &q.tag_set())
    .into_iter()
    .cloned()
    .collect();
  Ok(Json(files))
}

enum AppError {
  NotFound(String),
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let (status, msg) = match self {
      Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
    };
    (status, Json(serde_json::json!({ "error": msg }))).into_response()
  }
}
