//! HTTP surface of `lma serve`: the rendered documents plus a small viewer.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::handler::HandlerWithoutStateExt;
use axum::http::{StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use log::{error, info};
use tower_http::services::ServeDir;

use lma_core::error::DocumentError;
use lma_core::{Generator, SpecVersion};

const VIEWER_PAGE: &str = include_str!("../assets/openapi-ui.html");

/// Shared by every handler.
pub struct AppState {
    pub generator: Generator,
    pub default_version: SpecVersion,
    pub port: u16,
    pub ui_dir: PathBuf,
}

pub fn router(state: Arc<AppState>) -> Router {
    let viewer = ServeDir::new(&state.ui_dir).fallback(viewer_fallback.into_service());

    Router::new()
        .route("/", get(root))
        .route("/openapi.json", get(default_document))
        .route("/openapi30.json", get(document_v3_0))
        .route("/openapi31.json", get(document_v3_1))
        .route("/ui-openapi30.json", get(viewer_v3_0))
        .route("/ui-openapi31.json", get(viewer_v3_1))
        .nest_service("/openapi-ui", viewer)
        .with_state(state)
}

/// Bind to `port` on all interfaces and serve until the process stops.
pub async fn run(state: AppState) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], state.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("serving OpenAPI documents on http://localhost:{}", state.port);
    for version in SpecVersion::ALL {
        info!("  GET {}", version.document_path());
    }
    info!("  GET /openapi.json ({})", state.default_version);
    info!("  GET /openapi-ui/ (from {})", state.ui_dir.display());

    axum::serve(listener, router(Arc::new(state))).await?;
    Ok(())
}

/// A document that failed to render.
pub struct DocumentFailure(DocumentError);

impl IntoResponse for DocumentFailure {
    fn into_response(self) -> Response {
        error!("failed to render document: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

fn document(state: &AppState, version: SpecVersion) -> Result<Response, DocumentFailure> {
    let json = state.generator.generate(version).map_err(DocumentFailure)?;
    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        json.to_owned(),
    )
        .into_response())
}

pub async fn default_document(
    State(state): State<Arc<AppState>>,
) -> Result<Response, DocumentFailure> {
    document(&state, state.default_version)
}

pub async fn document_v3_0(
    State(state): State<Arc<AppState>>,
) -> Result<Response, DocumentFailure> {
    document(&state, SpecVersion::V3_0)
}

pub async fn document_v3_1(
    State(state): State<Arc<AppState>>,
) -> Result<Response, DocumentFailure> {
    document(&state, SpecVersion::V3_1)
}

/// Viewer URL displaying the `version` document.
pub fn viewer_location(port: u16, version: SpecVersion) -> String {
    format!(
        "/openapi-ui/?url=http://localhost:{port}{}",
        version.document_path()
    )
}

fn viewer_redirect(state: &AppState, version: SpecVersion) -> Redirect {
    let location = viewer_location(state.port, version);
    info!("redirecting to viewer: {location}");
    Redirect::temporary(&location)
}

pub async fn root(State(state): State<Arc<AppState>>) -> Redirect {
    viewer_redirect(&state, SpecVersion::V3_1)
}

pub async fn viewer_v3_0(State(state): State<Arc<AppState>>) -> Redirect {
    viewer_redirect(&state, SpecVersion::V3_0)
}

pub async fn viewer_v3_1(State(state): State<Arc<AppState>>) -> Redirect {
    viewer_redirect(&state, SpecVersion::V3_1)
}

/// Answers whatever the viewer directory cannot. `uri` is relative to the
/// `/openapi-ui` mount, so the root gets the bundled page.
async fn viewer_fallback(uri: Uri) -> Response {
    if uri.path() == "/" {
        Html(VIEWER_PAGE).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}
