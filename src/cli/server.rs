//! HTTP server mode serving the interactive page

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::ErgastClient;
use crate::config::AppConfig;
use crate::engine::{DatasetPipeline, DatasetSource};
use crate::error::{Error, Result};
use crate::shell::{render_page, FormValues, Shell, ShellAction, ShellState};
use crate::types::{max_season, Dataset};

/// Form fields posted by the page (also accepted as query parameters on `GET /`)
#[derive(Debug, Default, Deserialize)]
struct PageForm {
    #[serde(default)]
    dataset: Option<Dataset>,
    /// Kept as text so a malformed number becomes an error state, not a 422
    #[serde(default)]
    season: Option<String>,
}

impl PageForm {
    fn values(&self) -> FormValues {
        FormValues {
            dataset: self.dataset.unwrap_or_default(),
            season: self
                .season
                .as_deref()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or_else(max_season),
        }
    }

    fn season(&self) -> std::result::Result<i32, String> {
        match self.season.as_deref().map(str::trim) {
            None | Some("") => Ok(max_season()),
            Some(raw) => raw
                .parse()
                .map_err(|_| format!("Season must be a whole number, got '{raw}'")),
        }
    }
}

/// Build the router around a shell
pub fn router<S: DatasetSource + 'static>(shell: Shell<S>) -> Router {
    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate::<S>))
        .route("/save", post(save::<S>))
        .route("/reset", post(reset))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(shell))
}

/// Start the HTTP server
pub async fn serve(config: &AppConfig, port: u16) -> Result<()> {
    let client = ErgastClient::new(config)?;
    let shell = Shell::new(DatasetPipeline::new(client, config.output_dir.clone()));
    let app = router(shell);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Empty page; `?dataset=&season=` preselects the form
async fn index(Query(form): Query<PageForm>) -> Html<String> {
    Html(render_page(&ShellState::Idle, form.values()))
}

async fn generate<S: DatasetSource>(
    State(shell): State<Arc<Shell<S>>>,
    Form(form): Form<PageForm>,
) -> Html<String> {
    run_action(&shell, &form, |dataset, season| ShellAction::Generate {
        dataset,
        season,
    })
    .await
}

async fn save<S: DatasetSource>(
    State(shell): State<Arc<Shell<S>>>,
    Form(form): Form<PageForm>,
) -> Html<String> {
    run_action(&shell, &form, |dataset, season| ShellAction::Save { dataset, season }).await
}

async fn reset(Form(form): Form<PageForm>) -> Html<String> {
    Html(render_page(&ShellState::Idle, form.values()))
}

/// Requests carry no state, so every action starts from `Idle`
async fn run_action<S: DatasetSource>(
    shell: &Shell<S>,
    form: &PageForm,
    action: impl FnOnce(Dataset, i32) -> ShellAction,
) -> Html<String> {
    let state = match form.season() {
        Ok(season) => {
            let dataset = form.dataset.unwrap_or_default();
            shell.handle(ShellState::Idle, action(dataset, season)).await
        }
        Err(message) => ShellState::ErrorShown { message },
    };
    Html(render_page(&state, form.values()))
}
