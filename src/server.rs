//! HTTP surface: page, widget fragments, and the placeholder stream.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{
        Html, IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{Instrument, info};

use crate::AppState;
use crate::chat::{ChatBackend, ChatRequest, HttpChatBackend, Message};
use crate::config::AppConfig;
use crate::placeholder::PlaceholderAnimator;
use crate::session::{WidgetHandle, WidgetStore};
use crate::ui::{self, PageView};

/// How often idle widgets are swept.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    info!(
        name: "chat.config.loaded",
        endpoint = %config.chat.endpoint,
        prompts = config.placeholder.prompts.len(),
        dock_items = config.dock.items.len(),
        "Widget configuration loaded"
    );

    let backend: Arc<dyn ChatBackend> =
        Arc::new(HttpChatBackend::new(config.chat.endpoint.clone()));
    let state = AppState::new(Arc::clone(&config), backend);

    spawn_idle_sweeper(state.widgets.clone(), config.server.widget_idle_timeout());

    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/", get(index_handler))
        .route("/widget/placeholder", get(placeholder_stream))
        .route(
            "/widget/chat/{id}",
            get(widget_snapshot).delete(unmount_widget),
        )
        .route(
            "/widget/chat/{id}/messages",
            axum::routing::post(submit_message),
        )
        .route("/widget/chat/{id}/transcript", get(transcript_fragment))
        .nest_service("/static", static_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Periodically unmount widgets whose page went away without telling us.
fn spawn_idle_sweeper(widgets: WidgetStore, timeout: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            let removed = widgets.sweep_idle(timeout);
            if removed > 0 {
                info!(
                    name: "widget.swept",
                    removed,
                    remaining = widgets.len(),
                    "Idle chat widgets unmounted"
                );
            }
        }
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Mount a fresh chat widget and render the page.
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let handle = state.widgets.mount();

    let page = PageView {
        widget_id: handle.id().to_string(),
        messages: handle.read(|w| w.messages().to_vec()),
        dock_items: state.dock.items().to_vec(),
        hover: state.dock.hover_state(),
        placeholder: state
            .config
            .placeholder
            .prompts
            .first()
            .cloned()
            .unwrap_or_default(),
    };

    Html(ui::render_page(page))
}

/// Form body of a prompt submission.
#[derive(Debug, Deserialize)]
struct PromptForm {
    /// Draft text as typed.
    #[serde(default)]
    message: String,
}

/// POST /widget/chat/:id/messages - Submit the draft.
///
/// Blank drafts answer `204 No Content` and change nothing. Otherwise the
/// user message is appended, the backend round-trip is spawned, and the
/// transcript fragment (showing the pending state) is returned right away.
/// A page whose widget was unmounted gets a fresh one under the same id.
async fn submit_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<PromptForm>,
) -> Result<Response, StatusCode> {
    let handle = state
        .widgets
        .get_or_remount(&id)
        .ok_or(StatusCode::NOT_FOUND)?;

    let Some(request) = handle.update(|w| {
        w.set_input(form.message);
        w.begin_submit()
    }) else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    spawn_turn(Arc::clone(&state.backend), handle.clone(), request);

    Ok(Html(transcript_html(&handle)).into_response())
}

/// GET /widget/chat/:id/transcript - Current transcript fragment.
async fn transcript_fragment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let handle = state
        .widgets
        .get_or_remount(&id)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Html(transcript_html(&handle)))
}

fn transcript_html(handle: &WidgetHandle) -> String {
    let (messages, busy) = handle.read(|w| (w.messages().to_vec(), w.is_busy()));
    ui::render_transcript(handle.id(), messages, busy)
}

/// Resolve a submission in the background.
///
/// Nothing cancels the task: it outlives an unmount or a newer submission
/// and completes into whatever widget the handle points at.
fn spawn_turn(backend: Arc<dyn ChatBackend>, handle: WidgetHandle, request: ChatRequest) {
    let span = tracing::info_span!("chat.turn", widget_id = %handle.id());
    tokio::spawn(
        async move {
            let outcome = backend.send(&request).await;
            handle.update(|w| {
                w.complete(outcome);
            });
        }
        .instrument(span),
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Widget API
// ─────────────────────────────────────────────────────────────────────────────

/// Read-only view of a mounted widget.
#[derive(Debug, Serialize, Deserialize)]
pub struct WidgetSnapshot {
    /// Widget id.
    pub id: String,
    /// Whether a reply is pending.
    pub busy: bool,
    /// Current draft.
    pub input: String,
    /// Transcript in display order.
    pub messages: Vec<Message>,
}

/// GET /widget/chat/:id - JSON snapshot of a widget.
async fn widget_snapshot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WidgetSnapshot>, StatusCode> {
    let handle = state.widgets.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    let snapshot = handle.read(|w| WidgetSnapshot {
        id: handle.id().to_string(),
        busy: w.is_busy(),
        input: w.history().input().to_string(),
        messages: w.messages().to_vec(),
    });
    Ok(Json(snapshot))
}

/// DELETE /widget/chat/:id - Unmount a widget.
async fn unmount_widget(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    if state.widgets.unmount(&id) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

/// GET /widget/placeholder - Animated placeholder frames as SSE.
///
/// Every connection runs its own animator from the first prompt; the loop
/// stops when the client disconnects.
async fn placeholder_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>> + Send> {
    let placeholder = &state.config.placeholder;
    let animator = PlaceholderAnimator::new(placeholder.prompts.clone(), placeholder.timing());

    let stream = animator
        .frames()
        .map(|text| Ok(Event::default().event("placeholder").data(text)));

    Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15)))
}
