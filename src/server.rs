//! Inbound HTTP surface: router, handlers, and request-parameter parsing.

use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    response::Html,
    routing::get,
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    client::{RecipeClient, SearchError, SearchQuery},
    config::Config,
    views,
};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<RecipeClient>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/search-recipe", get(search_recipe).post(search_recipe))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl+C or SIGTERM.
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    let client = Arc::new(RecipeClient::new(&config.upstream, config.retry.clone()));
    let app = create_router(AppState { client });

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    info!("Server running on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn index() -> Html<String> {
    info!("On index page");
    Html(views::render_index())
}

/// Search handler for both GET (query string) and POST (urlencoded form).
///
/// Any client failure is logged and degrades to the same empty results page
/// a successful-but-empty search would render.
async fn search_recipe(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
    body: String,
) -> Html<String> {
    info!("On search results page");

    let query = parse_search_params(raw_query.as_deref().unwrap_or(""), &body);

    match state.client.search(&query).await {
        Ok(page) => Html(views::render_results(&page.results, page.has_more)),
        Err(err) => {
            log_search_error(&err);
            Html(views::render_results(&[], true))
        }
    }
}

fn log_search_error(err: &SearchError) {
    match err {
        SearchError::Timeout(_) => tracing::error!("Upstream request timed out"),
        SearchError::TooManyRedirects(_) => tracing::error!("Too many redirects from upstream"),
        other => tracing::error!("Upstream request failed: {}", other),
    }
}

/// Build a [`SearchQuery`] from the raw query string and form body.
///
/// Whichever source carries the parameters wins pair by pair; repeated
/// `health-checkbox` values accumulate, only the first non-empty
/// `diet-checkbox` is kept, and a `kcal-input` that is not an integer is
/// treated as absent.
fn parse_search_params(raw_query: &str, body: &str) -> SearchQuery {
    let pairs = url::form_urlencoded::parse(raw_query.as_bytes())
        .chain(url::form_urlencoded::parse(body.as_bytes()));

    let mut query = SearchQuery::default();
    let mut diet_labels = Vec::new();

    for (name, value) in pairs {
        match name.as_ref() {
            "recipe_search_query" => {
                if query.dish_name.is_empty() {
                    query.dish_name = value.into_owned();
                }
            }
            "health-checkbox" => query.health_labels.push(value.into_owned()),
            "diet-checkbox" => diet_labels.push(value.into_owned()),
            "kcal-input" => {
                if query.max_calories.is_none() {
                    query.max_calories = value.parse().ok();
                }
            }
            _ => {}
        }
    }

    query.diet_label = diet_labels.into_iter().find(|label| !label.is_empty());
    query
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
