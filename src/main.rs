use axum::extract::{Path, State};
use axum::{
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use clap::Parser;
use maud::Markup;
use serde_json::json;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tokio::time;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_server::{pages, ArticleCache, RestError};

#[derive(Parser)]
#[command(name = "blog-server")]
#[command(about = "Markdown blog with an in-memory article cache")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    #[arg(short, long, default_value = "8080")]
    port: u16,

    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Directory of markdown article sources
    #[arg(long, default_value = "articles")]
    root: PathBuf,

    /// Directory served under /static
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,

    /// Seconds between automatic cache reloads (0 disables them)
    #[arg(long, default_value = "300")]
    lifespan: u64,

    #[arg(long, default_value = "The Blog")]
    title: String,

    #[arg(long, default_value = "false")]
    debug: bool,
}

#[derive(Clone)]
pub struct AppState {
    cache: Arc<ArticleCache>,
    page_title: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let filter_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("blog_server={filter_level},tower_http=info").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    dotenvy::dotenv().ok();

    let cache = Arc::new(ArticleCache::new(
        &args.root,
        Duration::from_secs(args.lifespan),
    ));

    let count = cache
        .reload()
        .await
        .unwrap_or_else(|e| panic!("failed to load articles from {}: {e}", args.root.display()));
    info!("loaded {count} articles from {}", args.root.display());

    if args.lifespan > 0 {
        spawn_reload_task(Arc::clone(&cache));
    }

    let state = AppState {
        cache,
        page_title: args.title,
    };

    let app = router(state).nest_service("/static", ServeDir::new(&args.static_dir));

    let bind_addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {bind_addr}: {e}"));

    info!("blog server started on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/article/{name}", get(article))
        .route("/timestamps", get(timestamps))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn spawn_reload_task(cache: Arc<ArticleCache>) {
    tokio::spawn(async move {
        let mut interval = time::interval(cache.lifespan());
        // The first tick fires immediately; the startup reload covered it.
        interval.tick().await;

        loop {
            interval.tick().await;
            if let Err(e) = cache.reload().await {
                warn!("scheduled reload failed, keeping previous articles: {e}");
            }
        }
    });
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }
}

async fn index(State(state): State<AppState>) -> Markup {
    let articles = state.cache.list_all().await;
    pages::index_page(&state.page_title, &articles)
}

async fn article(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Markup, RestError> {
    let article = state
        .cache
        .get(&name)
        .await
        .ok_or(RestError::ArticleNotFound)?;

    Ok(pages::article_page(&article))
}

async fn timestamps(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.cache.timestamps().await)
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "last_reload": state.cache.last_reload().await,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
