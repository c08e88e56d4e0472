// src/main.rs
use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use kawaraban_core::application::{ports::time::Clock, services::ApplicationServices};
use kawaraban_core::config::AppConfig;
use kawaraban_core::domain::content::{
    ContentItem, ContentItemId, ContentKind, ContentStore, ContentTitle, PublicationStatus,
};
use kawaraban_core::infrastructure::{repositories::InMemoryContentStore, time::SystemClock};
use kawaraban_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let store = Arc::new(InMemoryContentStore::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    if config.seed_demo_content() {
        seed_demo_content(&store, clock.now())?;
    }

    let content_store: Arc<dyn ContentStore> = store;
    let services = Arc::new(ApplicationServices::new(content_store, clock));

    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn seed_demo_content(store: &InMemoryContentStore, now: DateTime<Utc>) -> Result<()> {
    let rows: [(i64, &str, &str, PublicationStatus, Duration); 7] = [
        (
            1,
            ContentKind::ARTICLE,
            "Getting Started with Content Modelling",
            PublicationStatus::Published,
            Duration::days(2),
        ),
        (
            2,
            ContentKind::ARTICLE,
            "Why Listings Belong Behind a Query Service",
            PublicationStatus::Published,
            Duration::weeks(1),
        ),
        (
            3,
            ContentKind::ARTICLE,
            "Release Notes, August Edition",
            PublicationStatus::Published,
            Duration::hours(1),
        ),
        (
            4,
            ContentKind::ARTICLE,
            "A Year of Structured Content",
            PublicationStatus::Published,
            Duration::days(365),
        ),
        (
            5,
            ContentKind::ARTICLE,
            "Thirty Days of Writing",
            PublicationStatus::Published,
            Duration::days(30),
        ),
        (
            6,
            ContentKind::ARTICLE,
            "Draft: Upcoming Features",
            PublicationStatus::Unpublished,
            Duration::days(10),
        ),
        (
            7,
            "page",
            "About This Site",
            PublicationStatus::Published,
            Duration::days(5),
        ),
    ];

    let count = rows.len();
    for (id, kind, title, status, age) in rows {
        store.insert(ContentItem {
            id: ContentItemId::new(id)?,
            kind: ContentKind::new(kind)?,
            title: ContentTitle::new(title)?,
            status,
            created_at: now - age,
        })?;
    }
    tracing::info!(count, "seeded demo content");

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
