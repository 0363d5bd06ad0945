use jobscout::{
    api::{build_router, AppState},
    config::Config,
    ingestion::Ingestor,
    outreach::{OutreachService, SmtpMailer},
    search::SearchService,
    state::InMemoryStore,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobscout=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!("Starting jobscout v{}", env!("CARGO_PKG_VERSION"));

    // Initialize storage and services
    let store: Arc<InMemoryStore> = Arc::new(InMemoryStore::new());
    let search = Arc::new(SearchService::new(store.clone(), config.search.clone()));
    let ingestor = Arc::new(Ingestor::new(store.clone()));

    let outreach = if config.outreach.email_enabled {
        let mailer = Arc::new(SmtpMailer::from_config(&config.outreach)?);
        tracing::info!("Outreach email enabled");
        Some(Arc::new(OutreachService::new(store.clone(), mailer)))
    } else {
        tracing::info!("Outreach email disabled");
        None
    };

    let state = AppState {
        store,
        search,
        ingestor,
        outreach,
    };

    // Serve HTTP
    let addr = format!("{}:{}", config.server.host, config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, build_router(state)).await?;

    Ok(())
}
