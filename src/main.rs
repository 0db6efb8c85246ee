use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yamdb_core::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationServices, Repositories},
};
use yamdb_core::config::AppConfig;
use yamdb_core::domain::catalog::{Category, Genre};
use yamdb_core::infrastructure::{
    database,
    repositories::{
        PostgresCatalogRepository, PostgresCommentRepository, PostgresReviewRepository,
        PostgresTitleRepository, PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use yamdb_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};

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

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("database migrations applied");

    let titles = Arc::new(PostgresTitleRepository::new(pool.clone()));
    let repos = Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        categories: Arc::new(PostgresCatalogRepository::<Category>::new(pool.clone())),
        genres: Arc::new(PostgresCatalogRepository::<Genre>::new(pool.clone())),
        title_write: titles.clone(),
        title_read: titles,
        reviews: Arc::new(PostgresReviewRepository::new(pool.clone())),
        comments: Arc::new(PostgresCommentRepository::new(pool)),
    };

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        repos,
        password_hasher,
        token_manager,
        clock,
        slugger,
    ));

    let options = RouterOptions {
        allowed_origins: config.allowed_origins().to_vec(),
        rate_limit: config.rate_limit_enabled(),
    };
    let app = build_router(HttpState { services }, &options);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
