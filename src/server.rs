//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, mapper assembly, exclusion reloads, and the Axum
//! server lifecycle.

use crate::application::mapping::{
    ContentLinkResolver, ReloadableExclusions, SiteResolver, VanityUriMapper,
};
use crate::config::Config;
use crate::domain::repositories::VanityRepository;
use crate::infrastructure::persistence::{InMemoryVanityRepository, PgVanityRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Vanity store (PostgreSQL with migrations, or in-memory)
/// - Exclusion rules, reloaded on `SIGHUP`
/// - Mapper and site resolver
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Seed file cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = connect_store(&config).await?;

    let policy = config.exclusion_policy()?;
    for (name, pattern) in policy.patterns() {
        tracing::debug!(rule = name, pattern, "Vanity url exclusion active");
    }
    let exclusions = Arc::new(ReloadableExclusions::new(policy));
    spawn_exclusion_reloader(exclusions.clone());

    let link_resolver = Arc::new(ContentLinkResolver::new(
        config.context_path.clone(),
        config.link_extension.as_deref(),
    ));

    let mapper = Arc::new(VanityUriMapper::new(
        repository.clone(),
        link_resolver,
        exclusions.clone(),
        config.context_path.clone(),
    ));

    let sites = Arc::new(SiteResolver::new(config.sites.iter()));
    if sites.is_empty() {
        tracing::info!("No site hosts configured, all requests use the default site");
    } else {
        tracing::info!(hosts = sites.len(), "Site hosts configured");
    }

    let state = AppState::new(
        mapper,
        sites,
        repository,
        exclusions,
        config.context_path.clone(),
    );
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Selects and prepares the vanity store.
async fn connect_store(config: &Config) -> Result<Arc<dyn VanityRepository>> {
    if let Some(database_url) = &config.database_url {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .connect(database_url)
            .await
            .context("Failed to connect to database")?;
        tracing::info!("Connected to database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to migrate")?;

        return Ok(Arc::new(PgVanityRepository::new(Arc::new(pool))));
    }

    let repository = match &config.records_file {
        Some(path) => InMemoryVanityRepository::from_json_file(path)?,
        None => InMemoryVanityRepository::new(),
    };
    tracing::info!("Using in-memory vanity store");

    Ok(Arc::new(repository))
}

/// Reloads exclusion rules whenever the process receives `SIGHUP`.
///
/// A failed reload is logged and the active rules stay in place.
#[cfg(unix)]
fn spawn_exclusion_reloader(exclusions: Arc<ReloadableExclusions>) {
    use tokio::signal::unix::{SignalKind, signal};

    let mut hangup = match signal(SignalKind::hangup()) {
        Ok(stream) => stream,
        Err(e) => {
            tracing::warn!("Failed to install SIGHUP handler: {}. Exclusion reload disabled.", e);
            return;
        }
    };

    tokio::spawn(async move {
        while hangup.recv().await.is_some() {
            tracing::info!("SIGHUP received, reloading vanity url exclusions");
            match Config::reload_exclusions() {
                Ok(policy) => {
                    if let Err(e) = exclusions.reload(policy) {
                        tracing::error!("Exclusion reload rejected: {}", e);
                    }
                }
                Err(e) => tracing::error!("Exclusion reload failed: {:#}", e),
            }
        }
    });
}

#[cfg(not(unix))]
fn spawn_exclusion_reloader(_exclusions: Arc<ReloadableExclusions>) {
    tracing::debug!("Exclusion reload on signal is only supported on unix");
}
