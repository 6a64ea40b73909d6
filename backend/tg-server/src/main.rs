use tg_auth::{PasswordHasher, TokenService};
use tg_config::{Config, DatabaseConfig};
use tg_db::{
    DependencyHealth, SqlCredentialStore, StoreConnector, StoreSettings, TaskRepository,
    create_lazy_pool,
};
use tg_server::{
    AppState, AuthenticationGate, ServerError, ServerResult, ShutdownCoordinator, build_router,
    shutdown::wait_for_signal,
    startup::{bootstrap, supervise_store},
};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;
use tokio::task::JoinError;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load configuration; validation runs once the logger is up
    let config = Config::load()?;
    bootstrap(&config, &Config::config_dir()?)?;

    info!("Starting tg-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Signing key is mandatory; there is no unkeyed mode
    let secret = config.auth.jwt_secret.as_deref().unwrap_or_default();
    let tokens = TokenService::new(secret.as_bytes())
        .map_err(ServerError::from)?
        .with_ttl(chrono::Duration::days(config.auth.token_ttl_days as i64));
    let hasher = PasswordHasher::new(config.auth.bcrypt_cost).map_err(ServerError::from)?;

    // Lazy pool: nothing touches the store until the connector runs
    let settings = store_settings(&config.database);
    let database_path = config.database_path()?;
    info!("Database: {}", database_path.display());
    let pool = create_lazy_pool(&database_path, &settings).map_err(ServerError::from)?;

    let health = DependencyHealth::new();
    let credentials = Arc::new(SqlCredentialStore::new(
        pool.clone(),
        hasher.clone(),
        settings.operation_timeout,
    ));
    let tasks = Arc::new(TaskRepository::new(pool.clone(), settings.operation_timeout));
    let tokens = Arc::new(tokens);
    let gate = Arc::new(AuthenticationGate::new(
        health.clone(),
        credentials.clone(),
        tokens.clone(),
        hasher,
    ));

    let app_state = AppState {
        health: health.clone(),
        tokens,
        credentials,
        tasks,
        gate,
    };

    let app = build_router(app_state, &config.server.cors_origins);

    // Bind before the store is reachable; store routes answer 503 until then
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ServerError::Bind {
            addr: bind_addr.clone(),
            source: e,
        })?;
    info!("Server listening on {}", listener.local_addr()?);

    let shutdown = ShutdownCoordinator::new();

    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown_for_signal.shutdown();
    });

    // Initial connect, then the liveness check loop
    let connector = Arc::new(StoreConnector::new(pool, health, settings));
    let environment = config.server.environment;
    let mut supervisor = {
        let connector = Arc::clone(&connector);
        let shutdown_rx = shutdown.subscribe();
        tokio::spawn(async move { supervise_store(&connector, environment, shutdown_rx).await })
    };

    info!("Server ready to accept connections");
    let mut guard = shutdown.subscribe_guard();
    let server = async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                guard.wait().await;
            })
            .await
    };
    tokio::pin!(server);

    let supervisor_first = tokio::select! {
        result = &mut server => {
            result?;
            None
        }
        joined = &mut supervisor => Some(joined),
    };

    match supervisor_first {
        None => report_supervisor(supervisor.await),
        Some(Ok(Err(e))) => {
            error!("Initial store connection failed in production: {}", e);
            shutdown.shutdown();
            connector.close().await;
            return Err(e.into());
        }
        Some(joined) => {
            report_supervisor(joined);
            server.await?;
        }
    }

    connector.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

fn report_supervisor(joined: Result<ServerResult<()>, JoinError>) {
    match joined {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Store supervisor failed: {}", e),
        Err(e) => warn!("Store supervisor task ended abnormally: {}", e),
    }
}

fn store_settings(database: &DatabaseConfig) -> StoreSettings {
    StoreSettings {
        max_connections: database.max_connections,
        connect_timeout: database.connect_timeout(),
        operation_timeout: database.operation_timeout(),
        check_interval: database.check_interval(),
    }
}
