use crate::domain::errors::DomainError;
use log::LevelFilter;
use sqlx::{
    any::{AnyConnectOptions, AnyPoolOptions},
    AnyPool, ConnectOptions,
};
use std::str::FromStr;

mod holidays;
mod tenant_settings;

const MAX_CONNECTIONS: u32 = 20;

/// Concurrent readers alongside a writer; writers wait instead of failing
const SQLITE_PRAGMAS: [&str; 2] = ["PRAGMA journal_mode = WAL", "PRAGMA busy_timeout = 5000"];

#[derive(Clone)]
pub struct Database {
    pub(crate) pool: AnyPool,
}

impl Database {
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        // Ensure drivers are installed for AnyPool
        sqlx::any::install_default_drivers();

        let connect_options = AnyConnectOptions::from_str(database_url)?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, std::time::Duration::from_secs(1));

        let pool = AnyPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .min_connections(1)
            .connect_with(connect_options)
            .await?;

        if database_url.starts_with("sqlite") {
            for pragma in SQLITE_PRAGMAS {
                sqlx::query(pragma).execute(&pool).await?;
            }
        }

        tracing::info!(
            "Database pool ready ({} connections max)",
            MAX_CONNECTIONS
        );

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("migrations/sqlite").run(&self.pool).await?;
        Ok(())
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DomainError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                DomainError::Internal(format!("Database error: {}", db_err.message()))
            }
            other => {
                tracing::error!("Database failure: {}", other);
                DomainError::Internal("Internal server error".to_string())
            }
        }
    }
}

/// Error for a stored column that does not parse into its domain type
fn corrupt_column(column: &str, value: &str) -> DomainError {
    DomainError::Internal(format!("Invalid stored {}: {}", column, value))
}
