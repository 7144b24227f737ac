/**
 * Database Setup
 *
 * Opens the SQLite pool described by `AppConfig::database_url` and applies
 * the migrations in `migrations/`.
 *
 * In-memory URLs get a single long-lived connection: every SQLite
 * connection to `:memory:` is its own database, so a larger pool would
 * scatter data across unrelated databases.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

const MAX_CONNECTIONS: u32 = 8;

/// Connect to the database and run migrations
///
/// # Errors
///
/// Returns the connection or migration error; the caller decides whether
/// the server can start without a database (it cannot).
///
/// # Example
///
/// ```rust,no_run
/// use campus_connect::backend::server::config::load_database;
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let pool = load_database("sqlite::memory:").await?;
/// # Ok(())
/// # }
/// ```
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?
    };

    tracing::info!("Database connection pool created");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
