//! Database connection utilities.

use crate::DatabaseResult;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use lumen_error::{DatabaseError, DatabaseErrorKind};

/// Connection pool type used by the Postgres repository.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Build a connection pool for `database_url`.
///
/// # Errors
///
/// Returns an error if the pool cannot open its initial connections.
#[tracing::instrument(skip(database_url))]
pub fn establish_pool(database_url: &str) -> DatabaseResult<PgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder().build(manager)?;
    tracing::info!(max_size = pool.max_size(), "Database pool ready");
    Ok(pool)
}

/// Apply any pending migrations.
///
/// # Errors
///
/// Returns an error if a connection cannot be checked out or a migration fails.
#[tracing::instrument(skip(pool))]
pub fn run_migrations(pool: &PgPool) -> DatabaseResult<()> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())))?;
    tracing::info!(count = applied.len(), "Migrations applied");
    Ok(())
}
