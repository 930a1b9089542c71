//! PostgreSQL implementation of ImageRepository.

use crate::schema::images;
use crate::{DatabaseResult, ImageRepository, ImageRow, NewImageRow, PgPool};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use lumen_core::{ImageRecord, NewImageRecord};
use lumen_error::{DatabaseError, DatabaseErrorKind};
use uuid::Uuid;

/// Database-backed image repository.
///
/// Diesel is synchronous, so every call checks a connection out of the pool
/// on tokio's blocking thread pool.
#[derive(Clone)]
pub struct PostgresImageRepository {
    pool: PgPool,
}

impl PostgresImageRepository {
    /// Create a new image repository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn with_conn<T, F>(&self, f: F) -> DatabaseResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> DatabaseResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            f(&mut conn)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?
    }
}

fn rows_to_records(rows: Vec<ImageRow>) -> DatabaseResult<Vec<ImageRecord>> {
    rows.into_iter().map(ImageRecord::try_from).collect()
}

#[async_trait]
impl ImageRepository for PostgresImageRepository {
    #[tracing::instrument(skip(self, records), fields(count = records.len()))]
    async fn insert_many(&self, records: Vec<NewImageRecord>) -> DatabaseResult<Vec<ImageRecord>> {
        let rows = records
            .iter()
            .map(NewImageRow::try_from)
            .collect::<DatabaseResult<Vec<_>>>()?;

        let inserted = self
            .with_conn(move |conn| {
                diesel::insert_into(images::table)
                    .values(&rows)
                    .returning(ImageRow::as_returning())
                    .get_results(conn)
                    .map_err(DatabaseError::from)
            })
            .await?;

        tracing::debug!(count = inserted.len(), "Inserted image records");
        rows_to_records(inserted)
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> DatabaseResult<Vec<ImageRecord>> {
        let rows = self
            .with_conn(|conn| {
                images::table
                    .order(images::created_at.desc())
                    .select(ImageRow::as_select())
                    .load(conn)
                    .map_err(DatabaseError::from)
            })
            .await?;
        rows_to_records(rows)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<ImageRecord>> {
        let Ok(id) = Uuid::parse_str(id) else {
            tracing::debug!("Not a valid image id");
            return Ok(None);
        };

        let row = self
            .with_conn(move |conn| {
                images::table
                    .find(id)
                    .select(ImageRow::as_select())
                    .first(conn)
                    .optional()
                    .map_err(DatabaseError::from)
            })
            .await?;

        row.map(ImageRecord::try_from).transpose()
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
