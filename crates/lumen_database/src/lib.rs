//! Image metadata persistence for Lumen.
//!
//! # Features
//!
//! - Diesel-based PostgreSQL repository with an r2d2 pool and embedded migrations
//! - In-memory repository for development and tests
//! - One [`ImageRepository`] trait both backends implement
//!
//! # Example
//!
//! ```rust,ignore
//! use lumen_database::{establish_pool, run_migrations, PostgresImageRepository};
//!
//! let pool = establish_pool("postgres://localhost/lumen")?;
//! run_migrations(&pool)?;
//! let repo = PostgresImageRepository::new(pool);
//! ```

#![forbid(unsafe_code)]

mod connection;
mod image_models;
mod memory;
mod postgres;
mod repository;

pub mod schema;

pub use connection::{MIGRATIONS, PgPool, establish_pool, run_migrations};
pub use image_models::{ImageRow, NewImageRow};
pub use memory::MemoryImageRepository;
pub use postgres::PostgresImageRepository;
pub use repository::ImageRepository;

pub use lumen_error::{DatabaseError, DatabaseErrorKind};

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
