//! Repository Module
//!
//! Whole-document CRUD over the SurrealDB tables. Repositories read and
//! write documents by id; nothing here caches or retries.

pub mod cart;
pub mod order;
pub mod product;

// Re-exports
pub use cart::CartRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:id" strings at the API boundary
// =============================================================================
//
// Repositories accept either a full "table:id" reference or a bare key;
// `parse_record_id` resolves both to a `surrealdb::RecordId`.

/// Resolve an id string into a RecordId for `table`
///
/// Accepts "table:id" (parsed as-is) or a bare key (prefixed with the
/// expected table).
pub(crate) fn parse_record_id(table: &str, id: &str) -> surrealdb::RecordId {
    id.parse()
        .unwrap_or_else(|_| surrealdb::RecordId::from_table_key(table, id))
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
