//! Database Module
//!
//! Embedded SurrealDB storage. Documents are read and written whole by
//! id; atomicity of a single document update is the engine's guarantee,
//! not re-implemented here.

pub mod models;
pub mod repository;

use crate::core::Config;
use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

const NAMESPACE: &str = "store";
const DATABASE: &str = "store";

/// Database service owning the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the embedded database under `data_dir`
    pub async fn open(data_dir: &str) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(data_dir)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(data_dir, "Database connection established");

        Ok(Self { db })
    }

    /// Open the database at the configured data directory
    pub async fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::open(&config.data_dir).await
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
