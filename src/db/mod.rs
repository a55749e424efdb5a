use async_trait::async_trait;
use diesel::r2d2::{self, ConnectionManager, PooledConnection};
use diesel::PgConnection;
use thiserror::Error;

use crate::models::album_models::{Album, AlbumFields};

pub mod memory_store;
pub mod pg_store;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;
pub type DbConn = PooledConnection<ConnectionManager<PgConnection>>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database connection error: {0}")]
    Pool(#[from] r2d2::PoolError),
    #[error("Database error: {0}")]
    Query(#[from] diesel::result::Error),
    #[error("Blocking task was cancelled")]
    Blocking,
}

/// Record store for the `albums` collection.
///
/// Every method is a single statement against the store; nothing here
/// checks whether an id exists before writing. `update` and `delete`
/// report the number of rows they touched.
#[async_trait]
pub trait AlbumStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Album>, StoreError>;
    async fn find(&self, album_id: i32) -> Result<Option<Album>, StoreError>;
    async fn insert(&self, fields: AlbumFields) -> Result<Album, StoreError>;
    async fn update(&self, album_id: i32, fields: AlbumFields) -> Result<usize, StoreError>;
    async fn delete(&self, album_id: i32) -> Result<usize, StoreError>;
}

pub fn build_pool(database_url: &str, max_size: u32) -> Result<DbPool, StoreError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder().max_size(max_size).build(manager)?;
    Ok(pool)
}

/// Helper function to get a pooled DB connection
pub fn get_conn(pool: &DbPool) -> Result<DbConn, StoreError> {
    Ok(pool.get()?)
}
