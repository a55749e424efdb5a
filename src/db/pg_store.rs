use actix_web::web;
use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;

use crate::db::{get_conn, AlbumStore, DbConn, DbPool, StoreError};
use crate::models::album_models::{Album, AlbumFields};
use crate::schema::albums::dsl::albums;

pub struct PgAlbumStore {
    pool: DbPool,
}

impl PgAlbumStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Check out a connection and run one statement on the blocking pool.
    async fn run<F, T>(&self, query: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut DbConn) -> QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        web::block(move || {
            let mut conn = get_conn(&pool)?;
            query(&mut conn).map_err(StoreError::from)
        })
        .await
        .map_err(|_| StoreError::Blocking)?
    }
}

#[async_trait]
impl AlbumStore for PgAlbumStore {
    async fn list(&self) -> Result<Vec<Album>, StoreError> {
        debug!("select all albums");
        self.run(|conn| albums.select(Album::as_select()).load::<Album>(conn))
            .await
    }

    async fn find(&self, album_id: i32) -> Result<Option<Album>, StoreError> {
        debug!(album_id, "select album");
        self.run(move |conn| {
            albums
                .find(album_id)
                .select(Album::as_select())
                .first::<Album>(conn)
                .optional()
        })
        .await
    }

    async fn insert(&self, fields: AlbumFields) -> Result<Album, StoreError> {
        self.run(move |conn| {
            diesel::insert_into(albums)
                .values(&fields)
                .returning(Album::as_returning())
                .get_result::<Album>(conn)
        })
        .await
    }

    async fn update(&self, album_id: i32, fields: AlbumFields) -> Result<usize, StoreError> {
        self.run(move |conn| diesel::update(albums.find(album_id)).set(&fields).execute(conn))
            .await
    }

    async fn delete(&self, album_id: i32) -> Result<usize, StoreError> {
        self.run(move |conn| diesel::delete(albums.find(album_id)).execute(conn))
            .await
    }
}
