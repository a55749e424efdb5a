use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::db::{AlbumStore, StoreError};
use crate::models::album_models::{Album, AlbumFields};

/// In-process album store. Rows are kept in id order and ids are never
/// reused, matching a serial primary key.
#[derive(Default)]
pub struct MemoryAlbumStore {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    rows: BTreeMap<i32, Album>,
    last_id: i32,
}

impl MemoryAlbumStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        // A panic mid-call cannot leave a row half-written, so keep serving.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl AlbumStore for MemoryAlbumStore {
    async fn list(&self) -> Result<Vec<Album>, StoreError> {
        Ok(self.state().rows.values().cloned().collect())
    }

    async fn find(&self, album_id: i32) -> Result<Option<Album>, StoreError> {
        Ok(self.state().rows.get(&album_id).cloned())
    }

    async fn insert(&self, fields: AlbumFields) -> Result<Album, StoreError> {
        let mut state = self.state();
        state.last_id += 1;
        let album = fields.into_album(state.last_id);
        state.rows.insert(album.id, album.clone());
        Ok(album)
    }

    async fn update(&self, album_id: i32, fields: AlbumFields) -> Result<usize, StoreError> {
        let mut state = self.state();
        match state.rows.get_mut(&album_id) {
            Some(row) => {
                *row = fields.into_album(album_id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, album_id: i32) -> Result<usize, StoreError> {
        Ok(usize::from(self.state().rows.remove(&album_id).is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> AlbumFields {
        AlbumFields {
            name: name.to_string(),
            artist: None,
            genre: None,
            stars: None,
        }
    }

    #[actix_web::test]
    async fn ids_are_assigned_once_and_not_reused() {
        let store = MemoryAlbumStore::new();
        let first = store.insert(fields("Kid A")).await.unwrap();
        let second = store.insert(fields("Amnesiac")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        assert_eq!(store.delete(second.id).await.unwrap(), 1);
        let third = store.insert(fields("Hail to the Thief")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[actix_web::test]
    async fn list_is_in_id_order() {
        let store = MemoryAlbumStore::new();
        for name in ["A", "B", "C"] {
            store.insert(fields(name)).await.unwrap();
        }
        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[actix_web::test]
    async fn writes_to_unknown_ids_touch_nothing() {
        let store = MemoryAlbumStore::new();
        assert_eq!(store.update(7, fields("Ghost")).await.unwrap(), 0);
        assert_eq!(store.delete(7).await.unwrap(), 0);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn update_replaces_the_whole_row() {
        let store = MemoryAlbumStore::new();
        let album = store
            .insert(AlbumFields {
                name: "OK Computer".into(),
                artist: Some("Radiohead".into()),
                genre: Some("Rock".into()),
                stars: Some(5),
            })
            .await
            .unwrap();

        store.update(album.id, fields("OKNOTOK")).await.unwrap();
        let stored = store.find(album.id).await.unwrap().unwrap();
        assert_eq!(stored, fields("OKNOTOK").into_album(album.id));
    }
}
