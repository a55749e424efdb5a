use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::constants::view_constants::{
    ALBUMS_EDIT, ALBUMS_INDEX, ALBUMS_NEW, ALBUMS_PATH, ALBUMS_PATH_AFTER_EDIT, ALBUMS_SHOW,
};
use crate::db::AlbumStore;
use crate::errors::AppError;
use crate::models::album_models::{Album, AlbumForm};
use crate::resource::{MissingRecordPolicy, Operation, Outcome, ResourceConfig};
use crate::views::View;

/// The album collection as a CRUD resource.
///
/// Every operation makes at most one store call and returns one
/// [`Outcome`]. The store handle is owned by whoever builds the resource.
pub struct AlbumResource {
    store: Arc<dyn AlbumStore>,
    config: ResourceConfig,
}

impl AlbumResource {
    pub fn new(store: Arc<dyn AlbumStore>, config: ResourceConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ResourceConfig {
        &self.config
    }

    pub async fn list(&self) -> Result<Outcome, AppError> {
        self.ensure(Operation::List)?;
        let albums = self.store.list().await?;
        debug!(count = albums.len(), "listed albums");
        Ok(Outcome::Render(View::new(
            ALBUMS_INDEX,
            json!({
                "albums": albums,
                "can_create": self.config.allows(Operation::NewForm),
            }),
        )))
    }

    pub fn new_form(&self) -> Result<Outcome, AppError> {
        self.ensure(Operation::NewForm)?;
        Ok(Outcome::Render(View::new(
            ALBUMS_NEW,
            json!({
                "album": {},
                "fields": self.config.schema.form_fields(),
            }),
        )))
    }

    pub async fn show(&self, raw_id: &str) -> Result<Outcome, AppError> {
        self.ensure(Operation::Show)?;
        let album = self.fetch(raw_id).await?;
        Ok(Outcome::Render(View::new(
            ALBUMS_SHOW,
            json!({
                "album": album,
                "editable": self.config.allows(Operation::EditForm),
            }),
        )))
    }

    pub async fn edit_form(&self, raw_id: &str) -> Result<Outcome, AppError> {
        self.ensure(Operation::EditForm)?;
        let album = self.fetch(raw_id).await?;
        Ok(Outcome::Render(View::new(
            ALBUMS_EDIT,
            json!({
                "album": album,
                "fields": self.config.schema.form_fields(),
            }),
        )))
    }

    pub async fn create(&self, form: AlbumForm) -> Result<Outcome, AppError> {
        self.ensure(Operation::Create)?;
        let fields = self.config.schema.bind(form)?;
        let album = self.store.insert(fields).await?;
        info!(album_id = album.id, name = %album.name, "created album");
        Ok(Outcome::Redirect(ALBUMS_PATH))
    }

    /// Full replace of every field; unknown ids follow the missing-record policy.
    pub async fn update(&self, raw_id: &str, form: AlbumForm) -> Result<Outcome, AppError> {
        self.ensure(Operation::Update)?;
        let fields = self.config.schema.bind(form)?;
        let affected = match parse_id(raw_id) {
            Some(album_id) => self.store.update(album_id, fields).await?,
            None => 0,
        };
        self.check_affected(raw_id, affected)?;
        info!(album_id = raw_id, affected, "updated album");
        Ok(Outcome::Redirect(ALBUMS_PATH_AFTER_EDIT))
    }

    pub async fn delete(&self, raw_id: &str) -> Result<Outcome, AppError> {
        self.ensure(Operation::Delete)?;
        let affected = match parse_id(raw_id) {
            Some(album_id) => self.store.delete(album_id).await?,
            None => 0,
        };
        self.check_affected(raw_id, affected)?;
        info!(album_id = raw_id, affected, "deleted album");
        Ok(Outcome::Redirect(ALBUMS_PATH))
    }

    fn ensure(&self, op: Operation) -> Result<(), AppError> {
        if self.config.allows(op) {
            Ok(())
        } else {
            Err(AppError::OperationDisabled(op))
        }
    }

    async fn fetch(&self, raw_id: &str) -> Result<Option<Album>, AppError> {
        let album = match parse_id(raw_id) {
            Some(album_id) => self.store.find(album_id).await?,
            None => None,
        };
        if album.is_none() {
            debug!(album_id = raw_id, "no album with this id");
            if self.config.on_missing == MissingRecordPolicy::Reject {
                return Err(AppError::NotFound(raw_id.to_string()));
            }
        }
        Ok(album)
    }

    fn check_affected(&self, raw_id: &str, affected: usize) -> Result<(), AppError> {
        if affected == 0 && self.config.on_missing == MissingRecordPolicy::Reject {
            return Err(AppError::NotFound(raw_id.to_string()));
        }
        Ok(())
    }
}

/// Path ids are taken as given; one that is not a number matches no album.
fn parse_id(raw_id: &str) -> Option<i32> {
    raw_id.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_store::MemoryAlbumStore;
    use crate::models::field_schema::ValidationError;
    use crate::resource::Variant;

    fn resource(variant: Variant, on_missing: MissingRecordPolicy) -> AlbumResource {
        AlbumResource::new(
            Arc::new(MemoryAlbumStore::new()),
            ResourceConfig::new(variant, on_missing),
        )
    }

    fn full() -> AlbumResource {
        resource(Variant::FullCrud, MissingRecordPolicy::Ignore)
    }

    fn form(name: &str, artist: &str, genre: &str, stars: &str) -> AlbumForm {
        AlbumForm {
            name: Some(name.into()),
            artist: Some(artist.into()),
            genre: Some(genre.into()),
            stars: Some(stars.into()),
        }
    }

    async fn listed(resource: &AlbumResource) -> Vec<Album> {
        match resource.list().await.unwrap() {
            Outcome::Render(view) => serde_json::from_value(view.data["albums"].clone()).unwrap(),
            other => panic!("expected a view, got {other:?}"),
        }
    }

    async fn shown(resource: &AlbumResource, raw_id: &str) -> Option<Album> {
        match resource.show(raw_id).await.unwrap() {
            Outcome::Render(view) => {
                assert_eq!(view.name, ALBUMS_SHOW);
                serde_json::from_value(view.data["album"].clone()).unwrap()
            }
            other => panic!("expected a view, got {other:?}"),
        }
    }

    #[actix_web::test]
    async fn create_adds_one_album_and_redirects() {
        let resource = full();
        let before = listed(&resource).await.len();

        let outcome = resource
            .create(form("OK Computer", "Radiohead", "Rock", "5"))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Redirect("/albums"));

        let albums = listed(&resource).await;
        assert_eq!(albums.len(), before + 1);
        let album = &albums[0];
        assert_eq!(album.name, "OK Computer");
        assert_eq!(album.artist.as_deref(), Some("Radiohead"));
        assert_eq!(album.genre.as_deref(), Some("Rock"));
        assert_eq!(album.stars, Some(5));
    }

    #[actix_web::test]
    async fn show_returns_the_created_album_or_nothing() {
        let resource = full();
        resource.create(form("Kid A", "Radiohead", "", "")).await.unwrap();
        let created = listed(&resource).await.remove(0);

        assert_eq!(shown(&resource, &created.id.to_string()).await, Some(created));
        assert_eq!(shown(&resource, "999").await, None);
        assert_eq!(shown(&resource, "not-a-number").await, None);
    }

    #[actix_web::test]
    async fn update_is_a_full_replace() {
        let resource = full();
        resource
            .create(form("OK Computer", "Radiohead", "Rock", "5"))
            .await
            .unwrap();

        let outcome = resource
            .update("1", form("OKNOTOK", "Radiohead", "", ""))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Redirect("/albums/"));

        let album = shown(&resource, "1").await.unwrap();
        assert_eq!(album.name, "OKNOTOK");
        assert_eq!(album.genre, None);
        assert_eq!(album.stars, None);
    }

    #[actix_web::test]
    async fn update_of_unknown_id_is_silent_under_ignore() {
        let resource = full();
        let outcome = resource
            .update("7", form("Ghost", "Nobody", "", ""))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Redirect("/albums/"));
        assert!(listed(&resource).await.is_empty());
    }

    #[actix_web::test]
    async fn delete_twice_is_not_an_error() {
        let resource = full();
        resource.create(form("Amnesiac", "Radiohead", "", "")).await.unwrap();

        assert_eq!(resource.delete("1").await.unwrap(), Outcome::Redirect("/albums"));
        assert_eq!(shown(&resource, "1").await, None);
        assert_eq!(resource.delete("1").await.unwrap(), Outcome::Redirect("/albums"));
    }

    #[actix_web::test]
    async fn reject_policy_reports_unknown_ids() {
        let resource = resource(Variant::FullCrud, MissingRecordPolicy::Reject);
        assert!(matches!(resource.show("7").await, Err(AppError::NotFound(id)) if id == "7"));
        assert!(matches!(resource.edit_form("7").await, Err(AppError::NotFound(_))));
        assert!(matches!(
            resource.update("7", form("Ghost", "Nobody", "", "")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(resource.delete("abc").await, Err(AppError::NotFound(_))));
        assert!(listed(&resource).await.is_empty());
    }

    #[actix_web::test]
    async fn invalid_form_never_reaches_the_store() {
        let resource = full();
        let err = resource.create(form("", "Radiohead", "", "")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ValidationError::MissingField("name"))));
        assert!(listed(&resource).await.is_empty());
    }

    #[actix_web::test]
    async fn disabled_operations_are_refused() {
        let basic = resource(Variant::BasicFields, MissingRecordPolicy::Ignore);
        assert!(matches!(
            basic.delete("1").await,
            Err(AppError::OperationDisabled(Operation::Delete))
        ));

        let list_only = resource(Variant::ListOnly, MissingRecordPolicy::Ignore);
        assert!(matches!(
            list_only.new_form(),
            Err(AppError::OperationDisabled(Operation::NewForm))
        ));
    }

    #[actix_web::test]
    async fn basic_fields_variant_drops_stars() {
        let resource = resource(Variant::BasicFields, MissingRecordPolicy::Ignore);
        resource.create(form("Blue Train", "", "Jazz", "5")).await.unwrap();
        let album = shown(&resource, "1").await.unwrap();
        assert_eq!(album.artist, None);
        assert_eq!(album.genre.as_deref(), Some("Jazz"));
        assert_eq!(album.stars, None);
    }

    #[test]
    fn new_form_renders_an_empty_album() {
        let outcome = full().new_form().unwrap();
        assert_eq!(
            outcome,
            Outcome::Render(View::new(
                ALBUMS_NEW,
                json!({
                    "album": {},
                    "fields": [
                        { "field": "name", "required": true },
                        { "field": "artist", "required": true },
                        { "field": "genre", "required": false },
                        { "field": "stars", "required": false },
                    ],
                }),
            ))
        );
    }
}
