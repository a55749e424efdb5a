use diesel::prelude::{AsChangeset, Insertable};
use diesel::{Queryable, Selectable};
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::albums)]
pub struct Album {
    pub id: i32,
    pub name: String,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub stars: Option<i32>,
}

/// Validated column values for an insert or a full-replace update.
///
/// `None` is written as NULL on update, so a field left out of an edit
/// submission clears the stored value instead of keeping it.
#[derive(Insertable, AsChangeset, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::albums)]
#[diesel(treat_none_as_null = true)]
pub struct AlbumFields {
    pub name: String,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub stars: Option<i32>,
}

impl AlbumFields {
    pub fn into_album(self, id: i32) -> Album {
        Album {
            id,
            name: self.name,
            artist: self.artist,
            genre: self.genre,
            stars: self.stars,
        }
    }
}

/// Album form after picking one spelling per field.
///
/// Older forms post `album_name`/`artist_name`/`rating`, newer ones
/// `album`/`artist`/`stars`. When a body carries several spellings of a field
/// the first non-blank one wins, in that order (`name` last for the title).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(from = "RawAlbumForm")]
pub struct AlbumForm {
    pub name: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub stars: Option<String>,
}

#[derive(Deserialize)]
struct RawAlbumForm {
    album_name: Option<String>,
    album: Option<String>,
    name: Option<String>,
    artist_name: Option<String>,
    artist: Option<String>,
    genre: Option<String>,
    rating: Option<String>,
    stars: Option<String>,
}

impl From<RawAlbumForm> for AlbumForm {
    fn from(raw: RawAlbumForm) -> Self {
        AlbumForm {
            name: first_filled([raw.album_name, raw.album, raw.name]),
            artist: first_filled([raw.artist_name, raw.artist]),
            genre: raw.genre,
            stars: first_filled([raw.rating, raw.stars]),
        }
    }
}

/// First non-blank value, else the first one submitted at all.
fn first_filled<const N: usize>(values: [Option<String>; N]) -> Option<String> {
    let mut fallback = None;
    for value in values.into_iter().flatten() {
        if !value.trim().is_empty() {
            return Some(value);
        }
        if fallback.is_none() {
            fallback = Some(value);
        }
    }
    fallback
}
