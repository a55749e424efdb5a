use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::album_models::{AlbumFields, AlbumForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
    /// The field is not part of this form; anything submitted is dropped.
    Absent,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{field} must be a whole number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// One input an album form offers, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub field: String,
    pub required: bool,
}

/// Which album fields a form accepts. `name` is always required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub artist: Requirement,
    pub genre: Requirement,
    pub stars: Requirement,
}

impl FieldSchema {
    pub const NAME_ONLY: FieldSchema = FieldSchema {
        artist: Requirement::Absent,
        genre: Requirement::Absent,
        stars: Requirement::Absent,
    };

    pub const BASIC: FieldSchema = FieldSchema {
        artist: Requirement::Optional,
        genre: Requirement::Optional,
        stars: Requirement::Absent,
    };

    pub const FULL: FieldSchema = FieldSchema {
        artist: Requirement::Required,
        genre: Requirement::Optional,
        stars: Requirement::Optional,
    };

    /// The inputs a form for this schema shows; `Absent` fields are left out.
    pub fn form_fields(&self) -> Vec<FormField> {
        [
            ("name", Requirement::Required),
            ("artist", self.artist),
            ("genre", self.genre),
            ("stars", self.stars),
        ]
        .into_iter()
        .filter(|(_, requirement)| *requirement != Requirement::Absent)
        .map(|(field, requirement)| FormField {
            field: field.to_string(),
            required: requirement == Requirement::Required,
        })
        .collect()
    }

    /// Validate a submitted form and turn it into column values.
    pub fn bind(&self, form: AlbumForm) -> Result<AlbumFields, ValidationError> {
        let name = normalize(form.name).ok_or(ValidationError::MissingField("name"))?;
        let artist = apply("artist", self.artist, normalize(form.artist))?;
        let genre = apply("genre", self.genre, normalize(form.genre))?;
        let stars = match apply("stars", self.stars, normalize(form.stars))? {
            Some(raw) => Some(raw.trim().parse::<i32>().map_err(|_| ValidationError::InvalidNumber {
                field: "stars",
                value: raw,
            })?),
            None => None,
        };

        Ok(AlbumFields { name, artist, genre, stars })
    }
}

fn apply(
    field: &'static str,
    requirement: Requirement,
    value: Option<String>,
) -> Result<Option<String>, ValidationError> {
    match (requirement, value) {
        (Requirement::Absent, _) => Ok(None),
        (Requirement::Required, None) => Err(ValidationError::MissingField(field)),
        (_, value) => Ok(value),
    }
}

/// Blank counts as not submitted; anything else is kept as sent.
fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
