//! A CRUD resource described by configuration.
//!
//! Each historical shape of the album routes is a [`Variant`]: it fixes which
//! operations are exposed and which form fields are accepted. Everything else
//! about the resource is shared.

use std::fmt;

use crate::models::field_schema::FieldSchema;
use crate::views::View;

pub mod album_resource;

pub use album_resource::AlbumResource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    NewForm,
    Show,
    EditForm,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::NewForm => "new form",
            Operation::Show => "show",
            Operation::EditForm => "edit form",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Variant {
    /// Index page only.
    ListOnly,
    /// List, view and create albums by name.
    BareBones,
    /// Bare-bones plus optional artist and genre.
    BasicFields,
    /// Every operation; artist required, genre and stars optional.
    FullCrud,
}

impl Variant {
    pub fn operations(self) -> &'static [Operation] {
        use Operation::*;
        match self {
            Variant::ListOnly => &[List],
            Variant::BareBones | Variant::BasicFields => &[List, NewForm, Show, Create],
            Variant::FullCrud => &[List, NewForm, Show, EditForm, Create, Update, Delete],
        }
    }

    pub fn schema(self) -> FieldSchema {
        match self {
            Variant::ListOnly | Variant::BareBones => FieldSchema::NAME_ONLY,
            Variant::BasicFields => FieldSchema::BASIC,
            Variant::FullCrud => FieldSchema::FULL,
        }
    }
}

/// What to do when an id names no album.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MissingRecordPolicy {
    /// Render with an absent album; writes to unknown ids are silent no-ops.
    Ignore,
    /// Answer 404 from show, edit, update and delete.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceConfig {
    pub variant: Variant,
    pub schema: FieldSchema,
    pub on_missing: MissingRecordPolicy,
}

impl ResourceConfig {
    pub fn new(variant: Variant, on_missing: MissingRecordPolicy) -> Self {
        Self {
            variant,
            schema: variant.schema(),
            on_missing,
        }
    }

    pub fn allows(&self, op: Operation) -> bool {
        self.variant.operations().contains(&op)
    }
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self::new(Variant::FullCrud, MissingRecordPolicy::Ignore)
    }
}

/// The single response instruction an operation produces.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Render(View),
    Redirect(&'static str),
}
