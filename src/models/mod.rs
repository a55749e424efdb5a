pub mod album_models;
pub mod field_schema;
