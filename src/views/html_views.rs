use serde::de::DeserializeOwned;

use crate::constants::view_constants::{ALBUMS_EDIT, ALBUMS_INDEX, ALBUMS_NEW, ALBUMS_SHOW};
use crate::models::album_models::Album;
use crate::models::field_schema::FormField;
use crate::utils::html_utils::escape;
use crate::views::{RenderError, View, ViewRenderer};

/// Built-in HTML pages for the album views.
pub struct HtmlRenderer;

impl ViewRenderer for HtmlRenderer {
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    fn render(&self, view: &View) -> Result<String, RenderError> {
        match view.name {
            ALBUMS_INDEX => {
                let albums: Vec<Album> = field(view, "albums")?;
                let can_create = field::<Option<bool>>(view, "can_create")?.unwrap_or(false);
                Ok(page("Albums", &index_body(&albums, can_create)))
            }
            ALBUMS_NEW => {
                let fields: Vec<FormField> = field(view, "fields")?;
                Ok(page("New album", &form_body("/albums", "Create", &fields, None)))
            }
            ALBUMS_SHOW => {
                let album: Option<Album> = field(view, "album")?;
                let editable = field::<Option<bool>>(view, "editable")?.unwrap_or(false);
                let body = match album {
                    Some(album) => show_body(&album, editable),
                    None => not_found_body(),
                };
                Ok(page("Album", &body))
            }
            ALBUMS_EDIT => {
                let album: Option<Album> = field(view, "album")?;
                let fields: Vec<FormField> = field(view, "fields")?;
                let body = match album {
                    Some(album) => {
                        let action = format!("/albums/{}/edit", album.id);
                        form_body(&action, "Save", &fields, Some(&album))
                    }
                    None => not_found_body(),
                };
                Ok(page("Edit album", &body))
            }
            other => Err(RenderError::UnknownView(other.to_string())),
        }
    }
}

/// Pull one key out of the data bag; a missing key reads as JSON null.
fn field<T: DeserializeOwned>(view: &View, key: &str) -> Result<T, RenderError> {
    let value = view.data.get(key).cloned().unwrap_or_default();
    serde_json::from_value(value).map_err(|source| RenderError::BadData {
        view: view.name,
        source,
    })
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn index_body(albums: &[Album], can_create: bool) -> String {
    let mut out = String::from("<h1>Albums</h1>\n");
    if can_create {
        out.push_str("<p><a href=\"/albums/new\">New album</a></p>\n");
    }
    out.push_str("<ul>\n");
    for album in albums {
        out.push_str(&format!(
            "<li><a href=\"/albums/{}\">{}</a>{}</li>\n",
            album.id,
            escape(&album.name),
            album
                .artist
                .as_deref()
                .map(|artist| format!(" by {}", escape(artist)))
                .unwrap_or_default()
        ));
    }
    out.push_str("</ul>");
    out
}

fn show_body(album: &Album, editable: bool) -> String {
    let optional = |value: Option<&str>| value.map(escape).unwrap_or_default();
    let mut out = format!(
        "<h1>{}</h1>\n<dl>\n<dt>Artist</dt><dd>{}</dd>\n<dt>Genre</dt><dd>{}</dd>\n<dt>Stars</dt><dd>{}</dd>\n</dl>\n",
        escape(&album.name),
        optional(album.artist.as_deref()),
        optional(album.genre.as_deref()),
        album.stars.map(|s| s.to_string()).unwrap_or_default()
    );
    if editable {
        out.push_str(&format!(
            "<p><a href=\"/albums/{id}/edit\">Edit</a></p>\n<form method=\"post\" action=\"/albums/{id}/delete\"><button type=\"submit\">Delete</button></form>\n",
            id = album.id
        ));
    }
    out.push_str("<p><a href=\"/albums\">All albums</a></p>");
    out
}

fn form_body(action: &str, submit: &str, fields: &[FormField], album: Option<&Album>) -> String {
    let mut out = format!("<form method=\"post\" action=\"{}\">\n", escape(action));
    for input in fields {
        let (label, name, value) = match input.field.as_str() {
            "name" => ("Album", "album_name", album.map(|a| a.name.clone())),
            "artist" => ("Artist", "artist_name", album.and_then(|a| a.artist.clone())),
            "genre" => ("Genre", "genre", album.and_then(|a| a.genre.clone())),
            "stars" => ("Rating", "rating", album.and_then(|a| a.stars).map(|s| s.to_string())),
            _ => continue,
        };
        out.push_str(&format!(
            "<label>{} <input name=\"{}\" value=\"{}\"{}></label>\n",
            label,
            name,
            escape(value.as_deref().unwrap_or_default()),
            if input.required { " required" } else { "" }
        ));
    }
    out.push_str(&format!(
        "<button type=\"submit\">{}</button>\n</form>",
        escape(submit)
    ));
    out
}

fn not_found_body() -> String {
    "<h1>Album not found</h1>\n<p><a href=\"/albums\">All albums</a></p>".to_string()
}
