use actix_web::web;

use crate::handlers::album_handlers::{
    create_album, delete_album, edit_album_form, get_album, list_albums, new_album_form,
    update_album,
};
use crate::resource::{Operation, ResourceConfig};

/// Register only the album routes the configured variant exposes.
pub fn configure(cfg: &mut web::ServiceConfig, resource: &ResourceConfig) {
    let mut scope = web::scope("/albums");

    if resource.allows(Operation::List) {
        scope = scope
            .route("", web::get().to(list_albums))
            .route("/", web::get().to(list_albums));
    }
    if resource.allows(Operation::Create) {
        scope = scope.route("", web::post().to(create_album));
    }
    // Must come before "/{album_id}" or "new" is taken as an id.
    if resource.allows(Operation::NewForm) {
        scope = scope.route("/new", web::get().to(new_album_form));
    }
    if resource.allows(Operation::Show) {
        scope = scope.route("/{album_id}", web::get().to(get_album));
    }
    if resource.allows(Operation::EditForm) {
        scope = scope.route("/{album_id}/edit", web::get().to(edit_album_form));
    }
    if resource.allows(Operation::Update) {
        scope = scope.route("/{album_id}/edit", web::post().to(update_album));
    }
    if resource.allows(Operation::Delete) {
        scope = scope.route("/{album_id}/delete", web::post().to(delete_album));
    }

    cfg.service(scope);
}
