use actix_web::http::header;
use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::album_models::AlbumForm;
use crate::resource::{AlbumResource, Outcome};
use crate::views::ViewRenderer;

/// Turn an operation outcome into a response: rendered page or a 302.
fn respond(outcome: Outcome, renderer: &dyn ViewRenderer) -> Result<HttpResponse, AppError> {
    match outcome {
        Outcome::Render(view) => {
            let body = renderer.render(&view)?;
            Ok(HttpResponse::Ok()
                .content_type(renderer.content_type())
                .body(body))
        }
        Outcome::Redirect(location) => Ok(HttpResponse::Found()
            .insert_header((header::LOCATION, location))
            .finish()),
    }
}

pub async fn list_albums(
    resource: web::Data<AlbumResource>,
    renderer: web::Data<dyn ViewRenderer>,
) -> Result<HttpResponse, AppError> {
    let outcome = resource.list().await?;
    respond(outcome, renderer.get_ref())
}

pub async fn new_album_form(
    resource: web::Data<AlbumResource>,
    renderer: web::Data<dyn ViewRenderer>,
) -> Result<HttpResponse, AppError> {
    let outcome = resource.new_form()?;
    respond(outcome, renderer.get_ref())
}

pub async fn get_album(
    resource: web::Data<AlbumResource>,
    renderer: web::Data<dyn ViewRenderer>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let album_id = path.into_inner();
    let outcome = resource.show(&album_id).await?;
    respond(outcome, renderer.get_ref())
}

pub async fn edit_album_form(
    resource: web::Data<AlbumResource>,
    renderer: web::Data<dyn ViewRenderer>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let album_id = path.into_inner();
    let outcome = resource.edit_form(&album_id).await?;
    respond(outcome, renderer.get_ref())
}

pub async fn create_album(
    resource: web::Data<AlbumResource>,
    renderer: web::Data<dyn ViewRenderer>,
    form: web::Form<AlbumForm>,
) -> Result<HttpResponse, AppError> {
    let outcome = resource.create(form.into_inner()).await?;
    respond(outcome, renderer.get_ref())
}

pub async fn update_album(
    resource: web::Data<AlbumResource>,
    renderer: web::Data<dyn ViewRenderer>,
    path: web::Path<String>,
    form: web::Form<AlbumForm>,
) -> Result<HttpResponse, AppError> {
    let album_id = path.into_inner();
    let outcome = resource.update(&album_id, form.into_inner()).await?;
    respond(outcome, renderer.get_ref())
}

pub async fn delete_album(
    resource: web::Data<AlbumResource>,
    renderer: web::Data<dyn ViewRenderer>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let album_id = path.into_inner();
    let outcome = resource.delete(&album_id).await?;
    respond(outcome, renderer.get_ref())
}
