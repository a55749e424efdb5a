pub mod album_routes;

use actix_web::web;

use crate::resource::ResourceConfig;

pub fn configure(cfg: &mut web::ServiceConfig, resource: &ResourceConfig) {
    album_routes::configure(cfg, resource);
}
