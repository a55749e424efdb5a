pub mod album_handlers;
