// View names handed to the renderer
pub const ALBUMS_INDEX: &str = "albums/index";
pub const ALBUMS_NEW: &str = "albums/new";
pub const ALBUMS_SHOW: &str = "albums/album";
pub const ALBUMS_EDIT: &str = "albums/edit";

// Redirect targets after a write
pub const ALBUMS_PATH: &str = "/albums";
pub const ALBUMS_PATH_AFTER_EDIT: &str = "/albums/";
