pub mod view_constants;
