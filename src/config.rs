use clap::Parser;

use crate::resource::{MissingRecordPolicy, ResourceConfig, Variant};
use crate::views::ViewFormat;

/// Album records served as server-rendered pages.
#[derive(Parser, Debug)]
#[command(name = "album-demo")]
pub struct Args {
    /// Postgres connection string.
    #[arg(long, env = "DATABASE_URL", default_value = "postgres://localhost/album-demo")]
    pub database_url: String,

    /// Address to bind the server to.
    #[arg(long, env = "ALBUMS_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "ALBUMS_POOL_SIZE", default_value_t = 8)]
    pub pool_size: u32,

    /// Worker threads. Defaults to the number of physical cores.
    #[arg(long, env = "ALBUMS_WORKERS")]
    pub workers: Option<usize>,

    /// Which album routes and form fields to expose.
    #[arg(long, env = "ALBUMS_VARIANT", value_enum, default_value_t = Variant::FullCrud)]
    pub variant: Variant,

    /// How show, edit, update and delete treat ids with no album.
    #[arg(long, env = "ALBUMS_ON_MISSING", value_enum, default_value_t = MissingRecordPolicy::Ignore)]
    pub on_missing: MissingRecordPolicy,

    /// Page format for rendered views.
    #[arg(long, env = "ALBUMS_VIEWS", value_enum, default_value_t = ViewFormat::Html)]
    pub views: ViewFormat,

    /// Keep albums in process memory instead of Postgres. Data is lost on exit.
    #[arg(long, env = "ALBUMS_IN_MEMORY")]
    pub in_memory: bool,
}

impl Args {
    pub fn resource_config(&self) -> ResourceConfig {
        ResourceConfig::new(self.variant, self.on_missing)
    }
}
