use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

pub mod html_views;
pub mod json_views;

/// A view name plus the data bag it is rendered with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    #[serde(rename = "view")]
    pub name: &'static str,
    pub data: serde_json::Value,
}

impl View {
    pub fn new(name: &'static str, data: serde_json::Value) -> Self {
        Self { name, data }
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown view: {0}")]
    UnknownView(String),
    #[error("Bad data for view {view}: {source}")]
    BadData {
        view: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub trait ViewRenderer: Send + Sync {
    fn content_type(&self) -> &'static str;
    fn render(&self, view: &View) -> Result<String, RenderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ViewFormat {
    Html,
    Json,
}

impl ViewFormat {
    pub fn renderer(self) -> Arc<dyn ViewRenderer> {
        match self {
            ViewFormat::Html => Arc::new(html_views::HtmlRenderer),
            ViewFormat::Json => Arc::new(json_views::JsonRenderer),
        }
    }
}
