use crate::views::{RenderError, View, ViewRenderer};

/// Renders `{"view": ..., "data": ...}` for API clients and debugging.
pub struct JsonRenderer;

impl ViewRenderer for JsonRenderer {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn render(&self, view: &View) -> Result<String, RenderError> {
        Ok(serde_json::to_string(view)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wraps_the_data_bag_with_the_view_name() {
        let view = View::new("albums/album", json!({ "album": null }));
        let body = JsonRenderer.render(&view).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, json!({ "view": "albums/album", "data": { "album": null } }));
    }
}
