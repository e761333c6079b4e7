//! Built-in homepage templates using the Tera template engine
//!
//! Templates are embedded in the binary, so a site needs no theme directory.

use std::collections::HashMap;
use tera::{Context, Tera};
use thiserror::Error;

use crate::helpers::escape_html;

/// Template failures, split by the stage that failed
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to register templates: {0}")]
    Register(#[source] tera::Error),

    #[error("failed to render template {name}: {detail}")]
    Render {
        name: String,
        detail: String,
        #[source]
        source: tera::Error,
    },
}

/// Template renderer with the embedded homepage templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();

        // Values are escaped explicitly with the `text` filter; head tags
        // arrive pre-rendered
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("home/layout.html")),
            ("home.html", include_str!("home/home.html")),
            (
                "partials/header.html",
                include_str!("home/partials/header.html"),
            ),
            (
                "partials/topics.html",
                include_str!("home/partials/topics.html"),
            ),
            (
                "partials/featured.html",
                include_str!("home/partials/featured.html"),
            ),
        ])
        .map_err(RenderError::Register)?;

        tera.register_filter("text", text_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String, RenderError> {
        self.tera
            .render(template_name, context)
            .map_err(|source| RenderError::Render {
                name: template_name.to_string(),
                detail: error_chain(&source),
                source,
            })
    }
}

/// Tera's own message is terse; the cause chain says what went wrong
fn error_chain(err: &tera::Error) -> String {
    let mut parts = Vec::new();
    let mut current: Option<&dyn std::error::Error> = std::error::Error::source(err);
    while let Some(e) = current {
        parts.push(e.to_string());
        current = e.source();
    }
    if parts.is_empty() {
        err.to_string()
    } else {
        parts.join(": ")
    }
}

/// Tera filter: escape a value for HTML text or attributes
fn text_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = match value {
        tera::Value::String(s) => s.clone(),
        tera::Value::Null => String::new(),
        other => other.to_string(),
    };
    Ok(tera::Value::String(escape_html(&s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_register() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn test_text_filter_escapes() {
        let value = tera::Value::String("<b>\"x\" & y</b>".to_string());
        let out = text_filter(&value, &HashMap::new()).unwrap();
        assert_eq!(out, "&lt;b&gt;&quot;x&quot; &amp; y&lt;/b&gt;");
    }

    #[test]
    fn test_missing_template_is_render_error() {
        let renderer = TemplateRenderer::new().unwrap();
        let err = renderer.render("nope.html", &Context::new()).unwrap_err();
        assert!(matches!(err, RenderError::Render { ref name, .. } if name == "nope.html"));
    }
}
