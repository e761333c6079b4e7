//! Generator module - writes the homepage using the built-in Tera templates

use anyhow::{Context as _, Result};
use std::fs;
use std::path::PathBuf;

use crate::content::ContentCollection;
use crate::homepage::Homepage;
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Homepage generator
pub struct Generator {
    blog: Blog,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            blog: blog.clone(),
            renderer,
        })
    }

    /// Render the homepage and write it to `<public_dir>/index.html`
    pub fn generate(&self, posts: &ContentCollection) -> Result<PathBuf> {
        fs::create_dir_all(&self.blog.public_dir)
            .with_context(|| format!("Failed to create dir {:?}", self.blog.public_dir))?;

        let homepage = Homepage::compose(&self.blog.config, posts);
        let html = homepage.render(&self.renderer)?;

        let output_path = self.blog.public_dir.join("index.html");
        fs::write(&output_path, html)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(output_path)
    }
}
