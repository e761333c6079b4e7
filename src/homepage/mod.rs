//! Homepage composition
//!
//! The page is assembled from independent views: the hero [`HeaderView`],
//! the fixed [`TopicCard`] grid and the optional [`FeaturedSection`].

mod featured;
mod header;
mod topics;

pub use featured::{select_featured, FeaturedCard, FeaturedSection, FEATURED_LIMIT};
pub use header::HeaderView;
pub use topics::{topic_areas, TopicCard};

use serde::Serialize;
use tera::Context;

use crate::config::SiteConfig;
use crate::content::ContentCollection;
use crate::helpers::{full_url_for, head_tag};
use crate::templates::{RenderError, TemplateRenderer};

pub const PAGE_DESCRIPTION: &str =
    "Engineering best practices, architecture patterns, and real-world experiences";

/// Everything the layout needs in `<head>`
#[derive(Debug, Clone, Serialize)]
pub struct HeadData {
    pub lang: String,
    pub favicon: String,
    pub social_image: Option<String>,
    /// Pre-rendered configured tags
    pub head_tags: Vec<String>,
}

impl HeadData {
    fn new(config: &SiteConfig) -> Self {
        let image = &config.theme_config.image;
        Self {
            lang: config.i18n.default_locale.clone(),
            favicon: config.url_for(&config.favicon),
            social_image: (!image.is_empty())
                .then(|| full_url_for(&config.url, &config.base_url, image)),
            head_tags: config.head_tags.iter().map(head_tag).collect(),
        }
    }
}

/// The composed homepage, ready to render
#[derive(Debug, Clone, Serialize)]
pub struct Homepage {
    pub title: String,
    pub description: &'static str,
    pub head: HeadData,
    pub header: HeaderView,
    pub topics: Vec<TopicCard>,
    pub featured: Option<FeaturedSection>,
}

impl Homepage {
    /// Compose the page from the config and the post collection
    pub fn compose(config: &SiteConfig, posts: &ContentCollection) -> Self {
        let featured = FeaturedSection::from_posts(posts);
        match &featured {
            Some(section) => tracing::debug!("Featuring {} posts", section.posts.len()),
            None => tracing::debug!("No featured posts, omitting the section"),
        }

        Self {
            title: config.title.clone(),
            description: PAGE_DESCRIPTION,
            head: HeadData::new(config),
            header: HeaderView::new(config),
            topics: topic_areas(),
            featured,
        }
    }

    /// Render to a full HTML document
    pub fn render(&self, renderer: &TemplateRenderer) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("version", env!("CARGO_PKG_VERSION"));
        context.insert("lang", &self.head.lang);
        context.insert("page_title", &self.title);
        context.insert("page_description", &self.description);
        context.insert("favicon", &self.head.favicon);
        context.insert("social_image", &self.head.social_image);
        context.insert("head_tags", &self.head.head_tags);
        context.insert("header", &self.header);
        context.insert("topics", &self.topics);
        context.insert("featured", &self.featured);

        renderer.render("home.html", &context)
    }
}
