//! Hero header at the top of the homepage

use serde::Serialize;

use crate::config::SiteConfig;

pub const SUBTITLE: &str =
    "Sharing insights on engineering excellence, architecture patterns, and real-world experiences";
pub const CTA_LABEL: &str = "Read Latest Posts";

#[derive(Debug, Clone, Serialize)]
pub struct HeaderView {
    pub title: String,
    pub subtitle: &'static str,
    pub cta_label: &'static str,
    /// Post listing
    pub cta_link: String,
}

impl HeaderView {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            subtitle: SUBTITLE,
            cta_label: CTA_LABEL,
            cta_link: config.url_for(&config.blog.route_base_path),
        }
    }
}
