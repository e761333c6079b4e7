//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub tagline: String,
    pub favicon: String,

    // URL
    pub url: String,
    pub base_url: String,

    // Repository
    pub organization_name: String,
    pub project_name: String,

    // Build policy (enforced by the external build)
    pub on_broken_links: LinkPolicy,
    pub on_broken_markdown_links: LinkPolicy,

    #[serde(default)]
    pub markdown: MarkdownConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub head_tags: Vec<HeadTag>,

    // Content
    pub source_dir: String,
    pub public_dir: String,
    #[serde(default)]
    pub blog: BlogConfig,

    // Theme
    #[serde(default)]
    pub theme_config: ThemeConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "TRMX Blog".to_string(),
            tagline: "Welcome to my personal blog".to_string(),
            favicon: "img/favicon.ico".to_string(),

            url: "https://trmx-blog.vercel.app".to_string(),
            base_url: "/".to_string(),

            organization_name: "TheRemjx01".to_string(),
            project_name: "trmx-blog".to_string(),

            on_broken_links: LinkPolicy::Throw,
            on_broken_markdown_links: LinkPolicy::Warn,

            markdown: MarkdownConfig::default(),
            i18n: I18nConfig::default(),
            head_tags: default_head_tags(),

            source_dir: ".".to_string(),
            public_dir: "build".to_string(),
            blog: BlogConfig::default(),

            theme_config: ThemeConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve a site-relative path against `base_url`
    pub fn url_for(&self, path: &str) -> String {
        crate::helpers::url_for(&self.base_url, path)
    }
}

/// What the build does when it meets a broken link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPolicy {
    Ignore,
    Log,
    Warn,
    Throw,
}

/// Markdown feature switches
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub mermaid: bool,
}

/// Locale configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    pub default_locale: String,
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            locales: vec!["en".to_string()],
        }
    }
}

/// Extra tag injected into every page's `<head>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadTag {
    pub tag_name: String,
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
}

fn default_head_tags() -> Vec<HeadTag> {
    let link = |attrs: &[(&str, &str)]| HeadTag {
        tag_name: "link".to_string(),
        attributes: attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    };

    vec![
        link(&[("rel", "preconnect"), ("href", "https://fonts.googleapis.com")]),
        link(&[
            ("rel", "preconnect"),
            ("href", "https://fonts.gstatic.com"),
            ("crossorigin", "anonymous"),
        ]),
        link(&[
            ("rel", "stylesheet"),
            (
                "href",
                "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap",
            ),
        ]),
    ]
}

/// Blog content options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Directory holding posts, relative to `source_dir`
    pub path: String,
    /// URL prefix of the post listing and every post
    pub route_base_path: String,
    pub show_reading_time: bool,
    #[serde(default)]
    pub feed_options: FeedOptions,
    pub blog_sidebar_title: String,
    pub blog_sidebar_count: SidebarCount,
    pub edit_url: Option<String>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            path: "blog".to_string(),
            route_base_path: "blog".to_string(),
            show_reading_time: true,
            feed_options: FeedOptions::default(),
            blog_sidebar_title: "All posts".to_string(),
            blog_sidebar_count: SidebarCount::All,
            edit_url: Some("https://github.com/TheRemjx01/trmx-blog/tree/main".to_string()),
        }
    }
}

/// Either every post or a fixed number of them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarCount {
    All,
    Count(usize),
}

impl Serialize for SidebarCount {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            SidebarCount::All => s.serialize_str("ALL"),
            SidebarCount::Count(n) => s.serialize_u64(*n as u64),
        }
    }
}

impl<'de> Deserialize<'de> for SidebarCount {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(usize),
            Keyword(String),
        }

        match Raw::deserialize(d)? {
            Raw::Count(n) => Ok(SidebarCount::Count(n)),
            Raw::Keyword(k) if k.eq_ignore_ascii_case("all") => Ok(SidebarCount::All),
            Raw::Keyword(k) => Err(serde::de::Error::custom(format!(
                "expected a number or \"ALL\", got {:?}",
                k
            ))),
        }
    }
}

/// Feed generation options (feeds are produced externally)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedOptions {
    pub types: Vec<String>,
    pub xslt: bool,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            types: vec!["rss".to_string(), "atom".to_string()],
            xslt: true,
        }
    }
}

/// Theme configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Social card image
    pub image: String,
    #[serde(default)]
    pub navbar: NavbarConfig,
    #[serde(default)]
    pub footer: FooterConfig,
    #[serde(default)]
    pub prism: PrismConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            image: "img/docusaurus-social-card.jpg".to_string(),
            navbar: NavbarConfig::default(),
            footer: FooterConfig::default(),
            prism: PrismConfig::default(),
        }
    }
}

/// Navigation bar
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub title: String,
    pub logo: Option<LogoConfig>,
    pub items: Vec<NavItem>,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            title: "TRMX Blog".to_string(),
            logo: Some(LogoConfig {
                alt: "TRMX Blog Logo".to_string(),
                src: "img/logo.svg".to_string(),
            }),
            items: vec![
                NavItem {
                    label: "Blog".to_string(),
                    to: Some("/blog".to_string()),
                    href: None,
                    position: NavPosition::Left,
                },
                NavItem {
                    label: "GitHub".to_string(),
                    to: None,
                    href: Some("https://github.com/TheRemjx01/trmx-blog".to_string()),
                    position: NavPosition::Right,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoConfig {
    pub alt: String,
    pub src: String,
}

/// A navbar entry: `to` for internal routes, `href` for external links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub position: NavPosition,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

/// Footer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub style: String,
    pub links: Vec<FooterLinkGroup>,
    pub copyright: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            style: "dark".to_string(),
            links: vec![
                FooterLinkGroup {
                    title: "Content".to_string(),
                    items: vec![NavItem {
                        label: "Blog".to_string(),
                        to: Some("/blog".to_string()),
                        href: None,
                        position: NavPosition::Left,
                    }],
                },
                FooterLinkGroup {
                    title: "Social".to_string(),
                    items: vec![NavItem {
                        label: "GitHub".to_string(),
                        to: None,
                        href: Some("https://github.com/TheRemjx01".to_string()),
                        position: NavPosition::Left,
                    }],
                },
            ],
            copyright: "Copyright © {year} TRMX Blog.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterLinkGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<NavItem>,
}

/// Code block highlighting options for the external renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismConfig {
    pub theme: String,
    pub dark_theme: String,
    pub additional_languages: Vec<String>,
    pub magic_comments: Vec<MagicComment>,
}

impl Default for PrismConfig {
    fn default() -> Self {
        let languages = [
            "java", "kotlin", "scala", "ruby", "python", "go", "rust", "dart", "yaml", "json",
            "graphql", "markup", "markdown", "bash", "diff", "sql", "mongodb", "docker", "nginx",
            "apacheconf", "regex", "hcl", "typescript", "javascript", "css", "scss", "jsx", "tsx",
        ];

        Self {
            theme: "github".to_string(),
            dark_theme: "dracula".to_string(),
            additional_languages: languages.iter().map(|l| l.to_string()).collect(),
            magic_comments: vec![
                MagicComment::new("theme-code-block-highlighted-line", "highlight"),
                MagicComment::new("code-block-error-line", "error"),
            ],
        }
    }
}

/// Comment directive that highlights lines in a code block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagicComment {
    pub class_name: String,
    pub line: String,
    pub block_start: String,
    pub block_end: String,
}

impl MagicComment {
    fn new(class_name: &str, prefix: &str) -> Self {
        Self {
            class_name: class_name.to_string(),
            line: format!("{}-next-line", prefix),
            block_start: format!("{}-start", prefix),
            block_end: format!("{}-end", prefix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "TRMX Blog");
        assert_eq!(config.base_url, "/");
        assert_eq!(config.blog.path, "blog");
        assert_eq!(config.on_broken_links, LinkPolicy::Throw);
        assert_eq!(config.head_tags.len(), 3);
        assert_eq!(config.theme_config.prism.magic_comments[1].line, "error-next-line");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
base_url: /site/
on_broken_links: warn
blog:
  route_base_path: posts
  blog_sidebar_count: 5
head_tags:
  - tag_name: meta
    attributes:
      name: robots
      content: noindex
github_username: someone
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.base_url, "/site/");
        assert_eq!(config.on_broken_links, LinkPolicy::Warn);
        assert_eq!(config.blog.route_base_path, "posts");
        assert_eq!(config.blog.blog_sidebar_count, SidebarCount::Count(5));
        // Unset nested fields keep their defaults
        assert_eq!(config.blog.path, "blog");
        assert_eq!(config.head_tags.len(), 1);
        assert_eq!(config.head_tags[0].attributes["name"], "robots");
        assert!(config.extra.contains_key("github_username"));
    }

    #[test]
    fn test_sidebar_count_all() {
        let blog: BlogConfig = serde_yaml::from_str("blog_sidebar_count: ALL").unwrap();
        assert_eq!(blog.blog_sidebar_count, SidebarCount::All);
        assert!(serde_yaml::from_str::<BlogConfig>("blog_sidebar_count: some").is_err());
    }

    #[test]
    fn test_url_for() {
        let mut config = SiteConfig::default();
        config.base_url = "/site/".to_string();
        assert_eq!(config.url_for("/blog"), "/site/blog");
    }
}
