//! Initialize a new blog site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::{Blog, CONFIG_FILE};

const DEFAULT_CONFIG: &str = r#"# Site
title: TRMX Blog
tagline: Welcome to my personal blog
favicon: img/favicon.ico

# URL
url: https://trmx-blog.vercel.app
base_url: /

# Repository
organization_name: TheRemjx01
project_name: trmx-blog

on_broken_links: throw
on_broken_markdown_links: warn

markdown:
  mermaid: true

i18n:
  default_locale: en
  locales: [en]

# Directory
source_dir: .
public_dir: build

blog:
  path: blog
  route_base_path: blog
  show_reading_time: true
  feed_options:
    types: [rss, atom]
    xslt: true
  blog_sidebar_title: All posts
  blog_sidebar_count: ALL
  edit_url: https://github.com/TheRemjx01/trmx-blog/tree/main

theme_config:
  image: img/docusaurus-social-card.jpg
  navbar:
    title: TRMX Blog
    logo:
      alt: TRMX Blog Logo
      src: img/logo.svg
    items:
      - label: Blog
        to: /blog
        position: left
      - label: GitHub
        href: https://github.com/TheRemjx01/trmx-blog
        position: right
  footer:
    style: dark
    copyright: "Copyright © {year} TRMX Blog."
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{:?} already exists, refusing to overwrite", config_path);
    }

    fs::create_dir_all(target_dir.join("blog"))?;
    fs::write(&config_path, DEFAULT_CONFIG)?;

    let welcome = r#"---
title: Welcome
description: What this blog is about and what to expect from it.
tags: [meta]
featured: true
---

Engineering best practices, architecture patterns and stories from real projects.

<!-- truncate -->
"#;
    fs::write(target_dir.join("blog/2024-01-01-welcome.md"), welcome)?;

    tracing::info!("Initialized site in {:?}", target_dir);
    Ok(())
}

/// Run the init command with an existing site
pub fn run(blog: &Blog) -> Result<()> {
    init_site(&blog.base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SidebarCount;
    use crate::content::loader::ContentLoader;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_loadable_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.title, "TRMX Blog");
        assert!(blog.config.markdown.mermaid);
        assert_eq!(blog.config.blog.blog_sidebar_count, SidebarCount::All);
        assert_eq!(blog.config.theme_config.navbar.items.len(), 2);

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert!(posts.posts()[0].is_featured());
        assert_eq!(posts.posts()[0].permalink, "/blog/2024/01/01/welcome");
    }

    #[test]
    fn test_blog_init_scaffolds_missing_folder() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("new-site");

        Blog::new(&target).unwrap().init().unwrap();
        assert!(target.join(CONFIG_FILE).exists());

        let blog = Blog::new(&target).unwrap();
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert!(Blog::new(&target).unwrap().init().is_err());
    }

    #[test]
    fn test_init_refuses_existing_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
