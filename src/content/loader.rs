//! Content loader - builds the post collection from the blog directory

use anyhow::Result;
use chrono::{DateTime, Local};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::frontmatter::parse_date_string;
use super::{markdown, ContentCollection, FrontMatter, PostMetadata};
use crate::Blog;

lazy_static! {
    /// `2024-01-15-some-name`
    static ref DATE_PREFIX: Regex =
        Regex::new(r"^(\d{4})-(\d{2})-(\d{2})-(.+)$").expect("valid date prefix regex");
}

/// Loads post metadata from the blog directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Load every published post, newest first
    pub fn load_posts(&self) -> Result<ContentCollection> {
        let blog_dir = &self.blog.blog_dir;
        if !blog_dir.exists() {
            tracing::warn!("Blog directory {:?} does not exist", blog_dir);
            return Ok(ContentCollection::default());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(blog_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) || is_hidden(path, blog_dir) {
                continue;
            }

            match self.load_post(path) {
                Ok(Some(post)) => posts.push(post),
                Ok(None) => tracing::debug!("Skipping draft {:?}", path),
                Err(e) => tracing::warn!("Failed to load post {:?}: {}", path, e),
            }
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.source.cmp(&b.source)));

        let mut seen = HashSet::new();
        posts.retain(|post| {
            let fresh = seen.insert(post.permalink.clone());
            if !fresh {
                tracing::warn!(
                    "Duplicate permalink {} from {}, keeping the first",
                    post.permalink,
                    post.source
                );
            }
            fresh
        });

        Ok(ContentCollection::new(posts))
    }

    /// Load a single post; `None` for drafts
    fn load_post(&self, path: &Path) -> Result<Option<PostMetadata>> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        if fm.draft {
            return Ok(None);
        }

        let source = path
            .strip_prefix(&self.blog.blog_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        let name = post_name(&source);

        // `2024-13-45-x` is not a date prefix; it stays part of the name
        let prefix = DATE_PREFIX.captures(&name).and_then(|c| {
            parse_date_string(&format!("{}-{}-{}", &c[1], &c[2], &c[3])).map(|date| (c, date))
        });

        let date = fm
            .parse_date()
            .or_else(|| prefix.as_ref().map(|(_, date)| *date))
            .unwrap_or_else(|| file_modified(path).unwrap_or_else(Local::now));

        let slug = match (&fm.slug, &prefix) {
            (Some(slug), _) => slug.trim_matches('/').to_string(),
            (None, Some((c, _))) => format!("{}/{}/{}/{}", &c[1], &c[2], &c[3], &c[4]),
            (None, None) => name.clone(),
        };

        let permalink = self.blog.config.url_for(&format!(
            "{}/{}",
            self.blog.config.blog.route_base_path.trim_matches('/'),
            slug
        ));

        let title = fm
            .title
            .clone()
            .or_else(|| markdown::first_heading(body))
            .unwrap_or_else(|| name.clone());

        let mut post = PostMetadata::new(title, permalink, date);
        post.description = fm
            .description
            .clone()
            .or_else(|| markdown::excerpt_description(body));
        post.tags = fm.tags.clone();
        post.source = source;
        post.full_source = path.to_path_buf();
        post.front_matter = fm;

        Ok(Some(post))
    }
}

/// File stem, or the folder name for `folder/index.md`
fn post_name(source: &str) -> String {
    let path = Path::new(source);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled");

    if stem == "index" {
        if let Some(parent) = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
        {
            return parent.to_string();
        }
    }
    stem.to_string()
}

fn file_modified(path: &Path) -> Option<DateTime<Local>> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Local>::from)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e, "md" | "mdx" | "markdown"))
        .unwrap_or(false)
}

/// `_partial.md` files and anything under `_dir/` are not posts
fn is_hidden(path: &Path, root: &Path) -> bool {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .any(|c| c.as_os_str().to_str().is_some_and(|s| s.starts_with('_')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn load(dir: &TempDir) -> ContentCollection {
        let blog = Blog::new(dir.path()).unwrap();
        ContentLoader::new(&blog).load_posts().unwrap()
    }

    #[test]
    fn test_missing_blog_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load(&dir).is_empty());
    }

    #[test]
    fn test_load_posts_newest_first() {
        let dir = TempDir::new().unwrap();
        let blog = dir.path().join("blog");
        write(
            &blog,
            "2024-01-15-first.md",
            "---\ntitle: First\nfeatured: true\n---\n",
        );
        write(
            &blog,
            "second.md",
            "---\ntitle: Second\ndate: 2024-03-01\ndescription: Two\n---\nbody text",
        );
        write(&blog, "draft.md", "---\ntitle: Draft\ndate: 2025-01-01\ndraft: true\n---\n");
        write(&blog, "_partial.md", "---\ntitle: Partial\n---\n");
        write(&blog, "notes.txt", "not a post");

        let posts = load(&dir);
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);

        let first = &posts.posts()[1];
        assert_eq!(first.permalink, "/blog/2024/01/15/first");
        assert_eq!(first.date.format("%Y-%m-%d").to_string(), "2024-01-15");
        assert!(first.is_featured());
        assert_eq!(first.description, None);

        let second = &posts.posts()[0];
        assert_eq!(second.permalink, "/blog/second");
        assert_eq!(second.description.as_deref(), Some("Two"));
        assert!(!second.is_featured());
    }

    #[test]
    fn test_title_and_slug_fallbacks() {
        let dir = TempDir::new().unwrap();
        let blog = dir.path().join("blog");
        write(
            &blog,
            "2023-05-30-folder-post/index.md",
            "---\ndate: 2023-05-30\n---\n# Heading Title\n\nText",
        );
        write(&blog, "plain.mdx", "---\ndate: 2023-01-01\nslug: /custom/\n---\nNo heading");

        let posts = load(&dir);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts.posts()[0].title, "Heading Title");
        assert_eq!(posts.posts()[0].permalink, "/blog/2023/05/30/folder-post");
        assert_eq!(posts.posts()[1].title, "plain");
        assert_eq!(posts.posts()[1].permalink, "/blog/custom");
    }

    #[test]
    fn test_duplicate_permalinks_keep_first() {
        let dir = TempDir::new().unwrap();
        let blog = dir.path().join("blog");
        write(&blog, "a.md", "---\ntitle: A\ndate: 2024-01-02\nslug: same\n---\n");
        write(&blog, "b.md", "---\ntitle: B\ndate: 2024-01-01\nslug: same\n---\n");

        let posts = load(&dir);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts.posts()[0].title, "A");
    }

    #[test]
    fn test_description_falls_back_to_excerpt() {
        let dir = TempDir::new().unwrap();
        let blog = dir.path().join("blog");
        write(
            &blog,
            "2024-02-01-excerpt.md",
            "---\ntitle: Excerpt\n---\n# Excerpt\n\nOpening *line* of the post.\n\n<!-- truncate -->\n\nRest.",
        );
        write(
            &blog,
            "2024-01-01-folded.md",
            "---\ntitle: Folded\n---\n<!-- truncate -->\n\nOnly after the fold.",
        );

        let posts = load(&dir);
        assert_eq!(
            posts.posts()[0].description.as_deref(),
            Some("Opening line of the post.")
        );
        assert_eq!(posts.posts()[1].description, None);
    }

    #[test]
    fn test_broken_front_matter_still_listed() {
        let dir = TempDir::new().unwrap();
        let blog = dir.path().join("blog");
        write(&blog, "a.md", ";;;\n{\"title\": \"A\", }\n;;;\nbody");
        write(&blog, "b.mdx", "{/* lead */}\n\n# Braced Body\n\ntext");
        write(&blog, "c.md", "---\ntitle: [unclosed\nfeatured: true\n---\nbody");

        let posts = load(&dir);
        assert_eq!(posts.len(), 3);

        let by_source = |source: &str| {
            posts
                .iter()
                .find(|p| p.source == source)
                .unwrap_or_else(|| panic!("{} not loaded", source))
        };
        assert_eq!(by_source("a.md").title, "a");
        assert_eq!(by_source("b.mdx").title, "Braced Body");
        assert_eq!(by_source("b.mdx").description.as_deref(), Some("text"));
        assert_eq!(by_source("c.md").title, "c");
        assert!(posts.iter().all(|p| !p.is_featured()));
    }

    #[test]
    fn test_invalid_date_prefix_is_plain_name() {
        let dir = TempDir::new().unwrap();
        let blog = dir.path().join("blog");
        write(&blog, "2024-13-45-x.md", "---\ntitle: X\ndate: 2024-01-01\n---\n");

        let posts = load(&dir);
        assert_eq!(posts.posts()[0].permalink, "/blog/2024-13-45-x");
    }

    #[test]
    fn test_post_name() {
        assert_eq!(post_name("2024-01-01-x/index.md"), "2024-01-01-x");
        assert_eq!(post_name("hello.md"), "hello");
        assert_eq!(post_name("index.md"), "index");
    }
}
