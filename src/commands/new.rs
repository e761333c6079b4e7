//! Create a new blog post

use anyhow::Result;
use chrono::{DateTime, Local};
use indexmap::IndexMap;
use std::fs;
use std::path::PathBuf;

use crate::Blog;

/// Options for a new post
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub featured: bool,
    /// File name without extension; defaults to `YYYY-MM-DD-<slug>`
    pub path: Option<String>,
}

/// Create a post under the blog directory and return its path
pub fn create_post(blog: &Blog, options: &NewPost) -> Result<PathBuf> {
    create_post_at(blog, options, Local::now())
}

fn create_post_at(blog: &Blog, options: &NewPost, now: DateTime<Local>) -> Result<PathBuf> {
    let slug = slug::slugify(&options.title);
    if slug.is_empty() && options.path.is_none() {
        anyhow::bail!("Cannot derive a file name from title {:?}", options.title);
    }

    let filename = match &options.path {
        Some(p) => format!("{}.md", p.trim_end_matches(".md")),
        None => format!("{}-{}.md", now.format("%Y-%m-%d"), slug),
    };
    let file_path = blog.blog_dir.join(filename);

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&file_path, render_post(options, now)?)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Front-matter block plus an empty body
fn render_post(options: &NewPost, now: DateTime<Local>) -> Result<String> {
    let mut fm: IndexMap<&str, serde_yaml::Value> = IndexMap::new();
    fm.insert("title", options.title.clone().into());
    if let Some(description) = &options.description {
        fm.insert("description", description.clone().into());
    }
    fm.insert(
        "date",
        now.format("%Y-%m-%d %H:%M:%S").to_string().into(),
    );
    if !options.tags.is_empty() {
        fm.insert(
            "tags",
            serde_yaml::Value::Sequence(options.tags.iter().cloned().map(Into::into).collect()),
        );
    }
    fm.insert("featured", options.featured.into());

    let yaml = serde_yaml::to_string(&fm)?;
    Ok(format!("---\n{}---\n\n<!-- truncate -->\n", yaml))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::ContentLoader;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 9, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_create_post_round_trips_through_loader() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let options = NewPost {
            title: "Hello: World".to_string(),
            description: Some("First words".to_string()),
            tags: vec!["intro".to_string()],
            featured: true,
            path: None,
        };

        let path = create_post_at(&blog, &options, fixed_now()).unwrap();
        assert_eq!(path, blog.blog_dir.join("2025-03-09-hello-world.md"));

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        let post = &posts.posts()[0];
        assert_eq!(post.title, "Hello: World");
        assert_eq!(post.description.as_deref(), Some("First words"));
        assert_eq!(post.tags, vec!["intro"]);
        assert!(post.is_featured());
        assert_eq!(post.permalink, "/blog/2025/03/09/hello-world");
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let options = NewPost {
            title: "Twice".to_string(),
            path: Some("twice".to_string()),
            ..Default::default()
        };

        create_post_at(&blog, &options, fixed_now()).unwrap();
        assert!(create_post_at(&blog, &options, fixed_now()).is_err());
    }

    #[test]
    fn test_unsluggable_title_needs_path() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let options = NewPost {
            title: "???".to_string(),
            ..Default::default()
        };
        assert!(create_post_at(&blog, &options, fixed_now()).is_err());
    }
}
