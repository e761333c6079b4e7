//! Post metadata and the content collection

use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;

use super::FrontMatter;

/// Metadata of one blog post, as the homepage sees it
#[derive(Debug, Clone, Serialize)]
pub struct PostMetadata {
    /// Site-relative URL path, unique per post
    pub permalink: String,

    /// Post title
    pub title: String,

    /// Short summary, `None` when the author gave none
    pub description: Option<String>,

    /// Publication date
    pub date: DateTime<Local>,

    /// Post tags
    pub tags: Vec<String>,

    /// Source file path (relative to the blog dir)
    pub source: String,

    /// Full source file path
    #[serde(skip)]
    pub full_source: PathBuf,

    /// Author-supplied front-matter
    pub front_matter: FrontMatter,
}

impl PostMetadata {
    /// Create post metadata with minimal required fields
    pub fn new(title: String, permalink: String, date: DateTime<Local>) -> Self {
        Self {
            permalink,
            title,
            description: None,
            date,
            tags: Vec::new(),
            source: String::new(),
            full_source: PathBuf::new(),
            front_matter: FrontMatter::default(),
        }
    }

    /// Whether the author flagged the post for the homepage
    pub fn is_featured(&self) -> bool {
        self.front_matter.featured
    }
}

/// The whole blog's posts, in the order the loader produced them
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContentCollection {
    posts: Vec<PostMetadata>,
}

impl ContentCollection {
    pub fn new(posts: Vec<PostMetadata>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[PostMetadata] {
        &self.posts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PostMetadata> {
        self.posts.iter()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl From<Vec<PostMetadata>> for ContentCollection {
    fn from(posts: Vec<PostMetadata>) -> Self {
        Self::new(posts)
    }
}

impl<'a> IntoIterator for &'a ContentCollection {
    type Item = &'a PostMetadata;
    type IntoIter = std::slice::Iter<'a, PostMetadata>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}
