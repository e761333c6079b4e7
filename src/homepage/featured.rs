//! Featured posts: the first few flagged posts of the collection

use serde::Serialize;

use crate::content::PostMetadata;

/// Most posts the homepage promotes
pub const FEATURED_LIMIT: usize = 3;

pub const HEADING: &str = "Featured Articles";

/// Posts flagged `featured`, in collection order, capped at [`FEATURED_LIMIT`]
///
/// The result is lazy; clone it to walk the selection again.
pub fn select_featured<'a, I>(posts: I) -> impl Iterator<Item = &'a PostMetadata> + Clone
where
    I: IntoIterator<Item = &'a PostMetadata>,
    I::IntoIter: Clone,
{
    posts
        .into_iter()
        .filter(|post| post.is_featured())
        .take(FEATURED_LIMIT)
}

/// One promoted post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedCard {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}

impl From<&PostMetadata> for FeaturedCard {
    fn from(post: &PostMetadata) -> Self {
        Self {
            title: post.title.clone(),
            description: post.description.clone().filter(|d| !d.trim().is_empty()),
            link: post.permalink.clone(),
        }
    }
}

/// The "Featured Articles" section; never built empty
#[derive(Debug, Clone, Serialize)]
pub struct FeaturedSection {
    pub heading: &'static str,
    pub posts: Vec<FeaturedCard>,
}

impl FeaturedSection {
    /// `None` when no post is featured, so the section is left out entirely
    pub fn from_posts<'a, I>(posts: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a PostMetadata>,
        I::IntoIter: Clone,
    {
        let cards: Vec<FeaturedCard> = select_featured(posts).map(FeaturedCard::from).collect();
        if cards.is_empty() {
            return None;
        }

        Some(Self {
            heading: HEADING,
            posts: cards,
        })
    }
}
