//! Content module - post metadata and the collection the homepage reads

mod frontmatter;
pub mod loader;
pub mod markdown;
mod post;

pub use frontmatter::FrontMatter;
pub use post::{ContentCollection, PostMetadata};
