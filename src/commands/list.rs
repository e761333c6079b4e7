//! List site content

use anyhow::Result;
use std::collections::HashMap;

use crate::content::loader::ContentLoader;
use crate::homepage::select_featured;
use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let posts = ContentLoader::new(blog).load_posts()?;

    match content_type {
        "post" | "posts" => {
            println!("Posts ({}):", posts.len());
            for post in &posts {
                println!(
                    "  {} - {}{} [{}]",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    if post.is_featured() { " *" } else { "" },
                    post.source
                );
            }
        }
        "featured" => {
            let featured: Vec<_> = select_featured(&posts).collect();
            println!("Featured on the homepage ({}):", featured.len());
            for post in featured {
                println!("  {} -> {}", post.title, post.permalink);
            }
        }
        "tag" | "tags" => {
            let mut tags: HashMap<&str, usize> = HashMap::new();
            for post in &posts {
                for tag in &post.tags {
                    *tags.entry(tag.as_str()).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, featured, tag",
                content_type
            );
        }
    }

    Ok(())
}
