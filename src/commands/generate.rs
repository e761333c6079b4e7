//! Generate the homepage

use anyhow::Result;
use std::path::PathBuf;

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::homepage::select_featured;
use crate::Blog;

/// Load the posts and write the homepage
pub fn run(blog: &Blog) -> Result<()> {
    generate(blog).map(|_| ())
}

/// Same as [`run`], returning the written file
pub fn generate(blog: &Blog) -> Result<PathBuf> {
    let start = std::time::Instant::now();

    let loader = ContentLoader::new(blog);
    let posts = loader.load_posts()?;
    let featured = select_featured(&posts).count();
    tracing::info!("Loaded {} posts ({} featured)", posts.len(), featured);

    let generator = Generator::new(blog)?;
    let output = generator.generate(&posts)?;

    let duration = start.elapsed();
    tracing::info!("Generated {:?} in {:.2}s", output, duration.as_secs_f64());

    Ok(output)
}
