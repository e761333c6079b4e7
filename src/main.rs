//! CLI entry point for trmx-blog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trmx_blog::commands::new::NewPost;

#[derive(Parser)]
#[command(name = "trmx-blog")]
#[command(version)]
#[command(about = "Homepage builder for the TRMX engineering blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new blog post
    New {
        /// Title of the new post
        title: String,

        /// One-line summary shown on the homepage
        #[arg(long)]
        description: Option<String>,

        /// Tags, repeatable
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Feature the post on the homepage
        #[arg(short, long)]
        featured: bool,

        /// File name (without extension) for the new post
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Generate the homepage
    #[command(alias = "g")]
    Generate,

    /// Clean the public folder
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, featured, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "trmx_blog=debug,info"
    } else {
        "trmx_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            trmx_blog::Blog::new(&target_dir)?.init()?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New {
            title,
            description,
            tags,
            featured,
            path,
        } => {
            let blog = trmx_blog::Blog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let created = blog.new_post(&NewPost {
                title,
                description,
                tags,
                featured,
                path,
            })?;
            println!("Created: {:?}", created);
        }

        Commands::Generate => {
            let blog = trmx_blog::Blog::new(&base_dir)?;
            tracing::info!("Generating homepage...");
            blog.generate()?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            let blog = trmx_blog::Blog::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let blog = trmx_blog::Blog::new(&base_dir)?;
            trmx_blog::commands::list::run(&blog, &r#type)?;
        }

        Commands::Version => {
            println!("trmx-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
