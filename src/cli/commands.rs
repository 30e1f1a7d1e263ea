use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use crate::service::ContentService;
use crate::utils::{cache_ttl, content_root};

#[derive(Parser)]
#[command(name = "blog-content-index")]
#[command(version = "0.1.0")]
#[command(about = "Index and inspect a dated blog content tree", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show statistics about the content tree
    Stats,
    /// Print the full index as JSON
    List,
    /// Print one post as JSON
    Show {
        /// Post id relative to the content root, e.g. 2026/February/10/hello
        id: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Stats) => show_stats()?,
        Some(Commands::List) => list_index()?,
        Some(Commands::Show { id }) => show_post(id)?,
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn service() -> Result<ContentService> {
    Ok(ContentService::new(content_root(), cache_ttl()?))
}

fn show_stats() -> Result<()> {
    let service = service()?;
    let index = service.index();

    println!("Blog Content Statistics");
    println!("=======================");
    println!("Posts: {}", index.posts.len());
    println!("Distinct tags: {}", index.tags.len());
    println!();
    println!("Content root: {}", service.root().display());

    if let Some(newest) = index.posts.first() {
        println!("Newest date bucket: {}", newest.date_path);
    }
    if let Some(oldest) = index.posts.last() {
        println!("Oldest date bucket: {}", oldest.date_path);
    }
    if let Some(modified) = service.fingerprint().as_datetime() {
        println!("Content last modified: {}", modified.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}

fn list_index() -> Result<()> {
    let service = service()?;
    let index = service.index();
    println!("{}", serde_json::to_string_pretty(index.as_ref())?);
    Ok(())
}

fn show_post(id: &str) -> Result<()> {
    let service = service()?;
    match service.post(id) {
        Some(post) => {
            println!("{}", serde_json::to_string_pretty(&post)?);
            Ok(())
        }
        None => bail!("Post not found: {}", id),
    }
}
