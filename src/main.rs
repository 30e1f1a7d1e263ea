use anyhow::Result;

use blog_content_index::cli;

fn main() -> Result<()> {
    cli::run()
}
