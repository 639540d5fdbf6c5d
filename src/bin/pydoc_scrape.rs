// src/bin/pydoc_scrape.rs
use pydoc_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
