mod classify;
mod confirm;
mod enrich;
mod fetch;
mod model;
mod parser;
mod search;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::confirm::TerminalChooser;
use crate::fetch::{HtmlSource, HttpSource};
use crate::model::Platform;
use crate::search::{GoogleSearch, SearchSettings};

const DEFAULT_MEMBER_FILE: &str = "data/dpr_members.json";

#[derive(Parser)]
#[command(name = "dpr_scraper", about = "DPR RI member directory scraper with social enrichment")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the member listing page and extract records to JSON
    Scrape {
        /// Listing page URL
        #[arg(long, default_value = parser::BASE_URL)]
        url: String,
        /// Parse a saved HTML file instead of fetching
        #[arg(long)]
        from_file: Option<PathBuf>,
        /// Output JSON file
        #[arg(short, long, default_value = DEFAULT_MEMBER_FILE)]
        out: PathBuf,
    },
    /// Find social profiles per member via search, confirming interactively
    Socials {
        /// Member JSON file to enrich in place
        #[arg(short, long, default_value = DEFAULT_MEMBER_FILE)]
        file: PathBuf,
    },
    /// Show extraction and social coverage statistics
    Stats {
        /// Member JSON file
        #[arg(short, long, default_value = DEFAULT_MEMBER_FILE)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape { url, from_file, out } => {
            let markup = match from_file {
                Some(path) => std::fs::read_to_string(&path)?,
                None => HttpSource::new()?.fetch(&url).await?,
            };
            let members = parser::extract_members(&markup);
            if members.is_empty() {
                println!("No member data found or extracted, skipping save.");
                return Ok(());
            }
            store::save(&out, &members)?;
            println!("Saved {} members to {}", members.len(), out.display());
            Ok(())
        }
        Commands::Socials { file } => {
            let settings = SearchSettings::from_env()?;
            let search = GoogleSearch::new(settings)?;
            let mut members = store::load(&file)?;
            println!(
                "Loaded {} members. Progress saves to {}",
                members.len(),
                file.display()
            );

            let mut chooser = TerminalChooser;
            enrich::enrich_members(
                &mut members,
                &search,
                &mut chooser,
                &file,
                enrich::SEARCH_DELAY,
            )
            .await?;

            println!("Finished processing all members.");
            Ok(())
        }
        Commands::Stats { file } => {
            let members = store::load(&file)?;
            println!("Members:   {}", members.len());

            let unmapped = members.iter().filter(|m| m.faction.is_none()).count();
            println!("No faction: {}", unmapped);

            println!("\nSocial coverage (confirmed / skipped):");
            for platform in Platform::ALL {
                let confirmed = members.iter().filter(|m| m.has_social(platform)).count();
                let skipped = members
                    .iter()
                    .filter(|m| matches!(m.socials.get(&platform), Some(None)))
                    .count();
                println!("  {:<10} {:>4} / {}", platform.name(), confirmed, skipped);
            }
            Ok(())
        }
    }
}
