//! Reads a saved page from stdin, runs one extractor and prints JSON.
//!
//! Handy for checking a page offline:
//! `curl -s "$URL" | scrape_stdin house`

use std::io::{self, Read};

use ballot_scrape::{extractor, MunicipalData, Options};
use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, ValueEnum)]
enum Page {
    /// Congressional district page
    House,
    /// U.S. Senate election page
    Senate,
    /// State senate elections overview
    VoterInfo,
    /// County municipal elections page
    Municipal,
    /// Encyclopedia article
    Bio,
}

#[derive(Parser)]
#[command(name = "scrape_stdin", about = "Extract election data from HTML on stdin")]
struct Cli {
    /// Kind of page on stdin
    #[arg(value_enum)]
    page: Page,

    /// Pretty-print the JSON
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = Options::default();

    let mut html = String::new();
    io::stdin().read_to_string(&mut html)?;

    let value = match cli.page {
        Page::House => serde_json::to_value(extractor::house_candidates(&html, &options))?,
        Page::Senate => serde_json::to_value(extractor::senate_candidates(&html, &options))?,
        Page::VoterInfo => serde_json::to_value(extractor::voter_info(&html))?,
        Page::Municipal => serde_json::to_value(MunicipalData {
            candidates: extractor::municipal_candidates(&html),
            demographics: extractor::demographics(&html, &options),
        })?,
        Page::Bio => serde_json::to_value(extractor::biography(&html, &options))?,
    };

    let out = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{out}");
    Ok(())
}
