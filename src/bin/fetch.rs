use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;

use vrcards::{card::CardBuilder, config::Config, store::CardStore};

/// Fetch recent VR interaction design papers and update the daily card file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Card date (ISO-8601); defaults to today's local date.
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    let date = cli
        .date
        .unwrap_or_else(|| Local::now().date_naive())
        .to_string();

    let builder = CardBuilder::from_config(&config)?;
    let card = builder.build_card(&date).await?;

    let store = CardStore::new(&config.cards_file);
    store.upsert(card)?;
    println!("Updated {} with card for {}", store.path().display(), date);
    Ok(())
}
