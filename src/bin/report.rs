use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;

use vrcards::{config::Config, report, store::CardStore};

/// Render the stored VR interaction research cards as a Markdown report.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Range start (ISO-8601); defaults to Jan 1 of the current year.
    #[arg(long)]
    start: Option<NaiveDate>,
    /// Range end (ISO-8601); defaults to today's local date.
    #[arg(long)]
    end: Option<NaiveDate>,
    /// Topic used for the search entry-point links.
    #[arg(long, default_value = "virtual reality interaction design")]
    topic: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    let today = Local::now().date_naive();
    let start = cli
        .start
        .map(|date| date.to_string())
        .unwrap_or_else(|| format!("{}-01-01", today.year()));
    let end = cli.end.unwrap_or(today).to_string();

    let cards = CardStore::new(&config.cards_file).load()?;
    print!("{}", report::render(&cards, &cli.topic, &start, &end));
    Ok(())
}
