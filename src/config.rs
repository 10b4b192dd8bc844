use std::{env, path::PathBuf};

const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Runtime configuration for both binaries. Everything has a fixed default;
/// `from_env` lets a deployment override the file path, contact address and
/// request timeout without recompiling.
#[derive(Debug, Clone)]
pub struct Config {
    pub arxiv_query: String,
    pub crossref_query: String,
    pub mailto: String,
    pub min_pub_date: String,
    pub cards_file: PathBuf,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn default() -> Self {
        Config {
            arxiv_query: String::from("all:\"virtual reality\" AND all:\"interaction design\""),
            crossref_query: String::from("virtual reality interaction design"),
            mailto: String::from("noreply@example.com"),
            min_pub_date: String::from("2025-01-01"),
            cards_file: PathBuf::from("data/cards.json"),
            user_agent: String::from("VRInfoBot/1.0"),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn from_env() -> Self {
        // .env is optional; absent keys keep their defaults.
        dotenvy::dotenv().ok();
        let mut config = Self::default();
        if let Ok(path) = env::var("CARDS_FILE") {
            config.cards_file = PathBuf::from(path);
        }
        if let Ok(mailto) = env::var("CROSSREF_MAILTO") {
            config.mailto = mailto;
        }
        if let Some(secs) = get_positive_u64_from_env("HTTP_TIMEOUT_SECS") {
            config.timeout_secs = secs;
        }
        config
    }
}

fn get_positive_u64_from_env(key: &str) -> Option<u64> {
    let raw = env::var(key).ok()?;
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Some(secs),
        _ => {
            eprintln!("Ignoring {}: expected a positive integer, got {:?}", key, raw);
            None
        }
    }
}
