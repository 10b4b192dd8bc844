use quick_xml::de::from_str;
use reqwest::Client;
use serde::Deserialize;
use url::form_urlencoded;

use crate::{
    config::Config,
    error::FetchError,
    model::{Paper, Source},
};

const ARXIV_API: &str = "https://export.arxiv.org/api/query";

// The API is asked for a few extra entries so that date/link filtering still
// leaves enough survivors.
const MAX_RESULTS_REQUESTED: u32 = 5;
const MAX_RESULTS_KEPT: usize = 2;

/// Fetches recently submitted papers from the arXiv Atom search API.
#[derive(Debug)]
pub struct ArxivFetcher {
    query: String,
    min_pub_date: String,
}

impl ArxivFetcher {
    pub fn from_config(config: &Config) -> Self {
        ArxivFetcher {
            query: config.arxiv_query.clone(),
            min_pub_date: config.min_pub_date.clone(),
        }
    }

    fn create_query_url(&self) -> String {
        let params = form_urlencoded::Serializer::new(String::new())
            .append_pair("search_query", &self.query)
            .append_pair("start", "0")
            .append_pair("max_results", &MAX_RESULTS_REQUESTED.to_string())
            .append_pair("sortBy", "submittedDate")
            .append_pair("sortOrder", "descending")
            .finish();
        format!("{}?{}", ARXIV_API, params)
    }

    /// Most recent qualifying papers, newest first, at most 2.
    pub async fn fetch(&self, client: &Client) -> Result<Vec<Paper>, FetchError> {
        let url = self.create_query_url();
        let xml = client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_feed(&xml, &self.min_pub_date)
    }
}

/// Extracts papers from an Atom feed body. An entry survives only with a
/// non-empty title, an abstract-page link and a publication date on or after
/// `min_pub_date`.
fn parse_feed(xml: &str, min_pub_date: &str) -> Result<Vec<Paper>, FetchError> {
    let feed: AtomFeed = from_str(xml)?;
    let mut papers = Vec::new();
    for entry in feed.entries {
        let title = normalize_whitespace(&entry.title);
        let link = entry
            .links
            .into_iter()
            .find(|link| link.href.contains("abs"))
            .map(|link| link.href)
            .unwrap_or_default();
        let published: String = entry.published.chars().take(10).collect();
        // ISO dates compare correctly as strings.
        if title.is_empty() || link.is_empty() || published.as_str() < min_pub_date {
            continue;
        }
        papers.push(Paper::new(title, Source::Arxiv, link, published));
        if papers.len() == MAX_RESULTS_KEPT {
            break;
        }
    }
    Ok(papers)
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Raw Atom feed model. Everything defaults so a sparse entry deserializes
// instead of failing the whole feed.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AtomFeed {
    #[serde(rename = "entry")]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AtomEntry {
    title: String,
    published: String,
    #[serde(rename = "link")]
    links: Vec<AtomLink>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AtomLink {
    #[serde(rename = "@href")]
    href: String,
}
