use reqwest::Client;
use serde::Deserialize;
use url::form_urlencoded;

use crate::{
    config::Config,
    error::FetchError,
    model::{Paper, Source},
};

const CROSSREF_API: &str = "https://api.crossref.org/works";

const ROWS_REQUESTED: u32 = 20;
// One paper per publisher per run; the server sort already puts the most
// recent first.
const MAX_MATCHES: usize = 1;

/// Lowercase keyword used to pick a publisher out of Crossref results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublisherHint {
    Acm,
    Ieee,
}

impl PublisherHint {
    pub fn keyword(&self) -> &'static str {
        match self {
            PublisherHint::Acm => "acm",
            PublisherHint::Ieee => "ieee",
        }
    }

    pub fn source(&self) -> Source {
        match self {
            PublisherHint::Acm => Source::Acm,
            PublisherHint::Ieee => Source::Ieee,
        }
    }
}

/// Fetches recent works from the Crossref REST API, narrowed to a single
/// publisher by keyword.
#[derive(Debug)]
pub struct CrossrefFetcher {
    query: String,
    mailto: String,
    min_pub_date: String,
}

impl CrossrefFetcher {
    pub fn from_config(config: &Config) -> Self {
        CrossrefFetcher {
            query: config.crossref_query.clone(),
            mailto: config.mailto.clone(),
            min_pub_date: config.min_pub_date.clone(),
        }
    }

    fn create_query_url(&self) -> String {
        let params = form_urlencoded::Serializer::new(String::new())
            .append_pair("query.bibliographic", &self.query)
            .append_pair("rows", &ROWS_REQUESTED.to_string())
            .append_pair("sort", "published")
            .append_pair("order", "desc")
            .append_pair("filter", &format!("from-pub-date:{}", self.min_pub_date))
            .append_pair("mailto", &self.mailto)
            .finish();
        format!("{}?{}", CROSSREF_API, params)
    }

    /// The single most recent qualifying work for `hint`, or an empty list.
    pub async fn fetch(&self, client: &Client, hint: PublisherHint) -> Result<Vec<Paper>, FetchError> {
        let url = self.create_query_url();
        let body = client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let response: WorksResponse = serde_json::from_str(&body)?;
        Ok(filter_items(response.message.items, hint))
    }
}

/// Keeps items whose publisher or container title mentions the hint keyword,
/// with a usable title and DOI. Stops after the first match.
fn filter_items(items: Vec<WorkItem>, hint: PublisherHint) -> Vec<Paper> {
    let keyword = hint.keyword();
    let mut papers = Vec::new();
    for item in items {
        let publisher = item.publisher.to_lowercase();
        let container = item.container_title.join(" ").to_lowercase();
        if !publisher.contains(keyword) && !container.contains(keyword) {
            continue;
        }
        let title = match item.title.into_iter().next() {
            Some(title) => title,
            None => continue,
        };
        if item.doi.is_empty() {
            continue;
        }
        let published = format_date(item.published_print.or(item.published_online));
        papers.push(Paper::new(
            title,
            hint.source(),
            format!("https://doi.org/{}", item.doi),
            published,
        ));
        if papers.len() >= MAX_MATCHES {
            break;
        }
    }
    papers
}

/// `YYYY-MM-DD` from Crossref date parts. Month and day default to 01; no
/// year at all yields an empty string.
fn format_date(date: Option<PartialDate>) -> String {
    let parts = date
        .and_then(|d| d.date_parts.into_iter().next())
        .unwrap_or_default();
    let year = match parts.first().copied().flatten() {
        Some(year) => year,
        None => return String::new(),
    };
    let month = parts.get(1).copied().flatten().unwrap_or(1);
    let day = parts.get(2).copied().flatten().unwrap_or(1);
    format!("{}-{:02}-{:02}", year, month, day)
}

// Raw Crossref response model, defaulted field by field so sparse items
// deserialize cleanly.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WorksResponse {
    message: WorksMessage,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WorksMessage {
    items: Vec<WorkItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WorkItem {
    publisher: String,
    #[serde(rename = "container-title")]
    container_title: Vec<String>,
    title: Vec<String>,
    #[serde(rename = "DOI")]
    doi: String,
    #[serde(rename = "published-print")]
    published_print: Option<PartialDate>,
    #[serde(rename = "published-online")]
    published_online: Option<PartialDate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialDate {
    #[serde(rename = "date-parts")]
    date_parts: Vec<Vec<Option<i32>>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn items(value: serde_json::Value) -> Vec<WorkItem> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_url_generation() {
        let url = CrossrefFetcher::from_config(&Config::default()).create_query_url();
        assert_eq!(
            url,
            concat!(
                "https://api.crossref.org/works",
                "?query.bibliographic=virtual+reality+interaction+design",
                "&rows=20&sort=published&order=desc",
                "&filter=from-pub-date%3A2025-01-01",
                "&mailto=noreply%40example.com"
            )
        );
    }

    #[test]
    fn test_publisher_keyword_filter() {
        let items = items(json!([
            {
                "publisher": "Other Press",
                "container-title": ["Journal of Elsewhere"],
                "title": ["Not ours"],
                "DOI": "10.9999/other",
                "published-print": {"date-parts": [[2025, 5, 2]]}
            },
            {
                "publisher": "Association for Computing Machinery (ACM)",
                "title": ["Haptic Feedback in Shared VR"],
                "DOI": "10.1145/3544548",
                "published-online": {"date-parts": [[2025, 4]]}
            }
        ]));
        let papers = filter_items(items, PublisherHint::Acm);
        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].title, "Haptic Feedback in Shared VR");
        assert_eq!(papers[0].source, Source::Acm);
        assert_eq!(papers[0].url, "https://doi.org/10.1145/3544548");
        assert_eq!(papers[0].published, "2025-04-01");
    }

    #[test]
    fn test_container_title_matches_too() {
        let items = items(json!([
            {
                "publisher": "Institute of Electrical and Electronics Engineers",
                "container-title": ["IEEE Transactions on Visualization and Computer Graphics"],
                "title": ["Gaze-Assisted Selection"],
                "DOI": "10.1109/tvcg.2025.1",
                "published-print": {"date-parts": [[2025]]}
            }
        ]));
        let papers = filter_items(items, PublisherHint::Ieee);
        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].source, Source::Ieee);
        // month and day default to 01
        assert_eq!(papers[0].published, "2025-01-01");
    }

    #[test]
    fn test_missing_doi_or_title_is_skipped() {
        let items = items(json!([
            {
                "publisher": "ACM",
                "title": ["No DOI here"],
                "DOI": ""
            },
            {
                "publisher": "ACM",
                "title": [],
                "DOI": "10.1145/titleless"
            }
        ]));
        assert!(filter_items(items, PublisherHint::Acm).is_empty());
    }

    #[test]
    fn test_stops_after_first_match() {
        let items = items(json!([
            {
                "publisher": "ACM",
                "title": ["First"],
                "DOI": "10.1145/1",
                "published-print": {"date-parts": [[2025, 6, 1]]}
            },
            {
                "publisher": "ACM",
                "title": ["Second"],
                "DOI": "10.1145/2",
                "published-print": {"date-parts": [[2025, 5, 1]]}
            }
        ]));
        let papers = filter_items(items, PublisherHint::Acm);
        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].title, "First");
    }

    #[test]
    fn test_missing_year_yields_empty_date() {
        let items = items(json!([
            {
                "publisher": "ACM",
                "title": ["Dateless"],
                "DOI": "10.1145/3",
                "published-print": {"date-parts": [[null]]}
            }
        ]));
        let papers = filter_items(items, PublisherHint::Acm);
        assert_eq!(papers[0].published, "");
    }
}
