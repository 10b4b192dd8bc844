use std::fmt;

use serde::{Deserialize, Serialize};

// Record types shared between the fetcher and the reporter. The card file on
// disk is a JSON array of `Card` in newest-first order, at most one per date.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Source {
    #[serde(rename = "arXiv")]
    Arxiv,
    #[serde(rename = "ACM")]
    Acm,
    #[serde(rename = "IEEE")]
    Ieee,
}

impl Source {
    pub fn label(&self) -> &'static str {
        match self {
            Source::Arxiv => "arXiv",
            Source::Acm => "ACM",
            Source::Ieee => "IEEE",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One retrieved publication reference. `published` is an ISO date
/// (`YYYY-MM-DD`) or an empty string when the source gave no year.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Paper {
    pub title: String,
    pub source: Source,
    pub url: String,
    pub published: String,
}

impl Paper {
    pub fn new(title: String, source: Source, url: String, published: String) -> Self {
        Paper {
            title,
            source,
            url,
            published,
        }
    }
}

/// One day's aggregated research summary record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Card {
    pub date: String,
    pub topic: String,
    pub title: String,
    pub summary: String,
    pub papers: Vec<Paper>,
}
