use std::time::Duration;

use reqwest::Client;

use crate::{
    arxiv::ArxivFetcher,
    config::Config,
    crossref::{CrossrefFetcher, PublisherHint},
    error::FetchError,
    model::{Card, Paper},
};

pub const TOPIC: &str = "VR交互设计";
pub const CARD_TITLE: &str = "每日成果卡片：多模态、协同与可访问性交互";

pub const SUMMARY_DEFAULT: &str =
    "今日卡片聚焦近期 VR 交互设计论文：关注多模态输入融合、协同任务设计和可访问性提升。";
pub const SUMMARY_NETWORK_LIMITED: &str =
    "今日抓取受网络限制影响，暂未拉取到论文；请稍后重试以获取带完整原文链接的最新成果。";
pub const SUMMARY_NO_RESULTS: &str =
    "今日暂未抓取到 2025 年及之后的可用结果；请稍后重试以获取带完整原文链接的最新成果。";

const MAX_PAPERS: usize = 3;

/// Builds one day's card from the two upstream APIs. Persistence is the
/// caller's job.
pub struct CardBuilder {
    client: Client,
    arxiv: ArxivFetcher,
    crossref: CrossrefFetcher,
}

impl CardBuilder {
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(CardBuilder {
            client,
            arxiv: ArxivFetcher::from_config(config),
            crossref: CrossrefFetcher::from_config(config),
        })
    }

    pub async fn build_card(&self, date: &str) -> Result<Card, FetchError> {
        let outcome = self.collect_papers().await;
        if let Err(e) = &outcome {
            eprintln!("Paper fetch failed: {}", e);
        }
        assemble_card(date, outcome)
    }

    /// arXiv once, Crossref once per publisher, sequentially. The first
    /// failure aborts the whole sequence.
    async fn collect_papers(&self) -> Result<Vec<Paper>, FetchError> {
        let mut papers = self.arxiv.fetch(&self.client).await?;
        papers.extend(self.crossref.fetch(&self.client, PublisherHint::Acm).await?);
        papers.extend(self.crossref.fetch(&self.client, PublisherHint::Ieee).await?);
        Ok(papers)
    }
}

/// Pure assembly step: maps a fetch outcome onto the card record, including
/// the summary fallbacks. Only a network failure degrades to an empty paper
/// list; a decode failure propagates so the caller exits without touching the
/// stored card. Any empty paper list ends up with the no-results summary.
pub fn assemble_card(
    date: &str,
    outcome: Result<Vec<Paper>, FetchError>,
) -> Result<Card, FetchError> {
    let (mut papers, mut summary) = match outcome {
        Ok(papers) => (papers, String::from(SUMMARY_DEFAULT)),
        Err(FetchError::Network(_)) => (Vec::new(), String::from(SUMMARY_NETWORK_LIMITED)),
        Err(e) => return Err(e),
    };
    papers.truncate(MAX_PAPERS);
    if papers.is_empty() {
        summary = String::from(SUMMARY_NO_RESULTS);
    }
    Ok(Card {
        date: date.to_string(),
        topic: String::from(TOPIC),
        title: String::from(CARD_TITLE),
        summary,
        papers,
    })
}
