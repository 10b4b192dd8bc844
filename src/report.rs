use url::form_urlencoded;

use crate::model::Card;

// Canonical search entry points, filled with the form-encoded topic.
const ARXIV_SEARCH: &str = "https://arxiv.org/search/?query=";
const ARXIV_SEARCH_SUFFIX: &str = "&searchtype=all&abstracts=show&order=-announced_date_first&size=50";
const ACM_SEARCH: &str = "https://dl.acm.org/action/doSearch?AllField=";
const IEEE_SEARCH: &str = "https://ieeexplore.ieee.org/search/searchresult.jsp?queryText=";

const NOTE_LINE: &str = "- 说明：当前环境若无法直连论文 API，会优先输出官方数据库检索入口。";
const NO_LINKS_PLACEHOLDER: &str = "- 原文链接：暂无（请使用上方三库检索入口查看当日最新结果）";
const NO_CARDS_PLACEHOLDER: &str = "- 暂无卡片数据，请先运行 fetch 生成当日卡片";

/// Fixed-template search links for the three databases, topic URL-encoded.
pub fn query_links(topic: &str) -> [(&'static str, String); 3] {
    let q: String = form_urlencoded::byte_serialize(topic.as_bytes()).collect();
    [
        (
            "arXiv",
            format!("{}{}{}", ARXIV_SEARCH, q, ARXIV_SEARCH_SUFFIX),
        ),
        ("ACM", format!("{}{}", ACM_SEARCH, q)),
        ("IEEE", format!("{}{}", IEEE_SEARCH, q)),
    ]
}

/// Renders the Markdown report: header with the date range, the search entry
/// points, and the newest card (or a placeholder when there is none).
pub fn render(cards: &[Card], topic: &str, start: &str, end: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("# VR 交互设计成果卡片（{} 至 {}）\n\n", start, end));
    out.push_str(NOTE_LINE);
    out.push('\n');
    out.push_str(&format!("- 主题： {}\n", topic));

    out.push_str("\n## 检索入口\n");
    for (name, url) in query_links(topic) {
        out.push_str(&format!("- {}: {}\n", name, url));
    }

    out.push_str("\n## 今日卡片\n");
    match cards.first() {
        Some(card) => {
            out.push_str(&format!("- 日期：{}\n", card.date));
            out.push_str(&format!("- 标题：{}\n", card.title));
            out.push_str(&format!("- 摘要：{}\n", card.summary));
            if card.papers.is_empty() {
                out.push_str(NO_LINKS_PLACEHOLDER);
                out.push('\n');
            } else {
                out.push_str("- 原文链接：\n");
                for paper in &card.papers {
                    out.push_str(&format!(
                        "  - [{}] {} - {}\n",
                        paper.source, paper.title, paper.url
                    ));
                }
            }
        }
        None => {
            out.push_str(NO_CARDS_PLACEHOLDER);
            out.push('\n');
        }
    }
    out
}
