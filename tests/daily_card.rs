use tempfile::tempdir;

use vrcards::{
    card::{assemble_card, SUMMARY_DEFAULT, SUMMARY_NO_RESULTS},
    error::FetchError,
    model::{Paper, Source},
    report,
    store::CardStore,
};

const TOPIC: &str = "virtual reality interaction design";

fn paper(title: &str, source: Source, url: &str) -> Paper {
    Paper::new(
        title.to_string(),
        source,
        url.to_string(),
        String::from("2025-03-10"),
    )
}

#[test]
fn refetch_for_same_date_replaces_earlier_card() {
    let dir = tempdir().unwrap();
    let store = CardStore::new(dir.path().join("cards.json"));

    // first run succeeds with two papers
    let good = assemble_card(
        "2025-06-01",
        Ok(vec![
            paper("Gesture Input", Source::Arxiv, "https://arxiv.org/abs/2501.1"),
            paper("Shared Haptics", Source::Acm, "https://doi.org/10.1145/1"),
        ]),
    )
    .unwrap();
    let cards = store.upsert(good).unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].summary, SUMMARY_DEFAULT);
    assert_eq!(cards[0].papers.len(), 2);

    // second run for the same date fails outright
    let degraded = assemble_card(
        "2025-06-01",
        Err(FetchError::Network(String::from("upstream unreachable"))),
    )
    .unwrap();
    let cards = store.upsert(degraded).unwrap();
    assert_eq!(cards.len(), 1, "same date must hold a single card");
    assert!(cards[0].papers.is_empty());
    assert_eq!(cards[0].summary, SUMMARY_NO_RESULTS);

    // what got persisted is what a reader loads back
    assert_eq!(store.load().unwrap(), cards);
}

#[test]
fn malformed_upstream_body_leaves_stored_card_untouched() {
    let dir = tempdir().unwrap();
    let store = CardStore::new(dir.path().join("cards.json"));

    let good = assemble_card(
        "2025-06-01",
        Ok(vec![paper(
            "Gesture Input",
            Source::Arxiv,
            "https://arxiv.org/abs/2501.1",
        )]),
    )
    .unwrap();
    let written = store.upsert(good).unwrap();

    // a decode failure never produces a card, so nothing gets upserted
    let result = assemble_card(
        "2025-06-01",
        Err(FetchError::Decode(String::from("truncated feed"))),
    );
    assert!(result.is_err());
    assert_eq!(store.load().unwrap(), written);
}

#[test]
fn report_from_fresh_store_points_at_search_entries() {
    let dir = tempdir().unwrap();
    let store = CardStore::new(dir.path().join("cards.json"));
    let cards = store.load().unwrap();
    let out = report::render(&cards, TOPIC, "2025-01-01", "2025-06-01");
    assert!(out.contains("暂无卡片数据"));
    assert!(out.contains("- arXiv: "));
    assert!(out.contains("- ACM: "));
    assert!(out.contains("- IEEE: "));
}

#[test]
fn report_after_fetch_shows_stored_papers() {
    let dir = tempdir().unwrap();
    let store = CardStore::new(dir.path().join("cards.json"));
    let card = assemble_card(
        "2025-06-01",
        Ok(vec![paper(
            "Accessible Locomotion",
            Source::Ieee,
            "https://doi.org/10.1109/1",
        )]),
    )
    .unwrap();
    store.upsert(card).unwrap();

    let cards = store.load().unwrap();
    let out = report::render(&cards, TOPIC, "2025-01-01", "2025-06-01");
    assert!(out.contains("- 日期：2025-06-01"));
    assert!(out.contains("  - [IEEE] Accessible Locomotion - https://doi.org/10.1109/1"));
}
