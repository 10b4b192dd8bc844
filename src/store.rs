use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{error::StoreError, model::Card};

/// File-backed card collection. All read-modify-write logic against the JSON
/// file lives behind this type; there is no locking, so concurrent writers
/// are last-one-wins.
pub struct CardStore {
    path: PathBuf,
}

impl CardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CardStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored collection, newest first. A missing file is an empty
    /// collection, not an error.
    pub fn load(&self) -> Result<Vec<Card>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Insert-or-replace keyed by `card.date`: any stored card with the same
    /// date is dropped, the new card goes to the front, and the whole
    /// collection is rewritten.
    pub fn upsert(&self, card: Card) -> Result<Vec<Card>, StoreError> {
        let mut cards = self.load()?;
        cards.retain(|existing| existing.date != card.date);
        cards.insert(0, card);
        self.save(&cards)?;
        Ok(cards)
    }

    fn save(&self, cards: &[Card]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        // pretty-printed, with non-ASCII text kept literal
        let json = serde_json::to_string_pretty(cards)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
