//! Handoff record: the finalized selection passed to the checkout stage.
//!
//! The record is written as JSON under a single well-known key and replaces
//! whatever was stored there before. Field names follow the camelCase shape
//! the review stage reads.

#[cfg(test)]
#[path = "handoff_test.rs"]
mod handoff_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::consts::HANDOFF_KEY;
use crate::grid::Cell;

/// Failure reported by a key-value backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("store failure: {0}")]
pub struct StoreError(pub String);

/// Why a handoff could not be produced or persisted.
#[derive(Debug, thiserror::Error)]
pub enum HandoffError {
    #[error("nothing selected; select at least one cell before continuing")]
    EmptySelection,

    #[error("handoff record encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Representative location of the selection. Always a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorRect {
    pub x: i64,
    pub y: i64,
    pub w: u32,
    pub h: u32,
}

impl From<Cell> for AnchorRect {
    fn from(cell: Cell) -> Self {
        Self { x: cell.x, y: cell.y, w: 1, h: 1 }
    }
}

/// Everything the next stage needs to price and display the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffRecord {
    pub selection: AnchorRect,
    /// Selected cell count.
    pub area: usize,
    /// Lease length in years.
    pub duration: u32,
    pub total_cost: f64,
    pub price_per_px: f64,
}

/// String key-value storage in the style of browser `localStorage`.
pub trait KeyValueStore {
    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Read the value under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
}

/// In-process store, used by tests and hosts without durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }
}

/// Write `record` under the handoff key, overwriting the previous record.
pub fn persist_handoff<S: KeyValueStore + ?Sized>(store: &mut S, record: &HandoffRecord) -> Result<(), HandoffError> {
    let raw = serde_json::to_string(record)?;
    store.set_item(HANDOFF_KEY, &raw)?;
    tracing::info!(key = HANDOFF_KEY, area = record.area, total_cost = record.total_cost, "handoff record stored");
    Ok(())
}

/// Read the record left by the selection stage, if there is one.
pub fn load_handoff<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<HandoffRecord>, HandoffError> {
    let Some(raw) = store.get_item(HANDOFF_KEY)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}
