//! Snapshotting for session persistence. The edition travels as its
//! symbolic key; the static catalog is never duplicated into the snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::DeductionEngine;
use super::hands::HandAllocation;
use super::knowledge::KnowledgeGrid;
use crate::catalog::{Edition, UnknownEdition};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineSnapshot {
    pub edition: String,
    pub user: String,
    pub roster: Vec<String>,
    pub knowledge: KnowledgeGrid,
    pub hands: HandAllocation,
    pub shown_to: BTreeMap<String, Vec<String>>,
    pub log: Vec<String>,
}

impl EngineSnapshot {
    pub fn capture(engine: &DeductionEngine) -> Self {
        EngineSnapshot {
            edition: engine.edition().key().to_string(),
            user: engine.user().to_string(),
            roster: engine.roster().to_vec(),
            knowledge: engine.grid.clone(),
            hands: engine.hands.clone(),
            shown_to: engine.shown_to.clone(),
            log: engine.log.clone(),
        }
    }

    /// Rebuilds an engine. The edition key must name a known catalog and
    /// the stored shapes must agree with it; a snapshot that does not add
    /// up is rejected rather than silently rebound.
    pub fn restore(self) -> Result<DeductionEngine, SnapshotError> {
        let edition: Edition = self.edition.parse()?;

        if self.roster.is_empty() {
            return Err(SnapshotError::Shape("roster is empty"));
        }
        if self.roster.first() != Some(&self.user) {
            return Err(SnapshotError::Shape("user is not the first roster entry"));
        }
        if self.knowledge.cards() != edition.deck_size()
            || self.knowledge.players() != self.roster.len()
        {
            return Err(SnapshotError::Shape(
                "knowledge grid does not match edition and roster",
            ));
        }
        if self.hands.players() != self.roster.len() {
            return Err(SnapshotError::Shape("hand allocation does not match roster"));
        }

        Ok(DeductionEngine::from_parts(
            edition,
            self.roster,
            self.knowledge,
            self.hands,
            self.shown_to,
            self.log,
        ))
    }

    pub fn to_json(engine: &DeductionEngine) -> serde_json::Result<String> {
        let snapshot = Self::capture(engine);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Raised when a persisted snapshot cannot be rebuilt into an engine.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Edition(#[from] UnknownEdition),
    #[error("malformed snapshot: {0}")]
    Shape(&'static str),
}
