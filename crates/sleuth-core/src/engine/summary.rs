//! Read-only projection of the knowledge matrix for display.

use std::collections::BTreeMap;

use super::{DeductionEngine, capitalize};
use crate::model::category::Category;
use crate::model::location::Location;
use crate::model::status::CellStatus;

/// Display-ready snapshot: nothing in here feeds back into deduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSummary {
    /// Per category, the card confirmed to be in the envelope.
    pub solution: BTreeMap<Category, String>,
    /// Column titles: "Card", the roster in order, then "Envelope".
    pub header: Vec<String>,
    /// One row per card in deck order.
    pub rows: Vec<SummaryRow>,
    /// Per category, the cards that could still be the solution.
    pub possibilities: BTreeMap<Category, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub card: String,
    pub marks: Vec<&'static str>,
}

impl StatusSummary {
    pub fn project(engine: &DeductionEngine) -> Self {
        let edition = engine.edition;
        let players = engine.roster.len();

        let mut solution = BTreeMap::new();
        let mut possibilities = BTreeMap::new();
        for category in Category::ALL {
            let mut open = Vec::new();
            for card in edition.cards(category) {
                let index = edition.card_index(card).expect("catalog card is in deck");
                match engine.grid.get(index, Location::Envelope) {
                    CellStatus::Solution => {
                        solution.insert(category, (*card).to_string());
                    }
                    CellStatus::Absent => {}
                    _ => open.push((*card).to_string()),
                }
            }
            possibilities.insert(category, open);
        }

        let mut header = Vec::with_capacity(players + 2);
        header.push("Card".to_string());
        header.extend(engine.roster.iter().map(|name| capitalize(name)));
        header.push("Envelope".to_string());

        let rows = edition
            .deck()
            .enumerate()
            .map(|(index, card)| SummaryRow {
                card: card.to_string(),
                marks: (0..players)
                    .map(Location::Player)
                    .chain([Location::Envelope])
                    .map(|location| engine.grid.get(index, location).symbol())
                    .collect(),
            })
            .collect();

        Self {
            solution,
            header,
            rows,
            possibilities,
        }
    }

    /// True once every category has a confirmed envelope card.
    pub fn is_solved(&self) -> bool {
        self.solution.len() == Category::ALL.len()
    }
}
