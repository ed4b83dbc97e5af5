//! Turn reports: a suggestion, who (if anyone) refuted it, and the
//! eliminations both outcomes imply.

use super::{DeductionEngine, capitalize};
use crate::model::location::Location;
use crate::model::status::CellStatus;

/// One reported turn. `refuters` lists the players who showed a card, in
/// the order they showed; an empty list means the suggestion went all the
/// way around unrefuted. Every other non-suggester is an implicit passer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionReport {
    pub suggester: String,
    pub suspect: String,
    pub weapon: String,
    pub room: String,
    pub refuters: Vec<String>,
}

impl SuggestionReport {
    /// The three suggested cards, in category order.
    pub fn cards(&self) -> [&str; 3] {
        [&self.suspect, &self.weapon, &self.room]
    }
}

impl DeductionEngine {
    /// Interprets one turn report. Names and cards are resolved up front;
    /// a malformed report narrates an error and leaves the matrix alone.
    pub fn record_suggestion(&mut self, report: &SuggestionReport) {
        let suggester = report.suggester.to_lowercase();
        let Some(suggester_index) = self.player_index(&suggester) else {
            self.log.push(format!(
                "ERROR: Could not log the turn. Player '{}' is not in this game.",
                report.suggester
            ));
            return;
        };

        let mut cards = [0usize; 3];
        for (slot, name) in report.cards().into_iter().enumerate() {
            match self.edition.card_index(name) {
                Some(index) => cards[slot] = index,
                None => {
                    self.log.push(format!(
                        "ERROR: Could not log the turn. Card '{name}' not recognized in this edition."
                    ));
                    return;
                }
            }
        }

        let mut showers: Vec<usize> = Vec::with_capacity(report.refuters.len());
        for refuter in &report.refuters {
            let Some(refuter_index) = self.player_index(&refuter.to_lowercase()) else {
                self.log.push(format!(
                    "ERROR: Could not log the turn. Refuter '{refuter}' is not in this game."
                ));
                return;
            };
            showers.push(refuter_index);
        }

        self.log.push(format!(
            "--- Turn Log: **{}** suggested **{}**, **{}**, **{}** ---",
            capitalize(&suggester),
            report.suspect,
            report.weapon,
            report.room
        ));

        if showers.is_empty() {
            self.log.push(format!(
                "-> Elimination: Suggestion went all the way around. No player other than **{}** can hold these cards.",
                capitalize(&suggester)
            ));
        } else {
            for &refuter_index in &showers {
                self.resolve_shown_card(refuter_index, cards);
            }
        }

        // Everyone who neither suggested nor showed a card passed, and a
        // passer holds none of the three.
        for player in 0..self.roster.len() {
            if player == suggester_index || showers.contains(&player) {
                continue;
            }
            for card in cards {
                self.propagate(card, Location::Player(player), CellStatus::Absent);
            }
        }
    }

    /// Two-of-three elimination: a refuter can only have shown a card they
    /// are not already excluded from. With two of the three excluded the
    /// shown card is forced; with fewer, only a partial narration is
    /// possible. All three excluded is a contradictory report and is
    /// absorbed without writes.
    fn resolve_shown_card(&mut self, refuter: usize, cards: [usize; 3]) {
        let excluded = cards
            .iter()
            .filter(|&&card| self.grid.get(card, Location::Player(refuter)) == CellStatus::Absent)
            .count();

        match excluded {
            2 => {
                let shown = cards.into_iter().find(|&card| {
                    self.grid.get(card, Location::Player(refuter)) != CellStatus::Absent
                });
                if let Some(shown) = shown {
                    self.log.push(format!(
                        "*** SMART DEDUCTION: **{}** is KNOWN NOT to have 2 of 3 cards. They **MUST** have shown **{}**! ***",
                        capitalize(&self.roster[refuter]),
                        self.card_name(shown)
                    ));
                    self.propagate(shown, Location::Player(refuter), CellStatus::Held);
                }
            }
            1 => self.log.push(format!(
                "-> Partial Deduction: **{}** has one of the two remaining possible cards.",
                capitalize(&self.roster[refuter])
            )),
            0 => self.log.push(format!(
                "-> Partial Deduction: **{}** has one of the three possible cards.",
                capitalize(&self.roster[refuter])
            )),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SuggestionReport;
    use crate::catalog::Edition;
    use crate::engine::DeductionEngine;
    use crate::model::location::Location;
    use crate::model::status::CellStatus;

    fn classic_engine() -> DeductionEngine {
        DeductionEngine::new(
            Edition::Classic,
            "Ann",
            &["Bob".to_string(), "Cara".to_string()],
        )
    }

    fn report(suggester: &str, refuters: &[&str]) -> SuggestionReport {
        SuggestionReport {
            suggester: suggester.to_string(),
            suspect: "Miss Scarlett".to_string(),
            weapon: "Rope".to_string(),
            room: "Kitchen".to_string(),
            refuters: refuters.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn two_of_three_elimination_pins_the_shown_card() {
        let mut engine = classic_engine();
        let scarlett = engine.edition().card_index("Miss Scarlett").unwrap();
        let rope = engine.edition().card_index("Rope").unwrap();
        engine.propagate(scarlett, Location::Player(2), CellStatus::Absent);
        engine.propagate(rope, Location::Player(2), CellStatus::Absent);

        engine.record_suggestion(&report("bob", &["cara"]));

        assert_eq!(
            engine.status("Kitchen", Location::Player(2)),
            Some(CellStatus::Held)
        );
        assert!(
            engine
                .drain_log()
                .iter()
                .any(|line| line.contains("MUST** have shown **Kitchen"))
        );
    }

    #[test]
    fn one_exclusion_narrates_without_writing() {
        let mut engine = classic_engine();
        let rope = engine.edition().card_index("Rope").unwrap();
        engine.propagate(rope, Location::Player(2), CellStatus::Absent);

        engine.record_suggestion(&report("bob", &["cara"]));

        assert_eq!(
            engine.status("Miss Scarlett", Location::Player(2)),
            Some(CellStatus::Unknown)
        );
        assert_eq!(
            engine.status("Kitchen", Location::Player(2)),
            Some(CellStatus::Unknown)
        );
        assert!(
            engine
                .drain_log()
                .iter()
                .any(|line| line.contains("one of the two remaining"))
        );
    }

    #[test]
    fn no_exclusions_narrates_all_three() {
        let mut engine = classic_engine();
        engine.record_suggestion(&report("bob", &["cara"]));
        assert!(
            engine
                .drain_log()
                .iter()
                .any(|line| line.contains("one of the three possible"))
        );
    }

    #[test]
    fn unrefuted_suggestion_excludes_everyone_but_the_suggester() {
        let mut engine = classic_engine();
        engine.record_suggestion(&report("bob", &[]));

        for card in ["Miss Scarlett", "Rope", "Kitchen"] {
            assert_eq!(
                engine.status(card, Location::Player(0)),
                Some(CellStatus::Absent)
            );
            assert_eq!(
                engine.status(card, Location::Player(2)),
                Some(CellStatus::Absent)
            );
            // The suggester may still hold their own cards.
            assert_eq!(
                engine.status(card, Location::Player(1)),
                Some(CellStatus::Unknown)
            );
        }
    }

    #[test]
    fn passers_are_excluded_alongside_a_refuter() {
        let mut engine = classic_engine();
        // Bob suggests, Cara shows; Ann is an implicit passer.
        engine.record_suggestion(&report("bob", &["cara"]));

        for card in ["Miss Scarlett", "Rope", "Kitchen"] {
            assert_eq!(
                engine.status(card, Location::Player(0)),
                Some(CellStatus::Absent)
            );
        }
    }

    #[test]
    fn unknown_suggester_leaves_state_untouched() {
        let mut engine = classic_engine();
        engine.record_suggestion(&report("dee", &["cara"]));
        assert!(engine.drain_log().iter().any(|line| line.contains("ERROR")));
        for card in ["Miss Scarlett", "Rope", "Kitchen"] {
            for player in 0..3 {
                assert_eq!(
                    engine.status(card, Location::Player(player)),
                    Some(CellStatus::Unknown)
                );
            }
        }
    }

    #[test]
    fn unknown_refuter_leaves_state_untouched() {
        let mut engine = classic_engine();
        // A typo in the refuter's name must not turn the real shower into
        // a passer and exclude them from the suggested cards.
        engine.record_suggestion(&report("bob", &["carra"]));
        assert!(engine.drain_log().iter().any(|line| line.contains("ERROR")));
        for card in ["Miss Scarlett", "Rope", "Kitchen"] {
            for player in 0..3 {
                assert_eq!(
                    engine.status(card, Location::Player(player)),
                    Some(CellStatus::Unknown)
                );
            }
        }
    }

    #[test]
    fn unknown_card_aborts_before_any_write() {
        let mut engine = classic_engine();
        let mut bad = report("bob", &[]);
        bad.room = "Moon Base".to_string();
        engine.record_suggestion(&bad);
        assert!(engine.drain_log().iter().any(|line| line.contains("ERROR")));
        assert_eq!(
            engine.status("Rope", Location::Player(0)),
            Some(CellStatus::Unknown)
        );
    }

    #[test]
    fn fully_excluded_refuter_is_absorbed_silently() {
        let mut engine = classic_engine();
        for card in ["Miss Scarlett", "Rope", "Kitchen"] {
            let index = engine.edition().card_index(card).unwrap();
            engine.propagate(index, Location::Player(2), CellStatus::Absent);
        }
        engine.drain_log();

        engine.record_suggestion(&report("bob", &["cara"]));

        // No positive write and no smart-deduction claim for cara.
        for card in ["Miss Scarlett", "Rope", "Kitchen"] {
            assert_eq!(
                engine.status(card, Location::Player(2)),
                Some(CellStatus::Absent)
            );
        }
        assert!(
            !engine
                .drain_log()
                .iter()
                .any(|line| line.contains("SMART DEDUCTION"))
        );
    }
}
