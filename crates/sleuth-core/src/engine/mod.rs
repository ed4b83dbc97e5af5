//! The deduction engine: owns the knowledge matrix and cascades every
//! observation through the inference rules until no new fact falls out.

pub mod hands;
pub mod knowledge;
pub mod serialization;
pub mod suggestion;
pub mod summary;

use std::collections::{BTreeMap, VecDeque};

use crate::catalog::Edition;
use crate::model::location::Location;
use crate::model::status::CellStatus;
use hands::HandAllocation;
use knowledge::KnowledgeGrid;
use summary::StatusSummary;

type PendingWrite = (usize, Location, CellStatus);

/// One game session's worth of deduction state. Created once per game with
/// a fixed edition and roster, mutated by every observation, and projected
/// or snapshotted on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct DeductionEngine {
    edition: Edition,
    roster: Vec<String>,
    grid: KnowledgeGrid,
    hands: HandAllocation,
    shown_to: BTreeMap<String, Vec<String>>,
    log: Vec<String>,
}

impl DeductionEngine {
    /// Starts a game. Names are lower-cased into canonical keys; the user
    /// always occupies roster slot 0.
    pub fn new(edition: Edition, user: &str, opponents: &[String]) -> Self {
        let mut roster = Vec::with_capacity(opponents.len() + 1);
        roster.push(user.to_lowercase());
        roster.extend(opponents.iter().map(|name| name.to_lowercase()));

        let deck_size = edition.deck_size();
        let shown_to = roster[1..]
            .iter()
            .map(|name| (name.clone(), Vec::new()))
            .collect();

        Self {
            edition,
            grid: KnowledgeGrid::new(deck_size, roster.len()),
            hands: HandAllocation::deal(deck_size, roster.len()),
            roster,
            shown_to,
            log: Vec::new(),
        }
    }

    pub(crate) fn from_parts(
        edition: Edition,
        roster: Vec<String>,
        grid: KnowledgeGrid,
        hands: HandAllocation,
        shown_to: BTreeMap<String, Vec<String>>,
        log: Vec<String>,
    ) -> Self {
        Self {
            edition,
            roster,
            grid,
            hands,
            shown_to,
            log,
        }
    }

    pub fn edition(&self) -> Edition {
        self.edition
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn user(&self) -> &str {
        &self.roster[0]
    }

    pub fn hands(&self) -> &HandAllocation {
        &self.hands
    }

    /// Cards the user has revealed to each opponent, in the order shown.
    pub fn shown_history(&self) -> &BTreeMap<String, Vec<String>> {
        &self.shown_to
    }

    /// Current status of one cell, by card name. `None` for cards outside
    /// the edition.
    pub fn status(&self, card: &str, location: Location) -> Option<CellStatus> {
        let index = self.edition.card_index(card)?;
        Some(self.grid.get(index, location))
    }

    /// Roster slot of a canonical (lower-cased) player name.
    pub fn player_index(&self, name: &str) -> Option<usize> {
        self.roster.iter().position(|player| player == name)
    }

    /// Records the user's starting hand. Unrecognized names warn and are
    /// skipped; everything else cascades immediately.
    pub fn input_hand(&mut self, cards: &[String]) {
        let mut recognized = 0usize;
        for card in cards {
            match self.edition.card_index(card) {
                Some(index) => {
                    recognized += 1;
                    self.propagate(index, Location::Player(0), CellStatus::Held);
                }
                None => self.log.push(format!(
                    "Warning: Card '{card}' not recognized in this edition."
                )),
            }
        }
        self.log.push(format!(
            "Initial hand of **{recognized} cards** logged for **{}**.",
            capitalize(self.user())
        ));
    }

    /// The user refuted `suggester`'s suggestion by showing `card`. The
    /// card is certain knowledge; it is also appended to the suggester's
    /// shown-card history as a memory aid.
    pub fn record_user_refutation(&mut self, suggester: &str, card: &str) {
        let Some(index) = self.edition.card_index(card) else {
            self.log.push(format!(
                "ERROR: Could not log your refutation. Card '{card}' not recognized."
            ));
            return;
        };

        self.propagate(index, Location::Player(0), CellStatus::Held);

        let key = suggester.to_lowercase();
        if let Some(history) = self.shown_to.get_mut(&key) {
            if !history.iter().any(|shown| shown == card) {
                history.push(card.to_string());
            }
        }

        self.log.push(format!(
            "--- Turn Log: **{}** suggested, and **YOU** refuted by showing **{card}**.",
            capitalize(&key)
        ));
    }

    /// Display-ready projection of everything currently known.
    pub fn summary(&self) -> StatusSummary {
        StatusSummary::project(self)
    }

    /// Reads and clears the turn narration. The log is a notification
    /// channel, not game state.
    pub fn drain_log(&mut self) -> Vec<String> {
        std::mem::take(&mut self.log)
    }

    /// Applies one write and runs every follow-on rule to its fixed point.
    /// A worklist stands in for the natural recursion: the lattice is
    /// finite and writes strictly increase, so the queue always drains.
    fn propagate(&mut self, card: usize, location: Location, status: CellStatus) {
        let players = self.roster.len();
        let mut queue: VecDeque<PendingWrite> = VecDeque::new();
        queue.push_back((card, location, status));

        while let Some((card, location, status)) = queue.pop_front() {
            let Some(previous) = self.grid.raise(card, location, status) else {
                continue;
            };

            if previous == CellStatus::Absent && status.is_positive() {
                self.log.push(format!(
                    "!! Contradiction: **{}** was ruled out for **{}** but is now marked positive. Check earlier turns.",
                    self.card_name(card),
                    self.location_label(location)
                ));
            }

            match status {
                CellStatus::Held => {
                    self.log.push(format!(
                        "-> Deduction: **{}** must **HAVE** **{}**",
                        self.location_label(location),
                        self.card_name(card)
                    ));
                    for other in all_locations(players) {
                        if other != location {
                            queue.push_back((card, other, CellStatus::Absent));
                        }
                    }
                    if let Location::Player(player) = location {
                        self.enqueue_hand_completion(player, &mut queue);
                    }
                }
                CellStatus::Solution => {
                    self.log.push(format!(
                        "-> Deduction: **{}** is **IN THE ENVELOPE!**",
                        self.card_name(card)
                    ));
                    for player in 0..players {
                        queue.push_back((card, Location::Player(player), CellStatus::Absent));
                    }
                }
                CellStatus::Unknown | CellStatus::Absent => {}
            }

            self.enqueue_solution_checks(card, &mut queue);
        }
    }

    /// A full hand is fully known: once a player's Held count reaches their
    /// allocation, every remaining Unknown cell of theirs must be Absent.
    fn enqueue_hand_completion(&mut self, player: usize, queue: &mut VecDeque<PendingWrite>) {
        let held = self.grid.count_for(Location::Player(player), CellStatus::Held);
        if held != self.hands.count(player) {
            return;
        }
        self.log.push(format!(
            "*** SMART DEDUCTION: **{}'s** hand is COMPLETE! (All {held} cards are known) ***",
            capitalize(&self.roster[player])
        ));
        for card in 0..self.grid.cards() {
            if self.grid.get(card, Location::Player(player)) == CellStatus::Unknown {
                queue.push_back((card, Location::Player(player), CellStatus::Absent));
            }
        }
    }

    /// Envelope inference and last-possible-holder inference for one card.
    fn enqueue_solution_checks(&mut self, card: usize, queue: &mut VecDeque<PendingWrite>) {
        let players = self.roster.len();
        let absent_players = (0..players)
            .filter(|&player| self.grid.get(card, Location::Player(player)) == CellStatus::Absent)
            .count();

        if self.grid.get(card, Location::Envelope) == CellStatus::Unknown
            && absent_players == players
        {
            queue.push_back((card, Location::Envelope, CellStatus::Solution));
        }

        let mut unknown = (0..players)
            .filter(|&player| self.grid.get(card, Location::Player(player)) == CellStatus::Unknown);
        if let (Some(player), None) = (unknown.next(), unknown.next()) {
            let others_excluded = (0..players)
                .filter(|&other| other != player)
                .all(|other| self.grid.get(card, Location::Player(other)) == CellStatus::Absent);
            if others_excluded && self.grid.get(card, Location::Envelope) == CellStatus::Absent {
                queue.push_back((card, Location::Player(player), CellStatus::Held));
            }
        }
    }

    fn card_name(&self, card: usize) -> &'static str {
        self.edition.card_at(card).expect("card index within deck")
    }

    fn location_label(&self, location: Location) -> String {
        match location {
            Location::Player(player) => capitalize(&self.roster[player]),
            Location::Envelope => "Envelope".to_string(),
        }
    }
}

fn all_locations(players: usize) -> impl Iterator<Item = Location> {
    (0..players).map(Location::Player).chain([Location::Envelope])
}

/// Upper-cases the first letter only, the way roster names are displayed.
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
