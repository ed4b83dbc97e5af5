use crate::model::location::Location;
use crate::model::status::CellStatus;
use serde::{Deserialize, Serialize};

/// The knowledge matrix: one status cell per (card, location). Writes go
/// through [`KnowledgeGrid::raise`], which only ever moves a cell upward in
/// the status order. This layer does not police which statuses are sensible
/// for which locations; callers own that discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeGrid {
    players: usize,
    cells: Vec<Vec<CellStatus>>,
}

impl KnowledgeGrid {
    /// Grid of `cards` rows over `players` hand columns plus the envelope.
    pub fn new(cards: usize, players: usize) -> Self {
        Self {
            players,
            cells: vec![vec![CellStatus::Unknown; players + 1]; cards],
        }
    }

    pub fn players(&self) -> usize {
        self.players
    }

    pub fn cards(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, card: usize, location: Location) -> CellStatus {
        self.cells[card][location.column(self.players)]
    }

    /// Compare-and-upgrade write: applies `status` only if it strictly
    /// exceeds the stored value, returning the replaced value when it does.
    /// Anything else is a no-op.
    pub fn raise(
        &mut self,
        card: usize,
        location: Location,
        status: CellStatus,
    ) -> Option<CellStatus> {
        let cell = &mut self.cells[card][location.column(self.players)];
        if status > *cell {
            let previous = *cell;
            *cell = status;
            Some(previous)
        } else {
            None
        }
    }

    /// Number of cards at `status` for one location.
    pub fn count_for(&self, location: Location, status: CellStatus) -> usize {
        let column = location.column(self.players);
        self.cells
            .iter()
            .filter(|row| row[column] == status)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::KnowledgeGrid;
    use crate::model::location::Location;
    use crate::model::status::CellStatus;

    #[test]
    fn new_grid_is_all_unknown() {
        let grid = KnowledgeGrid::new(4, 2);
        for card in 0..4 {
            for location in [Location::Player(0), Location::Player(1), Location::Envelope] {
                assert_eq!(grid.get(card, location), CellStatus::Unknown);
            }
        }
    }

    #[test]
    fn raise_applies_strict_upgrades_only() {
        let mut grid = KnowledgeGrid::new(2, 2);
        assert_eq!(
            grid.raise(0, Location::Player(1), CellStatus::Held),
            Some(CellStatus::Unknown)
        );
        // Equal or lower writes are ignored.
        assert_eq!(grid.raise(0, Location::Player(1), CellStatus::Held), None);
        assert_eq!(grid.raise(0, Location::Player(1), CellStatus::Absent), None);
        assert_eq!(grid.get(0, Location::Player(1)), CellStatus::Held);
    }

    #[test]
    fn raise_reports_replaced_value() {
        let mut grid = KnowledgeGrid::new(1, 1);
        grid.raise(0, Location::Player(0), CellStatus::Absent);
        assert_eq!(
            grid.raise(0, Location::Player(0), CellStatus::Held),
            Some(CellStatus::Absent)
        );
    }

    #[test]
    fn count_for_tallies_one_column() {
        let mut grid = KnowledgeGrid::new(3, 2);
        grid.raise(0, Location::Player(0), CellStatus::Held);
        grid.raise(1, Location::Player(0), CellStatus::Held);
        grid.raise(2, Location::Player(0), CellStatus::Absent);
        assert_eq!(grid.count_for(Location::Player(0), CellStatus::Held), 2);
        assert_eq!(grid.count_for(Location::Player(0), CellStatus::Absent), 1);
        assert_eq!(grid.count_for(Location::Envelope, CellStatus::Unknown), 3);
    }
}
