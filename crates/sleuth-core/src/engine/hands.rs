use serde::{Deserialize, Serialize};

/// Hand sizes fixed at game start: the deck divides evenly where it can,
/// and the first `remainder` roster slots absorb the extra cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandAllocation {
    counts: Vec<u8>,
}

impl HandAllocation {
    pub fn deal(total_cards: usize, players: usize) -> Self {
        let base = total_cards / players;
        let remainder = total_cards % players;
        let counts = (0..players)
            .map(|slot| (base + usize::from(slot < remainder)) as u8)
            .collect();
        Self { counts }
    }

    pub fn count(&self, player: usize) -> usize {
        self.counts[player] as usize
    }

    pub fn counts(&self) -> &[u8] {
        &self.counts
    }

    pub fn players(&self) -> usize {
        self.counts.len()
    }
}
