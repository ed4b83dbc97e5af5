use core::fmt;

/// Where a card can live: in a player's hand (roster index) or in the
/// solution envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Player(usize),
    Envelope,
}

impl Location {
    /// Column of this location in a grid with `players` roster slots;
    /// the envelope sits after the last player.
    pub const fn column(self, players: usize) -> usize {
        match self {
            Location::Player(index) => index,
            Location::Envelope => players,
        }
    }

    pub const fn is_envelope(self) -> bool {
        matches!(self, Location::Envelope)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Player(index) => write!(f, "player {index}"),
            Location::Envelope => f.write_str("envelope"),
        }
    }
}
