use core::fmt;
use serde::{Deserialize, Serialize};

/// One cell of the knowledge matrix. The variants form a total order;
/// a cell may only ever move upward through it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CellStatus {
    #[default]
    Unknown = 0,
    Absent = 1,
    Held = 2,
    Solution = 3,
}

impl CellStatus {
    /// Display symbol used in the summary table.
    pub const fn symbol(self) -> &'static str {
        match self {
            CellStatus::Unknown => "",
            CellStatus::Absent => "✗",
            CellStatus::Held => "✓",
            CellStatus::Solution => "★",
        }
    }

    /// True for the statuses that pin a card to a location.
    pub const fn is_positive(self) -> bool {
        matches!(self, CellStatus::Held | CellStatus::Solution)
    }
}

impl fmt::Display for CellStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
