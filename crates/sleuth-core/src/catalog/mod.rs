//! Static card catalog: each edition partitions a fixed deck into
//! suspects, weapons, and rooms.

use crate::model::category::Category;
use core::fmt;
use core::str::FromStr;

const CLASSIC_SUSPECTS: [&str; 6] = [
    "Miss Scarlett",
    "Colonel Mustard",
    "Mrs. White",
    "Reverend Green",
    "Mrs. Peacock",
    "Professor Plum",
];

const CLASSIC_WEAPONS: [&str; 6] = [
    "Candlestick",
    "Dagger",
    "Lead Pipe",
    "Revolver",
    "Rope",
    "Wrench",
];

const CLASSIC_ROOMS: [&str; 9] = [
    "Kitchen",
    "Ballroom",
    "Conservatory",
    "Dining Room",
    "Billiard Room",
    "Library",
    "Lounge",
    "Hall",
    "Study",
];

const MASTER_SUSPECTS: [&str; 10] = [
    "Colonel Mustard",
    "Professor Plum",
    "Mrs. Peacock",
    "Mr. Green",
    "Miss Scarlet",
    "Mrs. White",
    "Miss Peach",
    "Monsieur Brunette",
    "Madame Rose",
    "Sergeant Gray",
];

const MASTER_WEAPONS: [&str; 8] = [
    "Candlestick",
    "Knife",
    "Lead Pipe",
    "Revolver",
    "Rope",
    "Wrench",
    "Poison",
    "Horseshoe",
];

const MASTER_ROOMS: [&str; 12] = [
    "Carriage House",
    "Trophy Room",
    "Kitchen",
    "Dining Room",
    "Drawing Room",
    "Gazebo",
    "Courtyard",
    "Fountain",
    "Library",
    "Billiard Room",
    "Studio",
    "Conservatory",
];

/// A published game edition. Card membership is fixed; the edition is
/// persisted by its symbolic key, never by the card lists themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edition {
    Classic,
    MasterDetective,
}

impl Edition {
    pub const ALL: [Edition; 2] = [Edition::Classic, Edition::MasterDetective];

    /// Stable key used by the state codec.
    pub const fn key(self) -> &'static str {
        match self {
            Edition::Classic => "classic",
            Edition::MasterDetective => "master_detective",
        }
    }

    /// Cards of one category, in display order.
    pub const fn cards(self, category: Category) -> &'static [&'static str] {
        match (self, category) {
            (Edition::Classic, Category::Suspect) => &CLASSIC_SUSPECTS,
            (Edition::Classic, Category::Weapon) => &CLASSIC_WEAPONS,
            (Edition::Classic, Category::Room) => &CLASSIC_ROOMS,
            (Edition::MasterDetective, Category::Suspect) => &MASTER_SUSPECTS,
            (Edition::MasterDetective, Category::Weapon) => &MASTER_WEAPONS,
            (Edition::MasterDetective, Category::Room) => &MASTER_ROOMS,
        }
    }

    /// The whole deck in canonical order: suspects, then weapons, then rooms.
    pub fn deck(self) -> impl Iterator<Item = &'static str> {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.cards(category).iter().copied())
    }

    pub fn deck_size(self) -> usize {
        Category::ALL
            .iter()
            .map(|category| self.cards(*category).len())
            .sum()
    }

    /// Category of a card name, exact match. `None` for cards outside
    /// this edition.
    pub fn category_of(self, name: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| self.cards(*category).contains(&name))
    }

    /// Position of a card in the canonical deck order.
    pub fn card_index(self, name: &str) -> Option<usize> {
        self.deck().position(|card| card == name)
    }

    pub fn card_at(self, index: usize) -> Option<&'static str> {
        self.deck().nth(index)
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Edition::Classic => "Classic",
            Edition::MasterDetective => "Master Detective",
        };
        f.write_str(label)
    }
}

impl FromStr for Edition {
    type Err = UnknownEdition;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "classic" => Ok(Edition::Classic),
            "master_detective" => Ok(Edition::MasterDetective),
            other => Err(UnknownEdition(other.to_string())),
        }
    }
}

/// Raised when an edition key does not name a known catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown edition key '{0}'")]
pub struct UnknownEdition(pub String);
