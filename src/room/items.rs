//! Tracked items and their closed status sets.

use crate::status_enum;
use serde::{Deserialize, Serialize};
use std::fmt;

status_enum! {
    /// Where the clothes are: floor -> hand -> hamper.
    pub enum Clothes {
        Floor => "floor",
        Hand => "hand",
        Hamper => "hamper",
    }
    tidy: [Hamper]
}

status_enum! {
    /// Where the books are: scattered -> hand -> shelf.
    pub enum Books {
        Scattered => "scattered",
        Hand => "hand",
        Shelf => "shelf",
    }
    tidy: [Shelf]
}

status_enum! {
    /// Wastebin fill level: full -> empty.
    pub enum Wastebin {
        Full => "full",
        Empty => "empty",
    }
    tidy: [Empty]
}

/// Key of a tracked item in a serialized room state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Item {
    Clothes,
    Books,
    Wastebin,
}

impl Item {
    /// Every key, in serialization order.
    pub const ALL: [Item; 3] = [Item::Clothes, Item::Books, Item::Wastebin];

    pub fn key(&self) -> &'static str {
        match self {
            Item::Clothes => "clothes",
            Item::Books => "books",
            Item::Wastebin => "wastebin",
        }
    }

    /// Wire labels accepted for this item.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Item::Clothes => Clothes::LABELS,
            Item::Books => Books::LABELS,
            Item::Wastebin => Wastebin::LABELS,
        }
    }

    pub fn from_key(key: &str) -> Option<Item> {
        Item::ALL.into_iter().find(|item| item.key() == key)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One item set to one status: the unit every mutating action writes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Placement {
    Clothes(Clothes),
    Books(Books),
    Wastebin(Wastebin),
}

impl Placement {
    pub fn item(&self) -> Item {
        match self {
            Placement::Clothes(_) => Item::Clothes,
            Placement::Books(_) => Item::Books,
            Placement::Wastebin(_) => Item::Wastebin,
        }
    }

    /// Wire label of the status being placed.
    pub fn label(&self) -> &'static str {
        match self {
            Placement::Clothes(c) => c.label(),
            Placement::Books(b) => b.label(),
            Placement::Wastebin(w) => w.label(),
        }
    }
}

impl From<Clothes> for Placement {
    fn from(value: Clothes) -> Self {
        Placement::Clothes(value)
    }
}

impl From<Books> for Placement {
    fn from(value: Books) -> Self {
        Placement::Books(value)
    }
}

impl From<Wastebin> for Placement {
    fn from(value: Wastebin) -> Self {
        Placement::Wastebin(value)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.item(), self.label())
    }
}
