//! Avatar catalog.
//!
//! Each seat plays as one avatar, which fixes the player's colour and the
//! emoji shown next to their name. The four animals are the default seat
//! order; the four gems are the character-select roster.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A selectable player avatar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Avatar {
    Fox,
    Frog,
    Cat,
    Octo,
    Ruby,
    Sapphire,
    Emerald,
    Amber,
}

impl Avatar {
    /// Full catalog.
    pub const ALL: [Avatar; 8] = [
        Avatar::Fox,
        Avatar::Frog,
        Avatar::Cat,
        Avatar::Octo,
        Avatar::Ruby,
        Avatar::Sapphire,
        Avatar::Emerald,
        Avatar::Amber,
    ];

    /// Avatar given to each seat when none is chosen.
    pub const SEAT_DEFAULTS: [Avatar; 4] = [Avatar::Fox, Avatar::Frog, Avatar::Cat, Avatar::Octo];

    /// Default avatar for a seat, wrapping past the fourth.
    #[must_use]
    pub fn for_seat(seat: usize) -> Self {
        Self::SEAT_DEFAULTS[seat % Self::SEAT_DEFAULTS.len()]
    }

    /// Look an avatar up by its id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }

    /// Stable lowercase identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Avatar::Fox => "fox",
            Avatar::Frog => "frog",
            Avatar::Cat => "cat",
            Avatar::Octo => "octo",
            Avatar::Ruby => "ruby",
            Avatar::Sapphire => "sapphire",
            Avatar::Emerald => "emerald",
            Avatar::Amber => "amber",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Avatar::Fox => "Fox",
            Avatar::Frog => "Frog",
            Avatar::Cat => "Cat",
            Avatar::Octo => "Octo",
            Avatar::Ruby => "Ruby",
            Avatar::Sapphire => "Sapphire",
            Avatar::Emerald => "Emerald",
            Avatar::Amber => "Amber",
        }
    }

    /// Player colour as a hex string.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Avatar::Fox => "#ff6b9d",
            Avatar::Frog => "#4ecdc4",
            Avatar::Cat => "#ffd93d",
            Avatar::Octo => "#c44dff",
            Avatar::Ruby => "#FF4757",
            Avatar::Sapphire => "#3742FA",
            Avatar::Emerald => "#2ED573",
            Avatar::Amber => "#FFA502",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Avatar::Fox => "🦊",
            Avatar::Frog => "🐸",
            Avatar::Cat => "🐱",
            Avatar::Octo => "🐙",
            Avatar::Ruby => "🔴",
            Avatar::Sapphire => "🔵",
            Avatar::Emerald => "🟢",
            Avatar::Amber => "🟡",
        }
    }
}

impl fmt::Display for Avatar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
