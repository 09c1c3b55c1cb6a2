//! Publication count cards stacked like pages of a book.
//!
//! The deck owns which card is on top; clicking the stack advances it.

use serde::{Deserialize, Serialize};

use crate::stats::{PublicationStats, StatCard, StatKind};

/// Where a card sits in the stack relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardPlacement {
    Top,
    Next,
    Behind,
}

impl CardPlacement {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Next => "next",
            Self::Behind => "behind",
        }
    }

    #[must_use]
    pub const fn z_index(&self) -> i32 {
        match self {
            Self::Top => 20,
            Self::Next => 10,
            Self::Behind => 5,
        }
    }

    /// Horizontal offset in pixels.
    #[must_use]
    pub const fn offset_x(&self) -> i32 {
        match self {
            Self::Top => 40,
            Self::Next => 30,
            Self::Behind => 20,
        }
    }

    /// Rotation in degrees.
    #[must_use]
    pub const fn rotate(&self) -> i32 {
        match self {
            Self::Top => -2,
            Self::Next => 2,
            Self::Behind => 5,
        }
    }

    #[must_use]
    pub const fn scale(&self) -> &'static str {
        match self {
            Self::Top => "1",
            Self::Next => "0.95",
            Self::Behind => "0.9",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDeck {
    cards: Vec<StatCard>,
    active: usize,
}

impl StatDeck {
    /// Journals, conferences, books, in that order. No stats means an empty deck.
    pub fn from_stats(stats: Option<&PublicationStats>) -> Self {
        let cards = match stats {
            Some(stats) => vec![
                StatCard::new(StatKind::Journals, stats.journals),
                StatCard::new(StatKind::Conferences, stats.conferences),
                StatCard::new(StatKind::Books, stats.books),
            ],
            None => Vec::new(),
        };
        Self { cards, active: 0 }
    }

    pub fn cards(&self) -> &[StatCard] {
        &self.cards
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Flip the top card to the back of the stack.
    pub fn advance(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.active = (self.active + 1) % self.cards.len();
    }

    pub fn placement(&self, index: usize) -> CardPlacement {
        if index == self.active {
            CardPlacement::Top
        } else if !self.cards.is_empty() && (self.active + 1) % self.cards.len() == index {
            CardPlacement::Next
        } else {
            CardPlacement::Behind
        }
    }

    /// Cards paired with their placement, in deck order.
    pub fn placed(&self) -> impl Iterator<Item = (&StatCard, CardPlacement)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, card)| (card, self.placement(index)))
    }
}
