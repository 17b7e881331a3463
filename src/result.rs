//! Hand categories produced by evaluation.

use core::fmt;

use crate::card::{Card, Rank, Suit};

/// The category of a five-card hand, with the ranks and suit it is named by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandCategory {
    /// Ace-high straight flush.
    RoyalFlush {
        /// The suit of the flush.
        suit: Suit,
    },
    /// Straight flush below ace-high.
    StraightFlush {
        /// The highest rank.
        high: Rank,
        /// The suit of the flush.
        suit: Suit,
    },
    /// Four cards of one rank.
    FourOfAKind {
        /// The rank of the four cards.
        rank: Rank,
    },
    /// Three cards of one rank and two of another.
    FullHouse {
        /// The rank of the three cards.
        trips: Rank,
        /// The rank of the pair.
        pair: Rank,
    },
    /// Five cards of one suit.
    Flush {
        /// The highest rank.
        high: Rank,
        /// The suit of the flush.
        suit: Suit,
    },
    /// Five cards of consecutive rank.
    Straight {
        /// The highest rank, a five for an ace-low straight.
        high: Rank,
    },
    /// Three cards of one rank.
    ThreeOfAKind {
        /// The rank of the three cards.
        rank: Rank,
    },
    /// Two pairs.
    TwoPair {
        /// The lower pair rank.
        low: Rank,
        /// The higher pair rank.
        high: Rank,
    },
    /// Two cards of one rank.
    OnePair {
        /// The rank of the pair.
        rank: Rank,
    },
    /// None of the above.
    HighCard {
        /// The highest card.
        card: Card,
    },
}

impl HandCategory {
    /// Returns the category name, e.g. `"Full house"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RoyalFlush { .. } => "Royal flush",
            Self::StraightFlush { .. } => "Straight flush",
            Self::FourOfAKind { .. } => "Four of a kind",
            Self::FullHouse { .. } => "Full house",
            Self::Flush { .. } => "Flush",
            Self::Straight { .. } => "Straight",
            Self::ThreeOfAKind { .. } => "Three of a kind",
            Self::TwoPair { .. } => "Two pair",
            Self::OnePair { .. } => "One pair",
            Self::HighCard { .. } => "High card",
        }
    }
}

/// Writes a rank name with its first letter in uppercase.
fn write_capitalized(f: &mut fmt::Formatter<'_>, rank: Rank) -> fmt::Result {
    let name = rank.name();
    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        write!(f, "{}", first.to_ascii_uppercase())?;
    }
    f.write_str(chars.as_str())
}

impl fmt::Display for HandCategory {
    /// Writes the full description, e.g. `Full house, queens full of sevens`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::RoyalFlush { suit } => write!(f, "Royal flush, {suit}"),
            Self::StraightFlush { high, suit } => {
                write_capitalized(f, high)?;
                write!(f, "-high straight flush, {suit}")
            }
            Self::FourOfAKind { rank } => write!(f, "Four of a kind, {}", rank.plural()),
            Self::FullHouse { trips, pair } => write!(
                f,
                "Full house, {} full of {}",
                trips.plural(),
                pair.plural()
            ),
            Self::Flush { high, suit } => {
                write_capitalized(f, high)?;
                write!(f, "-high flush, {suit}")
            }
            Self::Straight { high } => {
                write_capitalized(f, high)?;
                f.write_str("-high straight")
            }
            Self::ThreeOfAKind { rank } => write!(f, "Three of a kind, {}", rank.plural()),
            Self::TwoPair { low, high } => {
                write!(f, "Two pair, {} and {}", low.plural(), high.plural())
            }
            Self::OnePair { rank } => write!(f, "One pair, {}", rank.plural()),
            Self::HighCard { card } => write!(f, "High card, {} of {}", card.rank, card.suit),
        }
    }
}
