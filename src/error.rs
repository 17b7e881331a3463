//! Error types for card parsing, hand validation, and dealing.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while parsing a single card token.
///
/// When a token breaks several rules only the first one is reported, in the
/// order the variants are declared here. The suit is checked before the rank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The token is empty.
    #[error("invalid card: missing card")]
    Missing,
    /// The token contains characters other than ASCII letters and digits.
    #[error("invalid card: `{token}` contains non-alphanumeric characters")]
    NotAlphanumeric {
        /// The rejected token.
        token: String,
    },
    /// The token is shorter than two characters.
    #[error("invalid card: `{token}` is too short")]
    TooShort {
        /// The rejected token.
        token: String,
    },
    /// The last character is not one of `c`, `d`, `h` or `s`.
    #[error("invalid card: `{token}` has an invalid suit")]
    InvalidSuit {
        /// The rejected token.
        token: String,
    },
    /// The numeric rank is outside `2..=10`.
    #[error("invalid card: `{token}` has a rank outside 2 to 10")]
    RankOutOfRange {
        /// The rejected token.
        token: String,
    },
    /// The rank is not numeric and not one of `J`, `Q`, `K` or `A`.
    #[error("invalid card: `{token}` has an invalid face value")]
    InvalidFaceValue {
        /// The rejected token.
        token: String,
    },
}

/// Errors that can occur while building a hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// The input is empty.
    #[error("invalid hand: missing hand")]
    Missing,
    /// The input did not contain exactly five cards.
    #[error("invalid hand: expected 5 cards, found {count}")]
    WrongSize {
        /// Number of cards found.
        count: usize,
    },
    /// The same card appears more than once.
    #[error("No cheating!")]
    Cheating,
    /// One of the tokens is not a valid card.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards left in the deck.
    #[error("not enough cards in the deck ({remaining} left)")]
    NotEnoughCards {
        /// Cards left in the deck.
        remaining: usize,
    },
}
