//! A five-card poker hand parser and classifier with optional `no_std` support.
//!
//! A hand is written as five space separated card tokens, each a rank (`2` to
//! `10`, `J`, `Q`, `K` or `A`) followed by a lowercase suit letter (`c`, `d`,
//! `h` or `s`). [`Hand`] parses and validates the cards and [`HandEvaluator`]
//! names the best category the hand makes.
//!
//! # Example
//!
//! ```
//! use pokrs::{Hand, HandCategory, HandEvaluator, Rank};
//!
//! let hand: Hand = "3s Kc 3h 2d Kh".parse().unwrap();
//! let evaluator = HandEvaluator::new(&hand);
//! assert_eq!(
//!     evaluator.category(),
//!     HandCategory::TwoPair { low: Rank::Three, high: Rank::King }
//! );
//! assert_eq!(evaluator.describe(), "Two pair, threes and kings");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod evaluator;
pub mod hand;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{CardError, DealError, HandError};
pub use evaluator::{HandEvaluator, evaluate};
pub use hand::{HAND_SIZE, Hand};
pub use result::HandCategory;
