//! Hand classification.

use alloc::string::{String, ToString};

use crate::card::Rank;
use crate::error::HandError;
use crate::hand::Hand;
use crate::result::HandCategory;

/// Classifies a [`Hand`] into a [`HandCategory`].
///
/// Rules are checked from the strongest grouping down and the first match
/// wins, so a straight flush is never reported as a plain flush.
#[derive(Debug, Clone, Copy)]
pub struct HandEvaluator<'a> {
    hand: &'a Hand,
}

impl<'a> HandEvaluator<'a> {
    /// Creates an evaluator for the given hand.
    #[must_use]
    pub const fn new(hand: &'a Hand) -> Self {
        Self { hand }
    }

    /// Returns the category of the hand.
    #[must_use]
    pub fn category(&self) -> HandCategory {
        let hand = self.hand;
        let category = match hand.max_rank_count() {
            4 => self.four_of_a_kind(),
            3 => self.three_of_a_kind(),
            _ if hand.is_one_suit() => self.flush(),
            _ if hand.is_consecutive() => self.straight(),
            2 => self.pairs(),
            _ => HandCategory::HighCard {
                card: hand.high_card(),
            },
        };

        log::trace!("{hand}: {category}");
        category
    }

    /// Returns the description of the hand, e.g. `Royal flush, diamonds`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.category().to_string()
    }

    fn group_rank(&self, count: u8) -> Option<Rank> {
        self.hand
            .cards_by_rank_count(count)
            .first()
            .map(|card| card.rank)
    }

    fn four_of_a_kind(&self) -> HandCategory {
        let rank = self.group_rank(4).unwrap_or(self.hand.high_card().rank);
        HandCategory::FourOfAKind { rank }
    }

    fn three_of_a_kind(&self) -> HandCategory {
        let trips = self.group_rank(3).unwrap_or(self.hand.high_card().rank);
        match self.group_rank(2) {
            Some(pair) => HandCategory::FullHouse { trips, pair },
            None => HandCategory::ThreeOfAKind { rank: trips },
        }
    }

    fn flush(&self) -> HandCategory {
        let high = self.hand.high_card();
        if !self.hand.is_consecutive() {
            return HandCategory::Flush {
                high: high.rank,
                suit: high.suit,
            };
        }

        if high.rank == Rank::Ace {
            HandCategory::RoyalFlush { suit: high.suit }
        } else {
            HandCategory::StraightFlush {
                high: high.rank,
                suit: high.suit,
            }
        }
    }

    fn straight(&self) -> HandCategory {
        let cards = self.hand.cards();
        let high = self.hand.high_card();

        // Ace-low: the five under the ace is the top of the straight.
        let high = if high.rank == Rank::Ace && self.hand.low_card().rank == Rank::Two {
            cards[cards.len() - 2]
        } else {
            high
        };

        HandCategory::Straight { high: high.rank }
    }

    fn pairs(&self) -> HandCategory {
        match self.hand.cards_by_rank_count(2).as_slice() {
            [low, high] => HandCategory::TwoPair {
                low: low.rank,
                high: high.rank,
            },
            [pair, ..] => HandCategory::OnePair { rank: pair.rank },
            [] => HandCategory::HighCard {
                card: self.hand.high_card(),
            },
        }
    }
}

/// Parses and classifies a hand, returning its description.
///
/// # Example
///
/// ```
/// assert_eq!(
///     pokrs::evaluate("Qd Qc 7s 7h Qh").unwrap(),
///     "Full house, queens full of sevens"
/// );
/// ```
///
/// # Errors
///
/// Returns a [`HandError`] if the input is not a valid hand.
pub fn evaluate(input: &str) -> Result<String, HandError> {
    let hand = Hand::parse(input)?;
    Ok(HandEvaluator::new(&hand).describe())
}
