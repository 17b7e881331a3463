//! Five-card hand parsing and derived queries.

use core::fmt;
use core::str::FromStr;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::error::HandError;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

fn count_ranks(cards: &[Card]) -> BTreeMap<Rank, u8> {
    let mut counts = BTreeMap::new();
    for card in cards {
        *counts.entry(card.rank).or_insert(0) += 1;
    }
    counts
}

/// A validated poker hand of five distinct cards.
///
/// The cards are kept sorted by rank and then suit, so two hands built from
/// the same cards in a different order are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    /// Cards sorted in ascending order.
    cards: [Card; HAND_SIZE],
    /// Number of cards for each rank in the hand.
    rank_counts: BTreeMap<Rank, u8>,
}

impl Hand {
    /// Parses a hand from a whitespace separated list of card tokens.
    ///
    /// # Example
    ///
    /// ```
    /// use pokrs::{Hand, Rank};
    ///
    /// let hand = Hand::parse("Jd 10d Ad Qd Kd").unwrap();
    /// assert_eq!(hand.high_card().rank, Rank::Ace);
    /// assert!(hand.is_one_suit());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Missing`] for blank input, [`HandError::Card`] for
    /// the first token that is not a card, and otherwise the errors of
    /// [`Hand::from_cards`].
    pub fn parse(input: &str) -> Result<Self, HandError> {
        if input.trim().is_empty() {
            log::debug!("rejected hand: missing input");
            return Err(HandError::Missing);
        }

        let cards = input
            .split_whitespace()
            .map(Card::parse)
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| log::debug!("rejected hand `{input}`: {err}"))?;

        Self::from_cards(&cards)
    }

    /// Builds a hand from a list of cards in any order.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::WrongSize`] unless there are exactly five cards and
    /// [`HandError::Cheating`] if any card appears twice.
    pub fn from_cards(cards: &[Card]) -> Result<Self, HandError> {
        let mut sorted: [Card; HAND_SIZE] = cards.try_into().map_err(|_| {
            log::debug!("rejected hand: {} cards", cards.len());
            HandError::WrongSize { count: cards.len() }
        })?;
        sorted.sort_unstable();

        if sorted.windows(2).any(|pair| pair[0] == pair[1]) {
            log::debug!("rejected hand: duplicate card");
            return Err(HandError::Cheating);
        }

        Ok(Self::from_sorted(sorted))
    }

    /// Builds a hand from five distinct cards.
    pub(crate) fn from_distinct(mut cards: [Card; HAND_SIZE]) -> Self {
        cards.sort_unstable();
        Self::from_sorted(cards)
    }

    fn from_sorted(cards: [Card; HAND_SIZE]) -> Self {
        let rank_counts = count_ranks(&cards);
        Self { cards, rank_counts }
    }

    /// Returns the cards in ascending order.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns the highest card.
    #[must_use]
    pub const fn high_card(&self) -> Card {
        self.cards[HAND_SIZE - 1]
    }

    /// Returns the lowest card.
    #[must_use]
    pub const fn low_card(&self) -> Card {
        self.cards[0]
    }

    /// Returns whether all cards share one suit.
    #[must_use]
    pub fn is_one_suit(&self) -> bool {
        let suit = self.cards[0].suit;
        self.cards.iter().all(|card| card.suit == suit)
    }

    /// Returns whether the ranks run in consecutive order.
    ///
    /// A hand running from two up to five with an ace on top also counts: the
    /// gap between the last two cards is allowed only when the lowest card is a
    /// two and the highest is an ace. Any other gap breaks the run.
    #[must_use]
    pub fn is_consecutive(&self) -> bool {
        let ace_low = self.low_card().rank == Rank::Two && self.high_card().rank == Rank::Ace;

        self.cards.windows(2).enumerate().all(|(index, pair)| {
            pair[1].rank.value() == pair[0].rank.value() + 1
                || (ace_low && index == HAND_SIZE - 2)
        })
    }

    /// Returns the number of cards of each rank, in ascending rank order.
    #[must_use]
    pub const fn rank_counts(&self) -> &BTreeMap<Rank, u8> {
        &self.rank_counts
    }

    /// Returns the size of the largest group of same-ranked cards.
    #[must_use]
    pub fn max_rank_count(&self) -> u8 {
        self.rank_counts.values().copied().max().unwrap_or(0)
    }

    /// Returns one card for each rank that occurs exactly `count` times.
    ///
    /// Cards are returned in ascending rank order; the representative is the
    /// lowest suited card of its rank.
    #[must_use]
    pub fn cards_by_rank_count(&self, count: u8) -> Vec<Card> {
        self.rank_counts
            .iter()
            .filter(|&(_, &n)| n == count)
            .filter_map(|(rank, _)| self.cards.iter().find(|card| card.rank == *rank))
            .copied()
            .collect()
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
