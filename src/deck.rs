//! A shuffled single deck for dealing random hands.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::hand::{HAND_SIZE, Hand};

/// A 52-card deck shuffled with a seeded generator.
///
/// The same seed always deals the same sequence of hands.
///
/// ```
/// use pokrs::Deck;
///
/// let mut deck = Deck::new(42);
/// let hand = deck.deal_hand().unwrap();
/// assert_eq!(hand.cards().len(), 5);
/// assert_eq!(deck.cards_remaining(), 47);
/// ```
pub struct Deck {
    /// Cards left to deal, drawn from the back.
    cards: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled deck with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::create_cards(&mut rng);
        Self { cards, rng }
    }

    fn create_cards(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Collects all dealt cards and shuffles the full deck again.
    pub fn reshuffle(&mut self) {
        self.cards = Self::create_cards(&mut self.rng);
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Draws a card from the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals the next five cards as a hand.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than five cards are
    /// left; the deck is left untouched in that case.
    pub fn deal_hand(&mut self) -> Result<Hand, DealError> {
        let remaining = self.cards.len();
        if remaining < HAND_SIZE {
            return Err(DealError::NotEnoughCards { remaining });
        }

        let drawn = self.cards.split_off(remaining - HAND_SIZE);
        Ok(Hand::from_distinct(core::array::from_fn(|i| drawn[i])))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(0)
    }
}
