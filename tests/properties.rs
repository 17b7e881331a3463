//! Property-based tests for card ordering and hand evaluation.

use proptest::prelude::*;
use proptest::sample::subsequence;

use pokrs::{Card, Hand, HandCategory, HandError, HandEvaluator, Rank, Suit};

fn all_cards() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
        .collect()
}

fn card() -> impl Strategy<Value = Card> {
    (0..Rank::ALL.len(), 0..Suit::ALL.len())
        .prop_map(|(rank, suit)| Card::new(Rank::ALL[rank], Suit::ALL[suit]))
}

/// Five distinct cards in random order.
fn five_cards() -> impl Strategy<Value = Vec<Card>> {
    subsequence(all_cards(), 5).prop_shuffle()
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

proptest! {
    /// Card ordering agrees with comparing (rank, suit) pairs.
    #[test]
    fn prop_card_order_is_rank_then_suit(a in card(), b in card()) {
        prop_assert_eq!(a.cmp(&b), (a.rank.value(), a.suit).cmp(&(b.rank.value(), b.suit)));
        prop_assert_eq!(a == b, a.cmp(&b).is_eq());
    }

    /// Parsing a card's canonical token gives the card back.
    #[test]
    fn prop_card_token_round_trip(c in card()) {
        prop_assert_eq!(Card::parse(&c.to_string()), Ok(c));
    }

    /// Token order never changes the hand or its category.
    #[test]
    fn prop_evaluation_ignores_token_order(cards in five_cards(), reversed in any::<bool>()) {
        let hand = Hand::parse(&join(&cards)).unwrap();

        let mut sorted = cards.clone();
        sorted.sort();
        if reversed {
            sorted.reverse();
        }
        let other = Hand::parse(&join(&sorted)).unwrap();

        prop_assert_eq!(&hand, &other);
        prop_assert_eq!(
            HandEvaluator::new(&hand).describe(),
            HandEvaluator::new(&other).describe()
        );
        prop_assert!(hand.cards().windows(2).all(|pair| pair[0] < pair[1]));
    }

    /// Repeating any card is always reported as cheating.
    #[test]
    fn prop_duplicate_card_is_cheating(cards in five_cards(), from in 0..5usize, to in 0..5usize) {
        prop_assume!(from != to);
        let mut cards = cards;
        cards[to] = cards[from];
        prop_assert_eq!(Hand::parse(&join(&cards)), Err(HandError::Cheating));
    }

    /// The category agrees with the hand's derived queries.
    #[test]
    fn prop_category_matches_queries(cards in five_cards()) {
        let hand = Hand::from_cards(&cards).unwrap();
        let category = HandEvaluator::new(&hand).category();
        let flush = hand.is_one_suit();
        let straight = hand.is_consecutive();
        let max = hand.max_rank_count();

        match category {
            HandCategory::RoyalFlush { .. } | HandCategory::StraightFlush { .. } => {
                prop_assert!(flush && straight);
            }
            HandCategory::FourOfAKind { .. } => prop_assert_eq!(max, 4),
            HandCategory::FullHouse { .. } => {
                prop_assert_eq!(max, 3);
                prop_assert_eq!(hand.cards_by_rank_count(2).len(), 1);
            }
            HandCategory::Flush { .. } => prop_assert!(flush && !straight),
            HandCategory::Straight { .. } => prop_assert!(straight && !flush),
            HandCategory::ThreeOfAKind { .. } => prop_assert_eq!(max, 3),
            HandCategory::TwoPair { low, high } => {
                prop_assert_eq!(max, 2);
                prop_assert!(low < high);
            }
            HandCategory::OnePair { .. } => prop_assert_eq!(hand.cards_by_rank_count(2).len(), 1),
            HandCategory::HighCard { card: high } => {
                prop_assert!(max == 1 && !flush && !straight);
                prop_assert_eq!(high, hand.high_card());
            }
        }
    }
}
