use pokrs::{Card, Deck, Hand, HandCategory, HandError, HandEvaluator, Suit};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Classifies a hand string; a missing input is rejected like an empty one.
#[wasm_bindgen]
pub fn evaluate(input: Option<String>) -> Result<String, JsValue> {
    let hand = parse_hand(input).map_err(js_err)?;
    Ok(HandEvaluator::new(&hand).describe())
}

#[wasm_bindgen]
pub fn analyze(input: Option<String>) -> Result<JsValue, JsValue> {
    let hand = parse_hand(input).map_err(js_err)?;
    to_js_value(&JsAnalysis::from_hand(&hand))
}

#[wasm_bindgen]
pub struct WasmDeck {
    deck: Deck,
}

#[wasm_bindgen]
impl WasmDeck {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            deck: Deck::new(seed as u64),
        }
    }

    pub fn reshuffle(&mut self) {
        self.deck.reshuffle();
    }

    pub fn cards_remaining(&self) -> u32 {
        self.deck.cards_remaining() as u32
    }

    pub fn deal(&mut self) -> Result<JsValue, JsValue> {
        let hand = self.deck.deal_hand().map_err(js_err)?;
        to_js_value(&JsAnalysis::from_hand(&hand))
    }
}

fn parse_hand(input: Option<String>) -> Result<Hand, HandError> {
    let input = input.ok_or(HandError::Missing)?;
    Hand::parse(&input)
}

#[derive(Serialize)]
struct JsCard {
    token: String,
    rank: u8,
    suit: &'static str,
}

#[derive(Serialize)]
struct JsAnalysis {
    cards: Vec<JsCard>,
    category: &'static str,
    description: String,
    one_suit: bool,
    consecutive: bool,
}

impl JsAnalysis {
    fn from_hand(hand: &Hand) -> Self {
        let category = HandEvaluator::new(hand).category();
        Self {
            cards: hand.cards().iter().copied().map(card_to_js).collect(),
            category: category_to_str(category),
            description: category.to_string(),
            one_suit: hand.is_one_suit(),
            consecutive: hand.is_consecutive(),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        token: card.to_string(),
        rank: card.rank.value(),
        suit: suit_to_str(card.suit),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Clubs => "Clubs",
        Suit::Diamonds => "Diamonds",
        Suit::Hearts => "Hearts",
        Suit::Spades => "Spades",
    }
}

fn category_to_str(category: HandCategory) -> &'static str {
    match category {
        HandCategory::RoyalFlush { .. } => "RoyalFlush",
        HandCategory::StraightFlush { .. } => "StraightFlush",
        HandCategory::FourOfAKind { .. } => "FourOfAKind",
        HandCategory::FullHouse { .. } => "FullHouse",
        HandCategory::Flush { .. } => "Flush",
        HandCategory::Straight { .. } => "Straight",
        HandCategory::ThreeOfAKind { .. } => "ThreeOfAKind",
        HandCategory::TwoPair { .. } => "TwoPair",
        HandCategory::OnePair { .. } => "OnePair",
        HandCategory::HighCard { .. } => "HighCard",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
