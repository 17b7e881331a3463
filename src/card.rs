//! Card types and token parsing.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::error::CardError;

/// Card suit.
///
/// Suits never outrank each other during evaluation; the declaration order only
/// gives cards a deterministic sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in ascending order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit for a lowercase suit letter.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'c' => Some(Self::Clubs),
            'd' => Some(Self::Diamonds),
            'h' => Some(Self::Hearts),
            's' => Some(Self::Spades),
            _ => None,
        }
    }

    /// Returns the lowercase suit letter.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
            Self::Hearts => 'h',
            Self::Spades => 's',
        }
    }

    /// Returns the suit name, e.g. `"spades"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
        }
    }
}

impl FromStr for Suit {
    type Err = CardError;

    /// Parses a single lowercase suit letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
        .ok_or_else(|| CardError::InvalidSuit {
            token: s.to_string(),
        })
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, from two up to ace.
///
/// The discriminant is the numeric rank used for ordering (11 = jack,
/// 12 = queen, 13 = king, 14 = ace). The ace always sorts high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Two.
    Two = 2,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the numeric rank in `2..=14`.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank for a numeric value in `2..=14`.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            2..=14 => Some(Self::ALL[(value - 2) as usize]),
            _ => None,
        }
    }

    /// Returns the rank for an uppercase face letter.
    #[must_use]
    pub fn from_face(face: &str) -> Option<Self> {
        match face {
            "J" => Some(Self::Jack),
            "Q" => Some(Self::Queen),
            "K" => Some(Self::King),
            "A" => Some(Self::Ace),
            _ => None,
        }
    }

    /// Returns the rank as it is written in a card token.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns the rank name, e.g. `"queen"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "two",
            Self::Three => "three",
            Self::Four => "four",
            Self::Five => "five",
            Self::Six => "six",
            Self::Seven => "seven",
            Self::Eight => "eight",
            Self::Nine => "nine",
            Self::Ten => "ten",
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
            Self::Ace => "ace",
        }
    }

    /// Returns the plural rank name, e.g. `"queens"` or `"sixes"`.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Two => "twos",
            Self::Three => "threes",
            Self::Four => "fours",
            Self::Five => "fives",
            Self::Six => "sixes",
            Self::Seven => "sevens",
            Self::Eight => "eights",
            Self::Nine => "nines",
            Self::Ten => "tens",
            Self::Jack => "jacks",
            Self::Queen => "queens",
            Self::King => "kings",
            Self::Ace => "aces",
        }
    }

    /// Parses the rank part of a card token.
    ///
    /// `token` is the whole card token and is only used for error reporting.
    fn parse(rank: &str, token: &str) -> Result<Self, CardError> {
        if rank.bytes().all(|b| b.is_ascii_digit()) {
            // Overflowing numbers are out of range as well.
            return rank
                .parse::<u8>()
                .ok()
                .filter(|value| (2..=10).contains(value))
                .and_then(Self::from_value)
                .ok_or_else(|| CardError::RankOutOfRange {
                    token: token.to_string(),
                });
        }

        Self::from_face(rank).ok_or_else(|| CardError::InvalidFaceValue {
            token: token.to_string(),
        })
    }
}

impl FromStr for Rank {
    type Err = CardError;

    /// Parses the rank part of a token, `2` to `10` or `J`, `Q`, `K`, `A`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CardError::Missing);
        }
        Self::parse(s, s)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards order by rank first and then by suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Parses a card token such as `"10d"` or `"Ah"`.
    ///
    /// The last character is the suit and everything before it is the rank.
    ///
    /// # Example
    ///
    /// ```
    /// use pokrs::{Card, Rank, Suit};
    ///
    /// let card = Card::parse("Qh").unwrap();
    /// assert_eq!(card, Card::new(Rank::Queen, Suit::Hearts));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the first [`CardError`] the token violates.
    pub fn parse(token: &str) -> Result<Self, CardError> {
        if token.is_empty() {
            return Err(CardError::Missing);
        }
        if !token.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(CardError::NotAlphanumeric {
                token: token.to_string(),
            });
        }
        if token.len() < 2 {
            return Err(CardError::TooShort {
                token: token.to_string(),
            });
        }

        // ASCII only from here, so byte offsets are char boundaries.
        let (rank, suit) = token.split_at(token.len() - 1);
        let suit = suit
            .chars()
            .next()
            .and_then(Suit::from_char)
            .ok_or_else(|| CardError::InvalidSuit {
                token: token.to_string(),
            })?;
        let rank = Rank::parse(rank, token)?;

        Ok(Self { rank, suit })
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Card {
    /// Writes the canonical token, e.g. `10d`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.to_char())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
