//! Card parsing integration tests.

use pokrs::{Card, CardError, Rank, Suit};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn token(s: &str) -> String {
    s.to_string()
}

#[test]
fn parses_number_and_face_ranks() {
    assert_eq!(Card::parse("2c").unwrap(), card(Rank::Two, Suit::Clubs));
    assert_eq!(Card::parse("10d").unwrap(), card(Rank::Ten, Suit::Diamonds));
    assert_eq!(Card::parse("Jh").unwrap(), card(Rank::Jack, Suit::Hearts));
    assert_eq!(Card::parse("Qs").unwrap(), card(Rank::Queen, Suit::Spades));
    assert_eq!(Card::parse("Kc").unwrap(), card(Rank::King, Suit::Clubs));
    assert_eq!(Card::parse("Ad").unwrap(), card(Rank::Ace, Suit::Diamonds));

    let parsed: Card = "9h".parse().unwrap();
    assert_eq!(parsed.rank.value(), 9);
    assert_eq!(parsed.suit, Suit::Hearts);
}

#[test]
fn missing_and_malformed_tokens() {
    assert_eq!(Card::parse("").unwrap_err(), CardError::Missing);
    assert_eq!(
        Card::parse("A-h").unwrap_err(),
        CardError::NotAlphanumeric { token: token("A-h") }
    );
    assert_eq!(
        Card::parse("5.5h").unwrap_err(),
        CardError::NotAlphanumeric {
            token: token("5.5h")
        }
    );
    assert_eq!(
        Card::parse("A h").unwrap_err(),
        CardError::NotAlphanumeric { token: token("A h") }
    );
    assert_eq!(
        Card::parse("h").unwrap_err(),
        CardError::TooShort { token: token("h") }
    );
}

#[test]
fn invalid_suits() {
    assert_eq!(
        Card::parse("2S").unwrap_err(),
        CardError::InvalidSuit { token: token("2S") }
    );
    assert_eq!(
        Card::parse("Ax").unwrap_err(),
        CardError::InvalidSuit { token: token("Ax") }
    );
    // Suit is checked before rank.
    assert_eq!(
        Card::parse("13p").unwrap_err(),
        CardError::InvalidSuit { token: token("13p") }
    );
}

#[test]
fn invalid_ranks() {
    assert_eq!(
        Card::parse("0d").unwrap_err(),
        CardError::RankOutOfRange { token: token("0d") }
    );
    assert_eq!(
        Card::parse("1d").unwrap_err(),
        CardError::RankOutOfRange { token: token("1d") }
    );
    assert_eq!(
        Card::parse("11d").unwrap_err(),
        CardError::RankOutOfRange { token: token("11d") }
    );
    assert_eq!(
        Card::parse("99999999999d").unwrap_err(),
        CardError::RankOutOfRange {
            token: token("99999999999d")
        }
    );
    assert_eq!(
        Card::parse("Th").unwrap_err(),
        CardError::InvalidFaceValue { token: token("Th") }
    );
    assert_eq!(
        Card::parse("jh").unwrap_err(),
        CardError::InvalidFaceValue { token: token("jh") }
    );
    assert_eq!(
        Card::parse("KKh").unwrap_err(),
        CardError::InvalidFaceValue { token: token("KKh") }
    );
}

#[test]
fn error_messages_name_the_cause() {
    assert_eq!(CardError::Missing.to_string(), "invalid card: missing card");
    assert_eq!(
        Card::parse("2S").unwrap_err().to_string(),
        "invalid card: `2S` has an invalid suit"
    );
    assert_eq!(
        Card::parse("11d").unwrap_err().to_string(),
        "invalid card: `11d` has a rank outside 2 to 10"
    );
}

#[test]
fn orders_by_rank_then_suit() {
    assert!(card(Rank::Two, Suit::Spades) < card(Rank::Three, Suit::Clubs));
    assert!(card(Rank::King, Suit::Spades) < card(Rank::Ace, Suit::Clubs));
    assert!(card(Rank::Nine, Suit::Clubs) < card(Rank::Nine, Suit::Diamonds));
    assert!(card(Rank::Nine, Suit::Diamonds) < card(Rank::Nine, Suit::Hearts));
    assert!(card(Rank::Nine, Suit::Hearts) < card(Rank::Nine, Suit::Spades));
}

#[test]
fn display_names() {
    assert_eq!(Rank::Six.name(), "six");
    assert_eq!(Rank::Six.plural(), "sixes");
    assert_eq!(Rank::Seven.plural(), "sevens");
    assert_eq!(Rank::Ace.plural(), "aces");
    assert_eq!(Rank::Ten.to_string(), "ten");
    assert_eq!(Suit::Spades.name(), "spades");
    assert_eq!(Suit::Clubs.to_string(), "clubs");
}

#[test]
fn canonical_tokens() {
    assert_eq!(card(Rank::Ten, Suit::Diamonds).to_string(), "10d");
    assert_eq!(card(Rank::Ace, Suit::Hearts).to_string(), "Ah");
    assert_eq!(card(Rank::Two, Suit::Clubs).to_string(), "2c");

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let card = card(rank, suit);
            assert_eq!(Card::parse(&card.to_string()).unwrap(), card);
            assert_eq!(Rank::from_value(rank.value()), Some(rank));
        }
        assert_eq!(Suit::from_char(suit.to_char()), Some(suit));
    }

    assert_eq!(Rank::from_value(1), None);
    assert_eq!(Rank::from_value(15), None);
}

#[test]
fn rank_and_suit_parse_from_token_parts() {
    for rank in Rank::ALL {
        assert_eq!(rank.symbol().parse::<Rank>().unwrap(), rank);
    }
    for suit in Suit::ALL {
        assert_eq!(suit.to_char().to_string().parse::<Suit>().unwrap(), suit);
    }

    assert_eq!("".parse::<Rank>().unwrap_err(), CardError::Missing);
    assert_eq!(
        "11".parse::<Rank>().unwrap_err(),
        CardError::RankOutOfRange { token: token("11") }
    );
    assert_eq!(
        "T".parse::<Rank>().unwrap_err(),
        CardError::InvalidFaceValue { token: token("T") }
    );
    assert_eq!(
        "S".parse::<Suit>().unwrap_err(),
        CardError::InvalidSuit { token: token("S") }
    );
    assert_eq!(
        "hs".parse::<Suit>().unwrap_err(),
        CardError::InvalidSuit { token: token("hs") }
    );
    assert_eq!(
        "".parse::<Suit>().unwrap_err(),
        CardError::InvalidSuit { token: token("") }
    );
}
