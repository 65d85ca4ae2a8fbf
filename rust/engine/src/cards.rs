use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;

/// Represents one of the four suits in a standard 52-card deck.
/// Suits never affect row strength on their own; they only matter to the
/// oracle when it looks for flushes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    fn index(self) -> u8 {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }

    fn from_index(i: u8) -> Suit {
        match i {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Discriminants are the 1-based rank numbers used by every scoring rule:
/// the deuce is 1 and the ace is 13.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 1,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (10)
    Jack,
    /// Queen (11)
    Queen,
    /// King (12)
    King,
    /// Ace (13)
    Ace,
}

impl Rank {
    pub fn from_u8(v: u8) -> Rank {
        match v {
            1 => Rank::Two,
            2 => Rank::Three,
            3 => Rank::Four,
            4 => Rank::Five,
            5 => Rank::Six,
            6 => Rank::Seven,
            7 => Rank::Eight,
            8 => Rank::Nine,
            9 => Rank::Ten,
            10 => Rank::Jack,
            11 => Rank::Queen,
            12 => Rank::King,
            _ => Rank::Ace,
        }
    }

    /// Rank number in `1..=13`.
    pub fn value(self) -> u8 {
        self as u8
    }

    fn symbol(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    fn from_symbol(c: char) -> Option<Rank> {
        let r = match c.to_ascii_uppercase() {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };
        Some(r)
    }
}

/// A playing card stored as its integer code.
///
/// Codes run from 1 (`2c`) to 52 (`As`): four consecutive codes per rank, in
/// suit order clubs, diamonds, hearts, spades. The code is kept as-is so that
/// a malformed code reaches the oracle and is reported there as an invalid
/// hand instead of being silently clamped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(u8);

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card((rank.value() - 1) * 4 + suit.index() + 1)
    }

    pub fn from_code(code: u8) -> Card {
        Card(code)
    }

    pub fn code(self) -> u8 {
        self.0
    }

    /// `floor((code-1)/4) + 1`.
    pub fn rank_value(self) -> u8 {
        self.0.saturating_sub(1) / 4 + 1
    }

    pub fn rank(self) -> Rank {
        Rank::from_u8(self.rank_value())
    }

    pub fn suit(self) -> Suit {
        Suit::from_index(self.0.saturating_sub(1) % 4)
    }

    pub fn is_valid(self) -> bool {
        (1..=52).contains(&self.0)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "#{}", self.0);
        }
        write!(f, "{}{}", self.rank().symbol(), self.suit().symbol())
    }
}

impl FromStr for Card {
    type Err = ScoringError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || ScoringError::InvalidCardToken {
            token: token.to_string(),
        };
        let mut chars = token.chars();
        let (Some(r), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let rank = Rank::from_symbol(r).ok_or_else(invalid)?;
        let suit = match s.to_ascii_lowercase() {
            'c' => Suit::Clubs,
            'd' => Suit::Diamonds,
            'h' => Suit::Hearts,
            's' => Suit::Spades,
            _ => return Err(invalid()),
        };
        Ok(Card::new(rank, suit))
    }
}

/// Parses a whitespace separated row such as `"As Kd 7h"`.
///
/// Row length is not checked here; that happens when the row is evaluated
/// for a specific position.
///
/// # Errors
///
/// Returns [`ScoringError::InvalidCardToken`] for the first token that is not
/// a two-character rank/suit pair.
///
/// # Examples
///
/// ```
/// use ofc_engine::cards::{parse_row, Rank};
///
/// let row = parse_row("As Kd 7h").unwrap();
/// assert_eq!(row.len(), 3);
/// assert_eq!(row[0].rank(), Rank::Ace);
/// assert_eq!(row[0].code(), 52);
/// ```
pub fn parse_row(notation: &str) -> Result<Vec<Card>, ScoringError> {
    notation.split_whitespace().map(str::parse).collect()
}

/// Rank numbers of a row, sorted ascending.
pub fn sorted_ranks(row: &[Card]) -> Vec<u8> {
    let mut ranks: Vec<u8> = row.iter().map(|c| c.rank_value()).collect();
    ranks.sort_unstable();
    ranks
}

pub fn format_row(row: &[Card]) -> String {
    row.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// All 52 cards in code order.
pub fn full_deck() -> Vec<Card> {
    (1..=52).map(Card::from_code).collect()
}
