//! Core card types: CardValue and Hand.

use std::fmt;

/// Face values used in this variant, declared low to high.
///
/// There is no "10"; the derived `Ord` follows declaration order and is the
/// comparison used for round resolution.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CardValue {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Jack,
    Queen,
    King,
    Ace,
}

impl CardValue {
    /// All values in ascending order.
    pub const ALL: [CardValue; 12] = [
        CardValue::Two,
        CardValue::Three,
        CardValue::Four,
        CardValue::Five,
        CardValue::Six,
        CardValue::Seven,
        CardValue::Eight,
        CardValue::Nine,
        CardValue::Jack,
        CardValue::Queen,
        CardValue::King,
        CardValue::Ace,
    ];

    /// Position in the fixed order (2 is 0, A is 11).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-token label as printed on the card ("2".."9", "J", "Q", "K", "A").
    pub fn label(self) -> &'static str {
        match self {
            CardValue::Two => "2",
            CardValue::Three => "3",
            CardValue::Four => "4",
            CardValue::Five => "5",
            CardValue::Six => "6",
            CardValue::Seven => "7",
            CardValue::Eight => "8",
            CardValue::Nine => "9",
            CardValue::Jack => "J",
            CardValue::Queen => "Q",
            CardValue::King => "K",
            CardValue::Ace => "A",
        }
    }
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cards held by one player, in deal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand(Vec<CardValue>);

impl Hand {
    pub fn new(cards: Vec<CardValue>) -> Self {
        Self(cards)
    }

    pub fn contains(&self, card: CardValue) -> bool {
        self.0.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[CardValue] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardValue> {
        self.0.iter()
    }

    /// Remove `card`, returning it if it was held.
    pub(crate) fn take(&mut self, card: CardValue) -> Option<CardValue> {
        let pos = self.0.iter().position(|&c| c == card)?;
        Some(self.0.remove(pos))
    }
}

impl From<Vec<CardValue>> for Hand {
    fn from(cards: Vec<CardValue>) -> Self {
        Self(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.0.iter().map(|c| c.label()).collect();
        write!(f, "[{}]", labels.join(", "))
    }
}
