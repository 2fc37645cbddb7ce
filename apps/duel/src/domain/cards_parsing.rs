//! Card value parsing from labels (e.g., "K", "7") and loose model output.

use std::str::FromStr;

use super::cards_types::CardValue;
use crate::errors::domain::DomainError;

impl FromStr for CardValue {
    type Err = DomainError;

    /// Parse a single label. Surrounding whitespace is ignored and face
    /// letters are case-insensitive; "10" and anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let value = match token.to_ascii_uppercase().as_str() {
            "2" => CardValue::Two,
            "3" => CardValue::Three,
            "4" => CardValue::Four,
            "5" => CardValue::Five,
            "6" => CardValue::Six,
            "7" => CardValue::Seven,
            "8" => CardValue::Eight,
            "9" => CardValue::Nine,
            "J" => CardValue::Jack,
            "Q" => CardValue::Queen,
            "K" => CardValue::King,
            "A" => CardValue::Ace,
            _ => return Err(DomainError::UnrecognizedCard(token.to_string())),
        };
        Ok(value)
    }
}

/// Parse a label the way a model tends to write it.
///
/// Accepts wrapping quotes or backticks, trailing punctuation and spelled out
/// face names ("King", "ace"), in any nesting: `"Q".`, `'K'.` and `Q."` all
/// read as a card. The error keeps the raw text for the notice.
pub fn parse_card_label(raw: &str) -> Result<CardValue, DomainError> {
    let cleaned = strip_decoration(raw);

    if let Ok(value) = cleaned.parse::<CardValue>() {
        return Ok(value);
    }

    let value = match cleaned.to_ascii_lowercase().as_str() {
        "two" => CardValue::Two,
        "three" => CardValue::Three,
        "four" => CardValue::Four,
        "five" => CardValue::Five,
        "six" => CardValue::Six,
        "seven" => CardValue::Seven,
        "eight" => CardValue::Eight,
        "nine" => CardValue::Nine,
        "jack" => CardValue::Jack,
        "queen" => CardValue::Queen,
        "king" => CardValue::King,
        "ace" => CardValue::Ace,
        _ => return Err(DomainError::UnrecognizedCard(raw.trim().to_string())),
    };
    Ok(value)
}

/// Peel whitespace, trailing punctuation and wrapping quotes until nothing
/// changes, so the order they were written in does not matter.
fn strip_decoration(raw: &str) -> &str {
    let mut current = raw;
    loop {
        let next = current
            .trim()
            .trim_end_matches(|c: char| matches!(c, '.' | '!' | ','))
            .trim_matches(|c: char| matches!(c, '"' | '\'' | '`'));
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Non-panicking helper to parse label tokens into card values.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<CardValue>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<CardValue>())
        .collect()
}
