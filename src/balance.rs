//! Coin balance decoding.
//!
//! Balance areas interleave denomination icons with numerals:
//! `<img src=".../gold@2x.png">3 <img src=".../silver@2x.png">7 ...`.
//! The spending leaderboard renders a plain `$amount` instead.

use dom_query::Selection;

use crate::error::{Error, Result};
use crate::patterns::NUMBER;
use crate::record::Balance;
use crate::text::remove_space;

/// Tier markers looked up in an icon's image path, case-sensitive.
const TIER_MARKERS: [&str; 3] = ["gold", "silver", "bronze"];

/// Decode a balance area into a [`Balance`].
///
/// Every numeral in the selection's space-stripped text and every
/// `img` src are collected in document order. With no icons present
/// the text is read as a plain monetary string: a leading `$` parses
/// the remainder into `money`. With icons present their count must
/// equal the numeral count - the encoding is strictly interleaved, and
/// a mismatch means the markup shifted under us.
///
/// An icon whose path carries none of the known tier markers is
/// dropped from the tally together with its numeral. Malformed markup
/// therefore under-counts rather than erroring.
pub fn parse_balance(sel: &Selection) -> Result<Balance> {
    let mut balance = Balance::default();

    let text = remove_space(&sel.text());
    let icons = sel.select("img");

    if !icons.exists() {
        if let Some(amount) = text.strip_prefix('$') {
            balance.money = amount.parse().unwrap_or(0.0);
        }
        return Ok(balance);
    }

    let numerals: Vec<i32> = NUMBER
        .find_iter(&text)
        .map(|m| m.as_str().parse().unwrap_or(0))
        .collect();

    let sources: Vec<String> = icons
        .iter()
        .map(|icon| icon.attr("src").map(|s| s.to_string()).unwrap_or_default())
        .collect();

    if sources.len() != numerals.len() {
        return Err(Error::Balance(format!(
            "{} icons against {} numerals",
            sources.len(),
            numerals.len()
        )));
    }

    for (src, num) in sources.iter().zip(numerals) {
        match TIER_MARKERS.iter().find(|m| src.contains(*m)) {
            Some(&"gold") => balance.gold = num,
            Some(&"silver") => balance.silver = num,
            Some(&"bronze") => balance.bronze = num,
            _ => {}
        }
    }

    Ok(balance)
}
