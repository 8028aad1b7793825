//! Leaderboard extraction for the wealth and spending boards.

use dom_query::Document;

use crate::balance::parse_balance;
use crate::error::{Error, Result};
use crate::record::Leaderboard;
use crate::text::remove_space;

/// Index of the last table row worth scanning. The boards interleave
/// data rows with decorative spacer rows, so this caps the result at
/// 25 ranked entries.
const LAST_ROW: usize = 48;

/// Extract the ranked rows of a leaderboard page.
///
/// Odd-indexed rows are decorative and skipped. Each kept row declares
/// itself as `rank.username`; a row without that separator aborts the
/// extraction, as does a balance area whose icons and numerals
/// disagree.
pub fn parse_leaderboard(doc: &Document) -> Result<Vec<Leaderboard>> {
    let mut entries = Vec::new();

    for (i, row) in doc.select("#Main .box .inner tr").iter().enumerate() {
        if i % 2 != 0 {
            continue;
        }
        if i > LAST_ROW {
            break;
        }

        let heading = remove_space(&row.select("h2").text());
        let (rank, username) = heading.split_once('.').ok_or_else(|| {
            Error::Structure(format!("leaderboard row {i} missing rank separator"))
        })?;

        entries.push(Leaderboard {
            index: rank.parse().unwrap_or(0),
            username: username.to_string(),
            balance: parse_balance(&row.select(".balance_area"))?,
        });
    }

    Ok(entries)
}
