//! Publish-time resolution.
//!
//! The site renders two unrelated time forms: relative-duration
//! phrases (`3天2小时5分钟前`) on feeds and replies, and a fixed
//! absolute format on member pages and thread headers. The two parsers
//! are independent call paths and are never chained.

use chrono::{DateTime, Duration, FixedOffset, Local};

use crate::error::{Error, Result};
use crate::patterns::{AGO_SUFFIX, REL_DAYS, REL_HOURS, REL_MINUTES};

/// Resolve a relative-duration phrase against the current instant.
///
/// The phrase must end with the `前` marker or the parse fails. Day,
/// hour and minute magnitudes each default to 0 when their unit marker
/// is absent, so `刚刚...前`-style phrases resolve to "now".
///
/// "Now" is evaluated here, at parse time: resolving the same phrase
/// twice yields two different instants. The phrase's granularity is
/// minutes, so this is within its inherent precision.
pub fn publish_to_time(publish: &str) -> Result<DateTime<Local>> {
    if !publish.ends_with(AGO_SUFFIX) {
        return Err(Error::TimeParse(publish.to_string()));
    }

    let get_num = |re: &regex::Regex| -> i64 {
        re.captures(publish)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };

    let days = get_num(&REL_DAYS);
    let hours = get_num(&REL_HOURS);
    let minutes = get_num(&REL_MINUTES);

    let dur = Duration::hours(days * 24 + hours) + Duration::minutes(minutes);
    Ok(Local::now() - dur)
}

/// Parse the fixed absolute form used by join dates and thread
/// "replied until" sentences.
///
/// The surrounding sentence is space-stripped before the timestamp is
/// captured, so the format carries no separator between date and time:
/// `2016-06-0110:16:36+08:00`.
pub fn parse_fixed_time(s: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(s, "%Y-%m-%d%H:%M:%S%:z")
        .map_err(|_| Error::TimeParse(s.to_string()))
}
