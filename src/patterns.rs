//! Compiled regex patterns and text markers used by the extractors.
//!
//! All patterns are compiled once at startup using `LazyLock`. They run
//! against space-stripped text (see [`crate::text::remove_space`]), so
//! none of them account for whitespace.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text markers
// =============================================================================

/// Suffix marking a relative-duration phrase ("... ago").
pub const AGO_SUFFIX: &str = "前";

/// Prefix marking the last-reply-author token of a topic metadata line.
pub const LAST_REPLY_PREFIX: &str = "最后回复来自";

/// Client suffix marker on reply publish phrases ("3小时前 via Android").
pub const VIA_MARKER: &str = "via";

/// Suffix of the unread-notification badge text.
pub const NOTIFICATION_SUFFIX: &str = "条未读提醒";

/// Field delimiter of topic metadata lines.
pub const BULLET: char = '•';

/// Field delimiter of detail headers and postscript headers.
pub const MIDDLE_DOT: char = '·';

// =============================================================================
// Numeric Extraction Patterns
// =============================================================================

/// Matches any run of digits.
pub static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("NUMBER regex"));

/// Day magnitude of a relative-duration phrase.
pub static REL_DAYS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)天").expect("REL_DAYS regex"));

/// Hour magnitude of a relative-duration phrase.
pub static REL_HOURS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)小时").expect("REL_HOURS regex"));

/// Minute magnitude of a relative-duration phrase.
pub static REL_MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)分钟").expect("REL_MINUTES regex"));

// =============================================================================
// Sentence Patterns (structural - a miss aborts the record)
// =============================================================================

/// The member-page summary sentence: ordinal, join date, activity rank.
pub static MEMBER_INFO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"V2EX第(\d+)号会员，加入于(.+)今日活跃度排名(\d+)").expect("MEMBER_INFO regex")
});

/// The home-page footer sentence: online, online record, version label.
pub static COMMUNITY_FOOTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)人在线最高记录(\d+).+VERSION:(.+?)·").expect("COMMUNITY_FOOTER regex")
});

/// The thread header sentence: reply total and most-recent-reply time.
pub static REPLY_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)回复\|直到(.+)").expect("REPLY_COUNT regex"));

// =============================================================================
// Stat Patterns (best-effort - a miss defaults to zero)
// =============================================================================

/// Click count in a topic stats line.
pub static STAT_CLICKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)次点击").expect("STAT_CLICKS regex"));

/// Thanks count in a topic stats line.
pub static STAT_THANKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)人感谢").expect("STAT_THANKS regex"));

/// Favorite count in a topic stats line.
pub static STAT_FAVORITES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)人收藏").expect("STAT_FAVORITES regex"));

/// Extract the first capture of `re` from `text` as an integer.
///
/// Best-effort by design: no match, or a capture that overflows,
/// yields 0.
#[must_use]
pub fn capture_num(re: &Regex, text: &str) -> i32 {
    re.captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_info_matches_stripped_sentence() {
        let s = "V2EX第12345号会员，加入于2016-06-0110:16:36+08:00今日活跃度排名432";
        let caps = MEMBER_INFO.captures(s).expect("should match");
        assert_eq!(&caps[1], "12345");
        assert_eq!(&caps[2], "2016-06-0110:16:36+08:00");
        assert_eq!(&caps[3], "432");
    }

    #[test]
    fn community_footer_matches_stripped_sentence() {
        let s = "社区4957人在线最高记录6679©2021V2EX·VERSION:a51eb2d·27ms·UTC08:00";
        let caps = COMMUNITY_FOOTER.captures(s).expect("should match");
        assert_eq!(&caps[1], "4957");
        assert_eq!(&caps[2], "6679");
        assert_eq!(&caps[3], "a51eb2d");
    }

    #[test]
    fn reply_count_matches_stripped_sentence() {
        let s = "42回复|直到2021-03-0210:00:00+08:00";
        let caps = REPLY_COUNT.captures(s).expect("should match");
        assert_eq!(&caps[1], "42");
        assert_eq!(&caps[2], "2021-03-0210:00:00+08:00");
    }

    #[test]
    fn capture_num_defaults_to_zero() {
        assert_eq!(capture_num(&STAT_CLICKS, "3178次点击"), 3178);
        assert_eq!(capture_num(&STAT_CLICKS, "no stats here"), 0);
        assert_eq!(capture_num(&STAT_THANKS, ""), 0);
    }
}
