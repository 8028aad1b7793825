//! Site endpoints and URL completion.
//!
//! Page markup references member profiles, avatars and nodes with
//! protocol-relative (`//cdn...`) or root-relative (`/member/...`)
//! URLs. Every URL-valued record field is routed through
//! [`complete_url`] so callers only ever see fully-qualified URLs.

use url::Url;

/// Site origin.
pub const URL_HOME: &str = "https://www.v2ex.com";

/// Recent-activity feed (requires a session cookie).
pub(crate) const URL_RECENT: &str = "https://www.v2ex.com/recent";

/// Flat listing of all node groups.
pub(crate) const URL_PLANES: &str = "https://www.v2ex.com/planes";

/// Member profile prefix, completed with a member name.
pub(crate) const URL_MEMBER: &str = "https://www.v2ex.com/member/";

/// Node feed prefix, completed with a node name.
pub(crate) const URL_NODE: &str = "https://www.v2ex.com/go/";

/// Topic detail prefix, completed with a topic id.
pub(crate) const URL_TOPIC: &str = "https://www.v2ex.com/t/";

/// Wealth leaderboard.
pub(crate) const URL_TOP_RICH: &str = "https://www.v2ex.com/top/rich";

/// Spending leaderboard.
pub(crate) const URL_TOP_PLAY: &str = "https://www.v2ex.com/top/player";

/// Check whether `s` is already a valid absolute http(s) URL.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }
    matches!(Url::parse(s), Ok(url) if url.host().is_some())
}

/// Rewrite a protocol-relative or root-relative URL in place against
/// the site origin.
///
/// `//host/...` is prefixed with `https:`, `/path` with the origin;
/// anything else - already-absolute URLs and empty strings included -
/// passes through untouched. Reapplying is a no-op.
pub fn complete_url(s: &mut String) {
    if is_absolute_url(s) {
        return;
    }

    if s.starts_with("//") {
        s.insert_str(0, "https:");
    } else if s.starts_with('/') {
        s.insert_str(0, URL_HOME);
    }
}
