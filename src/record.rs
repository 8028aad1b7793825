//! Output records produced by the extraction engine.
//!
//! Every record is an immutable snapshot assembled in one extraction
//! pass and owned by the caller once returned. URL-valued fields are
//! fully qualified by the time a record leaves this crate.

use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

/// One topic as it appears in a list cell or a detail header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Topic title.
    pub title: String,

    /// Canonical topic link.
    pub link: String,

    /// Author name.
    pub author: String,

    /// Author profile URL.
    pub author_url: String,

    /// Author avatar URL.
    pub avatar: String,

    /// Vote count. 0 when the badge is absent.
    pub votes: i32,

    /// Comment count. 0 when the badge is absent.
    pub comments: i32,

    /// Author of the most recent reply, when the metadata line records one.
    pub reply: Option<String>,

    /// Owning node name.
    pub node: String,

    /// Owning node URL.
    pub node_url: String,

    /// Publish phrase as shown on the page (e.g. `3小时前`).
    pub publish: String,

    /// Publish phrase resolved against the extraction instant.
    ///
    /// `None` when the phrase was absent or not a relative duration.
    pub publish_time: Option<DateTime<Local>>,
}

/// One page of a topic feed plus its pagination metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub topics: Vec<Topic>,

    /// Total topic count declared by the page.
    pub total: i32,

    /// The caller-supplied page argument (0 meaning first/default page).
    pub page: i32,

    /// Last page number. At least 1 when parsing succeeds.
    pub page_max: i32,

    /// Node biography, for node-scoped feeds.
    pub node_bio: String,

    /// Node banner image URL, for node-scoped feeds.
    pub node_img: String,
}

/// One node (subforum) from the planes listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub url: String,

    /// Plane type label (latin).
    pub kind: String,

    /// Localized plane type description.
    pub kind_zh: String,
}

/// A member's public profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub bio: String,
    pub avatar: String,

    /// Membership ordinal (the N in "第 N 号会员").
    pub number: i32,

    /// Join date phrase as shown on the page.
    pub join: String,

    /// Join date parsed from its fixed format.
    pub join_time: Option<DateTime<FixedOffset>>,

    /// Today's activity rank.
    pub rank: i32,

    /// Whether the online marker is present.
    pub online: bool,
}

/// The authenticated viewer's own sidebar summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub url: String,
    pub avatar: String,
    pub fav_nodes: i32,
    pub fav_topics: i32,
    pub following: i32,

    /// Unread notification count.
    pub notifications: i32,

    pub balance: Balance,
}

/// Aggregate site counters from the home page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub members: i32,
    pub topics: i32,
    pub comments: i32,

    /// Currently online.
    pub online: i32,

    /// Online record.
    pub online_max: i32,

    /// Site version label.
    pub version: String,
}

/// One row of a wealth or spending leaderboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    /// Rank index as declared by the row.
    pub index: i32,

    pub username: String,
    pub balance: Balance,
}

/// A three-tier coin balance, or a plain money amount.
///
/// Exactly one of the two representations is meaningful: pages that
/// render coin icons populate the tiers, pages that render a `$`
/// figure populate `money`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub gold: i32,
    pub silver: i32,
    pub bronze: i32,
    pub money: f64,
}

/// A topic detail page: the topic, its body, and one page of replies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub topic: Topic,

    /// Rendered body HTML.
    pub body: String,

    pub clicks: i32,
    pub favorites: i32,
    pub thanks: i32,

    /// Addenda appended after original publication, in page order.
    pub postscripts: Vec<Postscript>,

    pub replies: Vec<Reply>,

    /// Reply count declared by the thread header sentence.
    pub reply_total: i32,

    /// Timestamp of the most recent reply.
    pub reply_time: Option<DateTime<FixedOffset>>,

    /// Current reply page (1-based).
    pub reply_page: i32,

    /// Last reply page. 1 when the thread has a single page.
    pub reply_page_max: i32,
}

/// A supplementary addendum on a topic detail page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Postscript {
    /// Rendered addendum HTML.
    pub content: String,

    pub publish: String,
    pub publish_time: Option<DateTime<Local>>,
}

/// One reply cell of a topic detail page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub author: String,
    pub author_url: String,
    pub avatar: String,

    /// 1-based floor number within the whole thread.
    pub number: i32,

    /// Rendered reply HTML.
    pub content: String,

    /// Publish phrase with any trailing `via <client>` suffix stripped.
    pub publish: String,

    pub publish_time: Option<DateTime<Local>>,
}
