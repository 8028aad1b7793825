//! Topic feed extraction: list cells, hot-topic cells, and the
//! surrounding pagination.

use dom_query::{Document, Selection};

use super::{int_text, link_attr};
use crate::patterns::{BULLET, NUMBER};
use crate::record::{List, Topic};
use crate::text::MetaLine;
use crate::time_utils::publish_to_time;
use crate::url_utils::complete_url;

/// Extract one topic from a feed cell (`.cell.item` on the home and
/// recent pages, `.cell` inside a node feed).
///
/// Every field is best-effort: absent badges yield zero counts, a
/// malformed metadata line leaves the publish time unresolved. The
/// cell's metadata line varies with whether the topic has received
/// replies, so its fields are located by marker rather than position
/// (see [`MetaLine`]).
#[must_use]
pub fn parse_topic(s: &Selection) -> Topic {
    let mut t = Topic::default();

    let title_link = s.select(".topic-link");
    t.title = title_link.text().trim().to_string();
    t.link = link_attr(&title_link, "href");

    let author_link = s.select("strong a");
    t.author = author_link.text().trim().to_string();
    t.author_url = link_attr(&author_link, "href");

    t.avatar = link_attr(&s.select(".avatar"), "src");

    t.votes = int_text(&s.select(".votes"));
    t.comments = int_text(&s.select(".count_livid"));

    let node_link = s.select(".node");
    t.node = node_link.text().trim().to_string();
    t.node_url = link_attr(&node_link, "href");

    let meta = MetaLine::parse(&s.select(".topic_info").text(), BULLET);
    t.reply = meta.reply_author().map(str::to_string);
    if let Some(publish) = meta.publish() {
        t.publish = publish.to_string();
        t.publish_time = publish_to_time(publish).ok();
    }

    t
}

/// Extract one topic from the dense "today's hot topics" table layout.
///
/// This view renders only title, author and avatar; there are no vote,
/// comment or publish fields to read. The author name is derived from
/// the profile href, which is the only place the table carries it.
#[must_use]
pub fn parse_hot_topic(s: &Selection) -> Topic {
    let mut t = Topic::default();

    let title_link = s.select(".item_hot_topic_title a");
    t.title = title_link.text().trim().to_string();
    t.link = link_attr(&title_link, "href");

    let author_href = s
        .select("a")
        .first()
        .attr("href")
        .map(|v| v.to_string())
        .unwrap_or_default();
    t.author = author_href
        .strip_prefix("/member/")
        .unwrap_or(&author_href)
        .to_string();
    t.author_url = author_href;
    complete_url(&mut t.author_url);

    t.avatar = link_attr(&s.select(".avatar"), "src");

    t
}

/// Extract a page of the global recent-activity feed.
///
/// `page` is recorded as supplied by the caller (0 meaning the default
/// page); the total count comes from the feed's fade line.
#[must_use]
pub fn parse_recent_feed(doc: &Document, page: i32) -> List {
    let mut list = List {
        topics: collect_topics(doc, ".cell.item"),
        page,
        page_max: parse_page_max(doc),
        ..List::default()
    };

    let fade = doc.select("#Main .fade").text();
    list.total = NUMBER
        .find(&fade)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);

    list
}

/// Extract a page of a node's topic feed, including the node's
/// biography and banner image.
#[must_use]
pub fn parse_node_feed(doc: &Document, page: i32) -> List {
    let mut list = List {
        topics: collect_topics(doc, "#TopicsNode .cell"),
        page,
        page_max: parse_page_max(doc),
        ..List::default()
    };

    list.total = int_text(&doc.select(".fr.f12 strong"));
    list.node_bio = doc.select(".node_info span.f12").text().trim().to_string();
    list.node_img = link_attr(&doc.select(".node_avatar img"), "src");

    list
}

fn collect_topics(doc: &Document, selector: &str) -> Vec<Topic> {
    doc.select(selector).iter().map(|s| parse_topic(&s)).collect()
}

/// Last page number from the trailing `.page_normal` link.
///
/// Feeds short enough to fit one page render no pagination strip at
/// all; the floor of 1 keeps the page-max invariant.
fn parse_page_max(doc: &Document) -> i32 {
    doc.select(".page_normal")
        .iter()
        .last()
        .map(|last| int_text(&last))
        .unwrap_or(0)
        .max(1)
}
