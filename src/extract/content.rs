//! Topic detail extraction: body, stats, postscripts and one page of
//! replies.

use dom_query::{Document, Selection};

use super::{int_text, is_tag, link_attr, next_element_sibling};
use crate::error::Result;
use crate::patterns::{
    capture_num, MIDDLE_DOT, REPLY_COUNT, STAT_CLICKS, STAT_FAVORITES, STAT_THANKS,
};
use crate::record::{Content, Postscript, Reply, Topic};
use crate::text::{remove_space, strip_client_suffix, MetaLine};
use crate::time_utils::{parse_fixed_time, publish_to_time};

/// Extract a topic detail page.
///
/// `url` is the canonical topic URL the document was fetched from; it
/// becomes the embedded topic's link. A thread bearing the no-reply
/// marker box short-circuits: the reply sentence and reply cells are
/// not read at all.
pub fn parse_content(doc: &Document, url: &str) -> Result<Content> {
    let main = doc.select("#Main");

    let mut ctt = Content {
        body: main.select(".topic_content").first().inner_html().to_string(),
        ..Content::default()
    };

    (ctt.reply_page, ctt.reply_page_max) = parse_reply_pages(&main);

    let stats = remove_space(&main.select(".topic_stats").text());
    ctt.clicks = capture_num(&STAT_CLICKS, &stats);
    ctt.thanks = capture_num(&STAT_THANKS, &stats);
    ctt.favorites = capture_num(&STAT_FAVORITES, &stats);

    ctt.topic = parse_header_topic(&main, url);

    for subtle in main.select(".subtle").iter() {
        ctt.postscripts.push(parse_postscript(&subtle));
    }

    // A dedicated marker box stands in for the reply list when the
    // thread has none; any reply-count text elsewhere is stale.
    if main.select(".box.transparent").exists() {
        return Ok(ctt);
    }

    if let Some(reply_box) = main.select(".box").iter().nth(1) {
        let sentence = remove_space(&reply_box.select(".cell .gray").first().text());
        if let Some(caps) = REPLY_COUNT.captures(&sentence) {
            ctt.reply_total = caps[1].parse().unwrap_or(0);
            ctt.reply_time = parse_fixed_time(&caps[2]).ok();
        }

        for cell in reply_box.select(".cell").iter() {
            let id = cell.attr("id").map(|v| v.to_string()).unwrap_or_default();
            if !id.starts_with("r_") {
                continue;
            }
            ctt.replies.push(parse_reply(&cell));
        }
    }

    Ok(ctt)
}

/// The embedded topic, read from the detail header.
fn parse_header_topic(main: &Selection, url: &str) -> Topic {
    let mut topic = Topic {
        title: main.select(".header h1").text().trim().to_string(),
        link: url.to_string(),
        ..Topic::default()
    };

    let author_link = main.select(".header .gray a").first();
    topic.author = author_link.text().trim().to_string();
    topic.author_url = link_attr(&author_link, "href");
    topic.avatar = link_attr(&main.select("img.avatar").first(), "src");

    topic.votes = int_text(&main.select(".votes"));

    // The owning node sits after the breadcrumb chevron; question and
    // promoted pages render something else there.
    if let Some(crumb) = next_element_sibling(&main.select(".chevron")) {
        if is_tag(&crumb, "a") {
            topic.node = crumb.text().trim().to_string();
            topic.node_url = link_attr(&crumb, "href");
        }
    }

    let gray_line = main.select(".header .gray").first().text().to_string();
    if remove_space(&gray_line).contains(MIDDLE_DOT) {
        let meta = MetaLine::parse(&gray_line, MIDDLE_DOT);
        if let Some(publish) = meta.publish() {
            topic.publish = publish.to_string();
            topic.publish_time = publish_to_time(publish).ok();
        }
    }

    topic
}

fn parse_postscript(subtle: &Selection) -> Postscript {
    let line = MetaLine::parse(&subtle.select(".fade").text(), MIDDLE_DOT);
    let publish = line
        .publish()
        .map(strip_client_suffix)
        .unwrap_or_default()
        .to_string();

    Postscript {
        content: subtle.select(".topic_content").inner_html().to_string(),
        publish_time: publish_to_time(&publish).ok(),
        publish,
    }
}

fn parse_reply(cell: &Selection) -> Reply {
    let author_link = cell.select("a.dark");

    let mut reply = Reply {
        author: author_link.text().trim().to_string(),
        author_url: link_attr(&author_link, "href"),
        avatar: link_attr(&cell.select("img.avatar"), "src"),
        number: int_text(&cell.select(".no")),
        content: cell.select(".reply_content").inner_html().to_string(),
        ..Reply::default()
    };

    let ago = remove_space(&cell.select(".ago").text());
    reply.publish = strip_client_suffix(&ago).to_string();
    reply.publish_time = publish_to_time(&reply.publish).ok();

    reply
}

/// Current and last reply page, derived from the position of the
/// current-page marker among its parent's anchors. Threads short
/// enough for one page render no marker at all.
fn parse_reply_pages(main: &Selection) -> (i32, i32) {
    let markers = main.select("a.page_current");
    let Some(current) = markers.iter().next() else {
        return (1, 1);
    };

    let mut position = 0;
    let mut anchors = 0;
    for (i, child) in current.parent().children().iter().enumerate() {
        if is_same_node(&child, &current) {
            position = i;
        }
        if is_tag(&child, "a") {
            anchors += 1;
        }
    }

    (i32::try_from(position).unwrap_or(0) + 1, anchors)
}

fn is_same_node(a: &Selection, b: &Selection) -> bool {
    match (a.nodes().first(), b.nodes().first()) {
        (Some(x), Some(y)) => x.id == y.id,
        _ => false,
    }
}
