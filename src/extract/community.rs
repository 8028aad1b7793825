//! Community-wide counter extraction from the home page.

use dom_query::Document;

use crate::error::{Error, Result};
use crate::patterns::COMMUNITY_FOOTER;
use crate::record::Community;
use crate::text::remove_space;

/// Extract the aggregate site counters.
///
/// The member/topic/comment counters come from the last sidebar box
/// and are best-effort; the online/version figures come from the
/// footer sentence, which is load-bearing - a footer that does not
/// match means the page is not the home page we know how to read.
pub fn parse_community(doc: &Document) -> Result<Community> {
    let mut com = Community::default();

    if let Some(stats_box) = doc.select("#Rightbar div.box").iter().last() {
        let mut counters = stats_box.select("strong").iter();
        com.members = next_counter(&mut counters);
        com.topics = next_counter(&mut counters);
        com.comments = next_counter(&mut counters);
    }

    let footer = remove_space(&doc.select("#Bottom").text());
    let caps = COMMUNITY_FOOTER
        .captures(&footer)
        .ok_or_else(|| Error::Structure("community footer sentence not found".to_string()))?;

    com.online = caps[1].parse().unwrap_or(0);
    com.online_max = caps[2].parse().unwrap_or(0);
    com.version = caps[3].to_string();

    Ok(com)
}

fn next_counter<'a, I>(counters: &mut I) -> i32
where
    I: Iterator<Item = dom_query::Selection<'a>>,
{
    counters
        .next()
        .and_then(|s| remove_space(&s.text()).parse().ok())
        .unwrap_or(0)
}
