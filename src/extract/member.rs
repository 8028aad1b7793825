//! Member and viewer-profile extraction.

use dom_query::Document;

use super::link_attr;
use crate::balance::parse_balance;
use crate::error::{Error, Result};
use crate::patterns::{MEMBER_INFO, NOTIFICATION_SUFFIX};
use crate::record::{Member, Profile};
use crate::text::remove_space;
use crate::time_utils::parse_fixed_time;
use crate::url_utils::complete_url;

/// Extract a member's public profile from their member page.
///
/// The record hangs off the summary sentence (membership ordinal, join
/// date, activity rank); a page where that sentence does not match is
/// not a member page, so the whole extraction fails rather than
/// returning a hollow record.
pub fn parse_member(doc: &Document, name: &str) -> Result<Member> {
    let card = doc.select("#Main .box").first();

    let sentence = remove_space(&card.select(".gray").text());
    let caps = MEMBER_INFO.captures(&sentence).ok_or_else(|| {
        Error::Structure(format!("member summary sentence not found for {name:?}"))
    })?;

    let join = caps[2].to_string();

    Ok(Member {
        name: name.to_string(),
        bio: card.select(".bigger").text().trim().to_string(),
        avatar: link_attr(&card.select(".avatar"), "src"),
        number: caps[1].parse().unwrap_or(0),
        join_time: parse_fixed_time(&join).ok(),
        join,
        rank: caps[3].parse().unwrap_or(0),
        online: card.select(".online").exists(),
    })
}

/// Extract the authenticated viewer's sidebar summary from the home
/// page.
///
/// Requires a logged-in document; on a logged-out page the sidebar box
/// holds the signup teaser and the extracted fields come back empty.
pub fn parse_profile(doc: &Document) -> Result<Profile> {
    let card = doc.select("#Rightbar .box").first();

    let mut profile = Profile {
        username: card.select(".bigger a").text().trim().to_string(),
        ..Profile::default()
    };

    profile.url = format!("/member/{}", profile.username);
    complete_url(&mut profile.url);
    profile.avatar = link_attr(&card.select("img.avatar"), "src");

    // The three counters all read the first badge: the sidebar has
    // never exposed distinct positions for them reliably.
    let first_badge = card
        .select("a .bigger")
        .first()
        .text()
        .trim()
        .parse()
        .unwrap_or(0);
    profile.fav_nodes = first_badge;
    profile.fav_topics = first_badge;
    profile.following = first_badge;

    let notifications = remove_space(&card.select(".inner a.fade").text());
    profile.notifications = notifications
        .strip_suffix(NOTIFICATION_SUFFIX)
        .unwrap_or(&notifications)
        .parse()
        .unwrap_or(0);

    profile.balance = parse_balance(&card.select("a.balance_area"))?;

    Ok(profile)
}
