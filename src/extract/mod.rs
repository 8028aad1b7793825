//! Record extractors, one module per page family.
//!
//! Extractors are pure functions over a parsed [`dom_query::Document`]
//! or a [`dom_query::Selection`] scoped to one item; the transport
//! never leaks in here, so every extractor can run against fixture
//! HTML.
//!
//! Error policy: a structurally load-bearing pattern that fails to
//! match aborts the whole record with an error. Optional numeric
//! fields that fail to parse silently default to zero and extraction
//! continues. The two failure classes are never conflated.

pub mod community;
pub mod content;
pub mod leaderboard;
pub mod member;
pub mod plane;
pub mod topic;

use dom_query::Selection;

use crate::text::remove_space;
use crate::url_utils::complete_url;

/// Read an attribute from the selection's first node, completed
/// against the site origin. Absent attributes yield an empty string.
pub(crate) fn link_attr(sel: &Selection, name: &str) -> String {
    let mut value = sel.attr(name).map(|v| v.to_string()).unwrap_or_default();
    complete_url(&mut value);
    value
}

/// Best-effort integer from the selection's space-stripped text.
pub(crate) fn int_text(sel: &Selection) -> i32 {
    remove_space(&sel.text()).parse().unwrap_or(0)
}

/// Whether the selection's first node is an element with this tag name.
pub(crate) fn is_tag(sel: &Selection, tag: &str) -> bool {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// The next sibling element, skipping intervening text nodes.
pub(crate) fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}
