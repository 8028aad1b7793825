//! Plane (node group) listing extraction.

use dom_query::Document;

use crate::patterns::BULLET;
use crate::record::Node;
use crate::text::remove_space;
use crate::url_utils::complete_url;

/// Extract every node from the planes page.
///
/// Each group box carries two header strings: the full header (the
/// localized group name followed by its latin label) and the
/// floated-right label alone. The localized name is recovered by
/// stripping the label suffix from the header. The first box is the
/// page banner, not a group.
#[must_use]
pub fn parse_planes(doc: &Document) -> Vec<Node> {
    let mut nodes = Vec::new();

    for (i, group) in doc.select("#Main .box").iter().enumerate() {
        if i == 0 {
            continue;
        }

        let header = remove_space(&group.select(".header").text());
        let header = header.split(BULLET).next().unwrap_or("");

        let kind = remove_space(&group.select(".fr").text());
        let kind = kind.split(BULLET).next().unwrap_or("").to_string();

        let kind_zh = header.strip_suffix(kind.as_str()).unwrap_or(header).to_string();

        for link in group.select(".inner a").iter() {
            let mut url = link.attr("href").map(|v| v.to_string()).unwrap_or_default();
            complete_url(&mut url);

            nodes.push(Node {
                name: link.text().trim().to_string(),
                url,
                kind: kind.clone(),
                kind_zh: kind_zh.clone(),
            });
        }
    }

    nodes
}
