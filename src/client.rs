//! The fetch-and-dispatch client.
//!
//! One [`Client`] holds a session cookie and a blocking HTTP transport.
//! Every public operation is a single fetch-then-parse pair: no
//! caching, no retries, no rate limiting. Callers drive pagination by
//! repeated calls with an explicit page argument.

use dom_query::Document;
use reqwest::blocking;
use reqwest::header;
use tracing::debug;

use crate::encoding::transcode_to_utf8;
use crate::error::{Error, Result};
use crate::extract;
use crate::options::ClientOptions;
use crate::record::{Community, Content, Leaderboard, List, Member, Node, Profile, Topic};
use crate::url_utils::{
    URL_HOME, URL_MEMBER, URL_NODE, URL_PLANES, URL_RECENT, URL_TOPIC, URL_TOP_PLAY, URL_TOP_RICH,
};

/// A synchronous extraction client for the forum.
///
/// Construct one value and own it; pass it by reference to whatever
/// needs it. The cookie is read on every request and may be changed
/// with [`Client::set_cookie`] as a one-time setup step - complete it
/// before sharing the client across callers.
///
/// # Example
///
/// ```no_run
/// use rs_v2ex::Client;
///
/// let client = Client::new()?;
/// for topic in client.latest()? {
///     println!("{} - {}", topic.title, topic.link);
/// }
/// # Ok::<(), rs_v2ex::Error>(())
/// ```
#[derive(Debug)]
pub struct Client {
    options: ClientOptions,
    http: blocking::Client,
}

impl Client {
    /// Create an unauthenticated client with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(ClientOptions::default())
    }

    /// Create a client from explicit options.
    pub fn with_options(options: ClientOptions) -> Result<Self> {
        let http = blocking::Client::builder()
            .user_agent(options.user_agent.clone())
            .timeout(options.timeout)
            .build()?;

        Ok(Self { options, http })
    }

    /// Set the session cookie.
    pub fn set_cookie(&mut self, cookie: impl Into<String>) {
        self.options.cookie = cookie.into();
    }

    /// Whether a session cookie is present.
    ///
    /// Presence only: an expired cookie is indistinguishable from a
    /// valid one until the server rejects it.
    #[must_use]
    pub fn has_logged_in(&self) -> bool {
        !self.options.cookie.is_empty()
    }

    /// Latest topics from the home page.
    pub fn latest(&self) -> Result<Vec<Topic>> {
        let doc = self.fetch_document(URL_HOME)?;
        Ok(doc
            .select(".cell.item")
            .iter()
            .map(|s| extract::topic::parse_topic(&s))
            .collect())
    }

    /// Today's hot topics from the home page sidebar.
    pub fn hots(&self) -> Result<Vec<Topic>> {
        let doc = self.fetch_document(URL_HOME)?;
        Ok(doc
            .select("#TopicsHot table")
            .iter()
            .map(|s| extract::topic::parse_hot_topic(&s))
            .collect())
    }

    /// A member's public profile by name.
    pub fn member(&self, name: &str) -> Result<Member> {
        let doc = self.fetch_document(&format!("{URL_MEMBER}{name}"))?;
        extract::member::parse_member(&doc, name)
    }

    /// The authenticated viewer's own summary. Requires a cookie.
    pub fn profile(&self) -> Result<Profile> {
        self.must_login()?;

        let doc = self.fetch_document(URL_HOME)?;
        extract::member::parse_profile(&doc)
    }

    /// Aggregate community counters from the home page.
    pub fn community(&self) -> Result<Community> {
        let doc = self.fetch_document(URL_HOME)?;
        extract::community::parse_community(&doc)
    }

    /// The wealth leaderboard.
    pub fn top_rich(&self) -> Result<Vec<Leaderboard>> {
        self.leaderboard(URL_TOP_RICH)
    }

    /// The spending leaderboard.
    pub fn top_play(&self) -> Result<Vec<Leaderboard>> {
        self.leaderboard(URL_TOP_PLAY)
    }

    /// All nodes from the planes listing.
    pub fn planes(&self) -> Result<Vec<Node>> {
        let doc = self.fetch_document(URL_PLANES)?;
        Ok(extract::plane::parse_planes(&doc))
    }

    /// One page of the global recent-activity feed. Requires a cookie.
    ///
    /// `page` 0 means the default (first) page.
    pub fn recent(&self, page: i32) -> Result<List> {
        self.must_login()?;

        let doc = self.fetch_document(&paged_url(URL_RECENT, page))?;
        Ok(extract::topic::parse_recent_feed(&doc, page))
    }

    /// One page of a node's topic feed. Requires a cookie.
    ///
    /// `page` 0 means the default (first) page.
    pub fn node(&self, node: &str, page: i32) -> Result<List> {
        self.must_login()?;
        if node.is_empty() {
            return Err(Error::NodeNotExist);
        }

        let url = format!("{URL_NODE}{node}");
        let doc = self.fetch_document(&paged_url(&url, page))?;
        Ok(extract::topic::parse_node_feed(&doc, page))
    }

    /// A topic's detail page with one page of replies.
    ///
    /// `reply_page` is 1-based; 0 means the default page.
    pub fn content(&self, id: i64, reply_page: i32) -> Result<Content> {
        let url = paged_url(&format!("{URL_TOPIC}{id}"), reply_page);
        let doc = self.fetch_document(&url)?;
        extract::content::parse_content(&doc, &url)
    }

    fn leaderboard(&self, url: &str) -> Result<Vec<Leaderboard>> {
        let doc = self.fetch_document(url)?;
        extract::leaderboard::parse_leaderboard(&doc)
    }

    fn must_login(&self) -> Result<()> {
        if self.has_logged_in() {
            Ok(())
        } else {
            Err(Error::NotLogin)
        }
    }

    /// One GET with the session cookie, transcoded and parsed.
    fn fetch_document(&self, url: &str) -> Result<Document> {
        debug!(url, "fetching document");

        let mut request = self.http.get(url);
        if self.has_logged_in() {
            request = request.header(header::COOKIE, self.options.cookie.as_str());
        }

        let response = request.send()?.error_for_status()?;
        let bytes = response.bytes()?;

        Ok(Document::from(transcode_to_utf8(&bytes)))
    }
}

fn paged_url(base: &str, page: i32) -> String {
    if page > 0 {
        format!("{base}?p={page}")
    } else {
        base.to_string()
    }
}
