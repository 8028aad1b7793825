//! # rs-v2ex
//!
//! A typed extraction client for the V2EX forum.
//!
//! The crate fetches forum pages and converts their semi-structured
//! markup into owned records: topic feeds, member profiles, coin
//! balances, community counters, and full discussion threads. The
//! extraction engine tolerates the usual fragility of scraping -
//! missing elements and absent optional fields degrade to defaults,
//! while a page whose load-bearing structure has shifted fails with a
//! descriptive error instead of returning a hollow record.
//!
//! ## Quick Start
//!
//! ```no_run
//! use rs_v2ex::Client;
//!
//! let client = Client::new()?;
//!
//! for topic in client.latest()? {
//!     println!("{} ({} comments)", topic.title, topic.comments);
//! }
//!
//! let stats = client.community()?;
//! println!("{} members, {} online", stats.members, stats.online);
//! # Ok::<(), rs_v2ex::Error>(())
//! ```
//!
//! Operations on the recent-activity feed, node feeds and the viewer
//! profile need a session cookie:
//!
//! ```no_run
//! use rs_v2ex::{Client, ClientOptions};
//!
//! let options = ClientOptions {
//!     cookie: std::env::var("V2EX_COOKIE").unwrap_or_default(),
//!     ..ClientOptions::default()
//! };
//! let client = Client::with_options(options)?;
//! let feed = client.recent(0)?;
//! println!("{} of {} topics", feed.topics.len(), feed.total);
//! # Ok::<(), rs_v2ex::Error>(())
//! ```
//!
//! ## Extraction without the transport
//!
//! Every extractor in [`extract`] is a pure function over a parsed
//! [`Document`], so saved pages can be processed offline:
//!
//! ```
//! use rs_v2ex::{extract, Document};
//!
//! let doc = Document::from("<div id='Main'></div>");
//! let nodes = extract::plane::parse_planes(&doc);
//! assert!(nodes.is_empty());
//! ```

mod client;
mod error;
mod options;
mod patterns;
mod record;

/// Coin balance decoding.
pub mod balance;

/// Charset detection and transcoding of fetched pages.
pub mod encoding;

/// Record extractors, one module per page family.
pub mod extract;

/// Text normalization for delimiter-separated metadata.
pub mod text;

/// Publish-time resolution.
pub mod time_utils;

/// Site endpoints and URL completion.
pub mod url_utils;

// Public API - re-exports
pub use client::Client;
pub use error::{Error, Result};
pub use options::ClientOptions;
pub use record::{
    Balance, Community, Content, Leaderboard, List, Member, Node, Postscript, Profile, Reply,
    Topic,
};

// The document/selection capability the extractors are written
// against, re-exported for offline use.
pub use dom_query::{Document, Selection};
