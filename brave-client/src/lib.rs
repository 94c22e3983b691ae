//! Typed client for the Brave Search JSON API.
//!
//! [`Client`] owns the connection configuration (host, subscription token,
//! transport handle) and exposes two generic entry points: [`Client::fetch_decoded`]
//! for endpoints that return a JSON document, and [`Client::fetch_succeeded`] for
//! action endpoints whose entire meaning is the status code. Endpoint helpers
//! such as [`Client::search`] fix the verb, path, and parameter map for one API
//! operation and delegate to those.
//!
//! ```no_run
//! # async fn demo() -> Result<(), brave_client::Error> {
//! let client = brave_client::Client::new("my-subscription-token");
//! let resp = client.search("brave browser").await?;
//! println!("{}", resp.query.original);
//! # Ok(()) }
//! ```
//!
//! Retries, backoff, and timeout policy belong to the transport
//! (`reqwest::Client`), which callers can supply or swap; every failure the
//! gateway sees is surfaced as a typed [`Error`], never recovered internally.

pub mod client;
pub mod error;
pub mod params;
pub mod types;

pub use client::{Client, DEFAULT_HOST, Verb};
pub use error::Error;
pub use params::{ParamValue, Params};
pub use types::{Freshness, SafeSearch, SearchOptions, SearchResponse};
