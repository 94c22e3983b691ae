//! The gateway: connection configuration plus the generic fetch operations
//! every typed endpoint method is built on.

use crate::error::Error;
use crate::params::{ParamValue, Params};
use crate::types::{SearchOptions, SearchResponse};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

/// Default API host. Overrides are normalized at construction so the path
/// always ends in `/`, keeping [`Url::join`] unambiguous.
pub const DEFAULT_HOST: &str = "https://api.search.brave.com/res/v1/";

const SUBSCRIPTION_HEADER: &str = "X-Subscription-Token";

/// The HTTP verbs this API surface uses. The verb decides how the parameter
/// map is encoded: GET renders each value into the query string, POST and
/// DELETE send the map as a JSON object body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Delete,
}

impl Verb {
    fn as_method(self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Delete => Method::DELETE,
        }
    }
}

/// Connection configuration and the generic fetch operations.
///
/// The transport handle can be swapped at any time with
/// [`Client::set_transport`]; access to it is serialized by a mutex that is
/// held only long enough to clone the handle, so in-flight exchanges never
/// block configuration access and multiple fetches may overlap freely. The
/// handle itself carries any timeout or pooling policy; the gateway adds none.
pub struct Client {
    host: Url,
    token: String,
    transport: Mutex<reqwest::Client>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl Client {
    /// Client against [`DEFAULT_HOST`] with a fresh transport.
    pub fn new(token: impl Into<String>) -> Self {
        let host = Url::parse(DEFAULT_HOST).expect("default host is a valid URL");
        Self::with_transport(reqwest::Client::new(), host, token)
    }

    /// Client against an explicit host (normalized to end in `/`).
    pub fn with_host(host: Url, token: impl Into<String>) -> Self {
        Self::with_transport(reqwest::Client::new(), host, token)
    }

    /// Full control: caller supplies the transport handle.
    pub fn with_transport(
        transport: reqwest::Client,
        host: Url,
        token: impl Into<String>,
    ) -> Self {
        Self {
            host: normalize_host(host),
            token: token.into(),
            transport: Mutex::new(transport),
        }
    }

    /// The normalized base host requests are joined against.
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Swap the transport handle. Exchanges already in flight keep the
    /// handle they cloned and are unaffected.
    pub fn set_transport(&self, transport: reqwest::Client) {
        *self.lock_transport() = transport;
    }

    fn lock_transport(&self) -> std::sync::MutexGuard<'_, reqwest::Client> {
        self.transport
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Build, dispatch, and read one exchange. Returns the raw status and
    /// body; classification belongs to the callers. The `send` await is the
    /// only suspension point, and the transport guard is released before it.
    async fn dispatch(
        &self,
        verb: Verb,
        path: &str,
        params: Option<&Params>,
    ) -> Result<(StatusCode, Vec<u8>), Error> {
        let url = self.host.join(path).map_err(|e| {
            Error::Request(format!(
                "unable to construct URL with host \"{}\" and path \"{path}\": {e}",
                self.host
            ))
        })?;

        let transport = self.lock_transport().clone();
        let mut request = transport.request(verb.as_method(), url.clone());

        match verb {
            Verb::Get => {
                if let Some(params) = params.filter(|p| !p.is_empty()) {
                    let pairs: Vec<(&str, String)> = params
                        .iter()
                        .map(|(k, v)| (k.as_str(), v.as_query_value()))
                        .collect();
                    request = request.query(&pairs);
                }
            }
            Verb::Post | Verb::Delete => {
                if let Some(params) = params {
                    let body = serde_json::to_vec(params)
                        .map_err(|e| Error::Request(format!("unable to encode body: {e}")))?;
                    request = request
                        .header(CONTENT_TYPE, "application/json")
                        .body(body);
                }
            }
        }

        // Accept-Encoding: gzip is advertised by the transport itself, which
        // also owns the decompression.
        request = request
            .header(ACCEPT, "application/json")
            .header(SUBSCRIPTION_HEADER, &self.token);

        let started = Instant::now();
        tracing::debug!(
            target: "brave.http",
            verb = ?verb,
            host_path = %format!("{}{}", url.domain().unwrap_or("-"), url.path()),
            has_params = params.is_some(),
            "request.start"
        );

        let response = request
            .send()
            .await
            .map_err(|e| Error::Unexpected(format!("transport failure: {e}")))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Unexpected(format!("failed to read response body: {e}")))?
            .to_vec();

        tracing::debug!(
            target: "brave.http",
            %status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            body_len = body.len(),
            "request.done"
        );

        Ok((status, body))
    }

    /// Fetch an endpoint that returns a JSON document of type `T`.
    ///
    /// A success status with an empty body is a [`Error::Response`] (there is
    /// nothing to decode); a success body that fails schema decode is a
    /// [`Error::Decoding`]. A failure status yields [`Error::Response`] with
    /// the best available detail: the API's `{"error": "..."}` message, else
    /// the raw body text, else a generic fallback.
    pub async fn fetch_decoded<T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        params: Option<&Params>,
    ) -> Result<T, Error> {
        let (status, body) = self.dispatch(verb, path, params).await?;

        if status.is_success() {
            if body.is_empty() {
                return Err(Error::Response {
                    status,
                    detail: "Empty response body".into(),
                });
            }
            return serde_json::from_slice(&body).map_err(|e| Error::Decoding {
                status,
                detail: format!("Error decoding response: {e}"),
            });
        }

        Err(Error::Response {
            status,
            detail: error_detail(&body),
        })
    }

    /// Fetch an endpoint whose entire meaning is "did it succeed".
    ///
    /// The body is never inspected: any success status is `true`, any failure
    /// status is `false`, and neither is an error. A transport failure that
    /// yields no HTTP-shaped response at all still surfaces as
    /// [`Error::Unexpected`]: the exchange outcome is unknown, not false.
    pub async fn fetch_succeeded(
        &self,
        verb: Verb,
        path: &str,
        params: Option<&Params>,
    ) -> Result<bool, Error> {
        let (status, _body) = self.dispatch(verb, path, params).await?;
        Ok(status.is_success())
    }

    /// `GET web/search?q=<query>`. No validation is applied to the query; an
    /// empty string is passed through and the API's behavior governs.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, Error> {
        self.search_with(query, &SearchOptions::default()).await
    }

    /// `search` with optional paging/filter knobs.
    pub async fn search_with(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse, Error> {
        let mut params = Params::new();
        params.insert("q".into(), ParamValue::from(query));
        options.apply(&mut params);

        tracing::debug!(target: "brave.search", query = %query, "search.start");
        self.fetch_decoded(Verb::Get, "web/search", Some(&params))
            .await
    }
}

fn normalize_host(mut host: Url) -> Url {
    if !host.path().ends_with('/') {
        let path = format!("{}/", host.path());
        host.set_path(&path);
    }
    host
}

/// Best-effort detail for a failure body.
fn error_detail(body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorResponse>(body) {
        return parsed.error;
    }
    if let Ok(text) = std::str::from_utf8(body) {
        return text.to_string();
    }
    "Invalid response".to_string()
}
