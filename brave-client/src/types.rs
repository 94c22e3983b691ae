//! Decode targets for the Brave Search API response tree, plus the optional
//! knobs accepted by the `web/search` endpoint.
//!
//! These records have no identity and no mutation after construction. Every
//! optional field is genuinely absent-or-present: absent fields decode to
//! `None` and are omitted again on serialization, never defaulted to a
//! sentinel.

use crate::params::{ParamValue, Params};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Always "search"
    #[serde(rename = "type")]
    pub kind: String,

    pub query: Query,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<Search>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Videos>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news: Option<News>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    pub original: String,
}

/// The web vertical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Search {
    /// Always "search"
    #[serde(rename = "type")]
    pub kind: String,

    pub results: Vec<SearchResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutated_by_goggles: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_friendly: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Always "search_result"
    #[serde(rename = "type")]
    pub kind: String,

    /// "generic" etc.
    pub subtype: String,

    pub url: Url,
    pub title: String,
    pub description: String,
    pub profile: Profile,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_fetched: Option<DateTime<Utc>>,

    pub language: String,
    pub family_friendly: bool,
    pub meta_url: MetaUrl,
    pub is_source_local: bool,
    pub is_source_both: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<Vec<Cluster>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub url: String,
    pub long_name: String,
    pub img: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    pub title: String,
    pub url: String,
    pub description: String,
    pub family_friendly: bool,
    pub is_source_local: bool,
    pub is_source_both: bool,
}

/// The news vertical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct News {
    /// Always "news"
    #[serde(rename = "type")]
    pub kind: String,

    pub results: Vec<NewsResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutated_by_goggles: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_friendly: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsResult {
    pub url: Url,
    pub title: String,
    pub description: String,
    pub is_source_local: bool,
    pub is_source_both: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_age: Option<String>,

    pub family_friendly: bool,
    pub breaking: bool,
    pub meta_url: MetaUrl,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
}

/// The videos vertical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Videos {
    /// Always "videos"
    #[serde(rename = "type")]
    pub kind: String,

    pub results: Vec<VideoResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutated_by_goggles: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_friendly: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoResult {
    /// Always "video_result"
    #[serde(rename = "type")]
    pub kind: String,

    pub url: Url,
    pub title: String,
    pub description: String,
    pub meta_url: MetaUrl,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_age: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnail {
    pub src: String,
    pub original: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaUrl {
    pub scheme: String,
    pub netloc: String,
    pub hostname: String,
    pub favicon: String,
    pub path: String,
}

// ---------- Request-side knobs ----------

/// Freshness window for `web/search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Day,
    Week,
    Month,
    Year,
}

impl Freshness {
    pub fn as_wire(self) -> &'static str {
        match self {
            Freshness::Day => "pd",
            Freshness::Week => "pw",
            Freshness::Month => "pm",
            Freshness::Year => "py",
        }
    }
}

impl FromStr for Freshness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pd" | "day" => Ok(Freshness::Day),
            "pw" | "week" => Ok(Freshness::Week),
            "pm" | "month" => Ok(Freshness::Month),
            "py" | "year" => Ok(Freshness::Year),
            other => Err(format!(
                "unknown freshness {other:?} (expected pd, pw, pm, or py)"
            )),
        }
    }
}

/// Safe-search filter level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafeSearch {
    Off,
    Moderate,
    Strict,
}

impl SafeSearch {
    pub fn as_wire(self) -> &'static str {
        match self {
            SafeSearch::Off => "off",
            SafeSearch::Moderate => "moderate",
            SafeSearch::Strict => "strict",
        }
    }
}

impl FromStr for SafeSearch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(SafeSearch::Off),
            "moderate" => Ok(SafeSearch::Moderate),
            "strict" => Ok(SafeSearch::Strict),
            other => Err(format!(
                "unknown safesearch level {other:?} (expected off, moderate, or strict)"
            )),
        }
    }
}

/// Optional parameters for the `web/search` endpoint. Unset fields are not
/// sent at all; the API's own defaults apply.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Results per page.
    pub count: Option<u32>,
    /// Pagination offset.
    pub offset: Option<u32>,
    /// Country code (ISO 3166-1 alpha-2).
    pub country: Option<String>,
    /// Search language (ISO 639-1).
    pub search_lang: Option<String>,
    pub freshness: Option<Freshness>,
    pub safesearch: Option<SafeSearch>,
    /// Restrict returned verticals ("web,news,videos").
    pub result_filter: Option<String>,
    pub extra_snippets: Option<bool>,
    pub spellcheck: Option<bool>,
}

impl SearchOptions {
    pub(crate) fn apply(&self, params: &mut Params) {
        if let Some(v) = self.count {
            params.insert("count".into(), ParamValue::from(v));
        }
        if let Some(v) = self.offset {
            params.insert("offset".into(), ParamValue::from(v));
        }
        if let Some(v) = &self.country {
            params.insert("country".into(), ParamValue::from(v.clone()));
        }
        if let Some(v) = &self.search_lang {
            params.insert("search_lang".into(), ParamValue::from(v.clone()));
        }
        if let Some(v) = self.freshness {
            params.insert("freshness".into(), ParamValue::from(v.as_wire()));
        }
        if let Some(v) = self.safesearch {
            params.insert("safesearch".into(), ParamValue::from(v.as_wire()));
        }
        if let Some(v) = &self.result_filter {
            params.insert("result_filter".into(), ParamValue::from(v.clone()));
        }
        if let Some(v) = self.extra_snippets {
            params.insert("extra_snippets".into(), ParamValue::from(v));
        }
        if let Some(v) = self.spellcheck {
            params.insert("spellcheck".into(), ParamValue::from(v));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "type": "search",
        "query": { "original": "brave browser" },
        "web": {
            "type": "search",
            "results": [
                {
                    "type": "search_result",
                    "subtype": "generic",
                    "url": "https://brave.com/",
                    "title": "Brave Browser",
                    "description": "Browse privately.",
                    "profile": {
                        "name": "Brave",
                        "url": "https://brave.com/",
                        "long_name": "brave.com",
                        "img": "https://imgs.search.brave.com/brave.png"
                    },
                    "language": "en",
                    "family_friendly": true,
                    "meta_url": {
                        "scheme": "https",
                        "netloc": "brave.com",
                        "hostname": "brave.com",
                        "favicon": "https://imgs.search.brave.com/favicon.png",
                        "path": "/"
                    },
                    "is_source_local": false,
                    "is_source_both": false,
                    "page_fetched": "2025-08-12T14:30:15.123Z",
                    "cluster_type": "generic",
                    "cluster": [
                        {
                            "title": "Download",
                            "url": "https://brave.com/download/",
                            "description": "Get the browser.",
                            "family_friendly": true,
                            "is_source_local": false,
                            "is_source_both": false
                        }
                    ]
                }
            ],
            "family_friendly": true
        },
        "news": {
            "type": "news",
            "results": [
                {
                    "url": "https://example.com/article",
                    "title": "Browser news",
                    "description": "Something happened.",
                    "is_source_local": false,
                    "is_source_both": false,
                    "age": "2 days ago",
                    "family_friendly": true,
                    "breaking": false,
                    "meta_url": {
                        "scheme": "https",
                        "netloc": "example.com",
                        "hostname": "example.com",
                        "favicon": "https://imgs.search.brave.com/ex.png",
                        "path": "/article"
                    }
                }
            ]
        }
    }"#;

    #[test]
    fn decodes_full_fixture() {
        let resp: SearchResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(resp.kind, "search");
        assert_eq!(resp.query.original, "brave browser");

        let web = resp.web.as_ref().unwrap();
        assert_eq!(web.family_friendly, Some(true));
        assert_eq!(web.mutated_by_goggles, None);

        let hit = &web.results[0];
        assert_eq!(hit.url.as_str(), "https://brave.com/");
        assert_eq!(hit.profile.long_name, "brave.com");
        assert_eq!(hit.meta_url.netloc, "brave.com");
        assert_eq!(
            hit.page_fetched.unwrap().to_rfc3339(),
            "2025-08-12T14:30:15.123+00:00"
        );
        assert_eq!(hit.cluster.as_ref().unwrap().len(), 1);

        let news = resp.news.as_ref().unwrap();
        assert!(!news.results[0].breaking);
        assert_eq!(news.results[0].age.as_deref(), Some("2 days ago"));

        // Absent verticals and optionals stay absent.
        assert!(resp.videos.is_none());
        assert!(hit.thumbnail.is_none());
        assert!(hit.age.is_none());
        assert!(news.results[0].thumbnail.is_none());
        assert!(news.results[0].page_age.is_none());
    }

    #[test]
    fn absent_optionals_are_omitted_on_reserialization() {
        let resp: SearchResponse = serde_json::from_str(FIXTURE).unwrap();
        let value = serde_json::to_value(&resp).unwrap();

        let top = value.as_object().unwrap();
        assert!(!top.contains_key("videos"));

        let hit = &value["web"]["results"][0];
        let hit = hit.as_object().unwrap();
        assert!(!hit.contains_key("thumbnail"));
        assert!(!hit.contains_key("age"));
        assert!(hit.contains_key("cluster"));
        assert_eq!(value["web"]["results"][0]["type"], "search_result");
    }

    #[test]
    fn search_options_map_to_wire_parameters() {
        let options = SearchOptions {
            count: Some(20),
            offset: Some(2),
            freshness: Some(Freshness::Week),
            safesearch: Some(SafeSearch::Moderate),
            extra_snippets: Some(true),
            ..Default::default()
        };

        let mut params = Params::new();
        options.apply(&mut params);

        assert_eq!(params["count"], ParamValue::Int(20));
        assert_eq!(params["offset"], ParamValue::Int(2));
        assert_eq!(params["freshness"], ParamValue::Str("pw".into()));
        assert_eq!(params["safesearch"], ParamValue::Str("moderate".into()));
        assert_eq!(params["extra_snippets"], ParamValue::Bool(true));
        assert!(!params.contains_key("country"));
        assert!(!params.contains_key("spellcheck"));
    }

    #[test]
    fn freshness_and_safesearch_parse_wire_spellings() {
        assert_eq!("pd".parse::<Freshness>().unwrap(), Freshness::Day);
        assert_eq!("month".parse::<Freshness>().unwrap(), Freshness::Month);
        assert!("fortnight".parse::<Freshness>().is_err());

        assert_eq!("strict".parse::<SafeSearch>().unwrap(), SafeSearch::Strict);
        assert!("medium".parse::<SafeSearch>().is_err());
    }
}
