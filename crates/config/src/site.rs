//! Supported sites and their selector profiles.

use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::UnknownSite;

/// Matches `google.<tld>` search hosts, with or without the `www.` prefix.
static GOOGLE_HOST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(www\.)?google\.[a-z]{2,3}(\.[a-z]{2})?$").expect("static regex"));

/// Matches desktop and mobile YouTube hosts.
static YOUTUBE_HOST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(www\.|m\.)?youtube\.com$").expect("static regex"));

/// The closed set of sites navki knows how to navigate.
///
/// Adding support for a site means adding a variant here together with its
/// selector profile, not patching hostname conditionals elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Site {
    /// Google web search result pages.
    GoogleSearch,
    /// YouTube search and listing pages.
    Youtube,
}

/// Immutable per-site selector set.
///
/// `next_page_query`/`prev_page_query` are `None` for sites without
/// pagination controls; the corresponding commands no-op there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteProfile {
    /// Selector yielding the page's result elements in document order.
    pub result_query: String,
    /// Selector for the next-page control, if the site has one.
    pub next_page_query: Option<String>,
    /// Selector for the previous-page control, if the site has one.
    pub prev_page_query: Option<String>,
}

impl Site {
    /// Resolve a hostname to a supported site, if any.
    ///
    /// Intended to run once per page load; unsupported hosts get no page
    /// context at all.
    pub fn detect(hostname: &str) -> Option<Self> {
        let host = hostname.to_ascii_lowercase();
        if GOOGLE_HOST.is_match(&host) {
            Some(Self::GoogleSearch)
        } else if YOUTUBE_HOST.is_match(&host) {
            Some(Self::Youtube)
        } else {
            None
        }
    }

    /// The selector profile for this site.
    pub fn profile(&self) -> SiteProfile {
        match self {
            Self::GoogleSearch => SiteProfile {
                result_query: "#search div.g".into(),
                next_page_query: Some("#pnnext".into()),
                prev_page_query: Some("#pnprev".into()),
            },
            // YouTube loads further results by scrolling; there is nothing
            // to paginate to.
            Self::Youtube => SiteProfile {
                result_query: "ytd-video-renderer, ytd-rich-item-renderer".into(),
                next_page_query: None,
                prev_page_query: None,
            },
        }
    }

    /// Stable lowercase name, matching the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GoogleSearch => "google_search",
            Self::Youtube => "youtube",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Site {
    type Err = UnknownSite;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google_search" => Ok(Self::GoogleSearch),
            "youtube" => Ok(Self::Youtube),
            other => Err(UnknownSite {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_google_hosts() {
        assert_eq!(Site::detect("www.google.com"), Some(Site::GoogleSearch));
        assert_eq!(Site::detect("google.de"), Some(Site::GoogleSearch));
        assert_eq!(Site::detect("www.google.co.uk"), Some(Site::GoogleSearch));
        assert_eq!(Site::detect("WWW.GOOGLE.COM"), Some(Site::GoogleSearch));
    }

    #[test]
    fn detects_youtube_hosts() {
        assert_eq!(Site::detect("www.youtube.com"), Some(Site::Youtube));
        assert_eq!(Site::detect("m.youtube.com"), Some(Site::Youtube));
        assert_eq!(Site::detect("youtube.com"), Some(Site::Youtube));
    }

    #[test]
    fn rejects_other_hosts() {
        assert_eq!(Site::detect("example.com"), None);
        assert_eq!(Site::detect("googleresults.com"), None);
        assert_eq!(Site::detect("youtube.com.evil.net"), None);
    }

    #[test]
    fn profiles_are_consistent() {
        let g = Site::GoogleSearch.profile();
        assert!(g.next_page_query.is_some());
        assert!(g.prev_page_query.is_some());

        let y = Site::Youtube.profile();
        assert!(y.next_page_query.is_none());
        assert!(y.prev_page_query.is_none());
        assert!(!y.result_query.is_empty());
    }

    #[test]
    fn parses_from_str() {
        assert_eq!("youtube".parse::<Site>().unwrap(), Site::Youtube);
        assert!("bing".parse::<Site>().is_err());
    }
}
