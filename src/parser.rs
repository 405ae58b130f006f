//! Decomposition of absolute HTTP/HTTPS URL strings into [`Burl`] values.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::builder::Burl;
use crate::encode::decode_component;
use crate::error::BurlError;
use crate::types::{BurlOptions, Params};

// Capture groups: scheme, (www.), www, host run, (:port), port digits,
// path run, query run, fragment run. The host run stops at the first
// `/`, `?`, `#`, or `:`. There is no userinfo group: credentials embedded
// in the input are not recognized.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?)://((www)\.)?([^/?#:]+)(:(\d+))?([^?#]*)\??([^#]*)#?(.*)").unwrap()
});

/// Parse an absolute HTTP/HTTPS URL string into a [`Burl`].
///
/// The last two dot-separated labels of the authority become the host; any
/// preceding labels become subdomains in their original order. Path
/// segments are split on `/` with empty segments discarded, so leading,
/// trailing, and repeated slashes collapse away. Query pairs are split on
/// `&` and then on the first `=`; pairs missing a key or a value are
/// dropped, and values are percent-decoded. A non-empty fragment is
/// percent-decoded as well.
///
/// # Errors
///
/// Returns [`BurlError::InvalidUrl`] when the input does not match the
/// absolute-URL shape, the host is empty, or the port does not fit in 16
/// bits.
///
/// # Examples
///
/// ```
/// use burl::parse_url;
///
/// let url = parse_url("http://www.sub.example.com:8080/api/v1?q=test#top")?;
/// assert!(!url.is_https());
/// assert!(url.has_www());
/// assert_eq!(url.host(), "example.com");
/// assert_eq!(url.sub_domains(), ["sub"]);
/// assert_eq!(url.port(), Some(8080));
/// assert_eq!(url.directories(), ["api", "v1"]);
/// assert_eq!(url.fragment(), Some("top"));
/// # Ok::<(), burl::BurlError>(())
/// ```
pub fn parse_url(input: &str) -> Result<Burl, BurlError> {
    let caps = URL_PATTERN.captures(input).ok_or(BurlError::InvalidUrl)?;

    let scheme = &caps[1];
    let www = caps.get(3).is_some();

    let host_run = &caps[4];
    if host_run.is_empty() {
        return Err(BurlError::InvalidUrl);
    }
    let (sub_domains, host) = split_host(host_run);

    let port = match caps.get(6) {
        Some(digits) => Some(
            digits
                .as_str()
                .parse::<u16>()
                .map_err(|_| BurlError::InvalidUrl)?,
        ),
        None => None,
    };

    let directories: Vec<String> = caps[7]
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    let params = parse_query(&caps[8]);

    let fragment = match &caps[9] {
        "" => None,
        raw => Some(decode_component(raw)),
    };

    Ok(Burl::with_options(
        host,
        BurlOptions {
            directories,
            params,
            https: scheme == "https",
            www,
            port,
            sub_domains,
            fragment,
            ..Default::default()
        },
    ))
}

/// Split an authority run into subdomain labels and the two-label host.
///
/// With two or fewer labels the whole run is the host and there are no
/// subdomains.
fn split_host(host_run: &str) -> (Vec<String>, String) {
    let labels: Vec<&str> = host_run.split('.').collect();
    if labels.len() <= 2 {
        return (Vec::new(), host_run.to_string());
    }

    let split = labels.len() - 2;
    let sub_domains = labels[..split].iter().map(|s| s.to_string()).collect();
    let host = labels[split..].join(".");
    (sub_domains, host)
}

fn parse_query(query_run: &str) -> Params {
    let mut params = Params::new();
    for piece in query_run.split('&') {
        if let Some((key, value)) = piece.split_once('=') {
            if !key.is_empty() && !value.is_empty() {
                params.insert(key, decode_component(value));
            }
        }
    }
    params
}

impl FromStr for Burl {
    type Err = BurlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_url(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_host_two_labels() {
        let (subs, host) = split_host("example.com");
        assert!(subs.is_empty());
        assert_eq!(host, "example.com");
    }

    #[test]
    fn test_split_host_single_label() {
        let (subs, host) = split_host("localhost");
        assert!(subs.is_empty());
        assert_eq!(host, "localhost");
    }

    #[test]
    fn test_split_host_subdomains_in_order() {
        let (subs, host) = split_host("v2.api.example.com");
        assert_eq!(subs, vec!["v2", "api"]);
        assert_eq!(host, "example.com");
    }

    #[test]
    fn test_parse_minimal() {
        let url = parse_url("https://example.com/").unwrap();
        assert_eq!(url, Burl::new("example.com"));
    }

    #[test]
    fn test_parse_rejects_missing_scheme() {
        assert_eq!(parse_url("example.com/path"), Err(BurlError::InvalidUrl));
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert_eq!(parse_url(""), Err(BurlError::InvalidUrl));
    }

    #[test]
    fn test_parse_rejects_oversized_port() {
        assert_eq!(
            parse_url("https://example.com:99999/"),
            Err(BurlError::InvalidUrl)
        );
    }

    #[test]
    fn test_query_split_on_first_equals() {
        let url = parse_url("https://example.com/?filter=a=b").unwrap();
        assert_eq!(url.params_flat(), "filter=a=b");
    }

    #[test]
    fn test_query_drops_incomplete_pairs() {
        let url = parse_url("https://example.com/?a=&=b&c&d=1").unwrap();
        assert_eq!(url.params_flat(), "d=1");
    }

    #[test]
    fn test_from_str() {
        let url: Burl = "https://example.com/".parse().unwrap();
        assert_eq!(url.host(), "example.com");
    }
}
