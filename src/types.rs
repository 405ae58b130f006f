//! Core data structures for URL construction.

use std::fmt;

/// A query parameter value: either text or a number.
///
/// Numbers are stringified on serialization (`25`, not `25.0`), so
/// `("age", 25)` renders as `age=25`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// A plain string value.
    Text(String),
    /// A numeric value, stringified when rendered.
    Number(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => write!(f, "{s}"),
            ParamValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Number(value as f64)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Number(f64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Number(f64::from(value))
    }
}

/// An insertion-ordered map of query parameters with unique keys.
///
/// Inserting an existing key overwrites its value in place, keeping the
/// key's original position; new keys append at the end. Iteration follows
/// insertion order, which is also the order [`Burl::url`](crate::Burl::url)
/// renders the query string in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Vec<(String, ParamValue)>);

impl Params {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Params(Vec::new())
    }

    /// Insert a parameter, overwriting the value if the key already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Remove a parameter by key. Missing keys are silently ignored.
    pub fn remove(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    /// Look up a parameter value by key.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for Params {
    type Item = (String, ParamValue);
    type IntoIter = std::vec::IntoIter<(String, ParamValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// HTTP basic-auth credentials rendered as `username:password@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth {
    /// The username part.
    pub username: String,
    /// The password part.
    pub password: String,
}

impl Auth {
    /// Create a credentials pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Options bundle for [`Burl::with_options`](crate::Burl::with_options).
///
/// Every field has a neutral default: HTTPS on, everything else absent,
/// empty, or off.
#[derive(Debug, Clone, PartialEq)]
pub struct BurlOptions {
    /// Path segments, joined with `/`.
    pub directories: Vec<String>,
    /// Query parameters.
    pub params: Params,
    /// Percent-encode parameter values on serialization.
    pub encode_params: bool,
    /// Render `https://` instead of `http://`.
    pub https: bool,
    /// Insert a literal `www.` label after the scheme.
    pub www: bool,
    /// Explicit port, rendered as `:<port>` when present.
    pub port: Option<u16>,
    /// Basic-auth credentials, rendered as `user:pass@` when present.
    pub auth: Option<Auth>,
    /// Subdomain labels prepended to the host, left to right.
    pub sub_domains: Vec<String>,
    /// Fragment, rendered as `#<fragment>` when present.
    pub fragment: Option<String>,
}

impl Default for BurlOptions {
    fn default() -> Self {
        Self {
            directories: Vec::new(),
            params: Params::new(),
            encode_params: false,
            https: true,
            www: false,
            port: None,
            auth: None,
            sub_domains: Vec::new(),
            fragment: None,
        }
    }
}
