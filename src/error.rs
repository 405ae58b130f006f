//! Error types for URL building and parsing operations.

use thiserror::Error;

/// Errors that can occur while working with [`Burl`](crate::Burl) values.
///
/// Only [`parse_url`](crate::parse_url) can fail; every other operation in
/// this crate is total over its documented input domain. Removing a query
/// parameter that does not exist is a no-op, not an error, and absent
/// optional components simply default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BurlError {
    /// The input string does not have the shape of an absolute HTTP/HTTPS
    /// URL, or its authority is empty.
    #[error("invalid URL")]
    InvalidUrl,
}
