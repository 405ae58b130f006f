//! burl - Build and parse URLs from structured components
//!
//! This crate keeps a URL as a structured value (scheme, host, subdomains,
//! port, credentials, path segments, query parameters, fragment) so
//! application code can construct and decompose URLs without manual string
//! concatenation, with round-trip fidelity between the structured form and
//! the string form.
//!
//! # Features
//!
//! - **Deterministic assembly**: [`Burl::url`] emits components in a fixed
//!   order with the correct separators; absent components contribute nothing
//! - **Insertion-ordered parameters**: query parameters render in the order
//!   they were inserted, with unique keys and last-write-wins updates
//! - **Optional value encoding**: parameter values are percent-encoded
//!   under URI-component rules when the `encode_params` option is set
//! - **Inverse parsing**: [`parse_url`] decomposes an absolute HTTP/HTTPS
//!   URL string back into the same structured value
//!
//! # Quick Start
//!
//! ```
//! use burl::{parse_url, Burl, BurlOptions, Params};
//!
//! // Build a URL from components
//! let mut params = Params::new();
//! params.insert("firstName", "John");
//! params.insert("age", 25);
//!
//! let mut url = Burl::with_options(
//!     "example.com",
//!     BurlOptions {
//!         directories: vec!["api".to_string(), "v1".to_string()],
//!         params,
//!         ..Default::default()
//!     },
//! );
//! assert_eq!(url.url(), "https://example.com/api/v1?firstName=John&age=25");
//!
//! // Update parameters in place
//! let mut patch = Params::new();
//! patch.insert("age", 26);
//! url.update_params(patch);
//! assert_eq!(url.url(), "https://example.com/api/v1?firstName=John&age=26");
//!
//! // Parse a URL string back into components
//! let parsed = parse_url("http://www.sub.example.com/docs?page=2#intro")?;
//! assert_eq!(parsed.host(), "example.com");
//! assert_eq!(parsed.sub_domains(), ["sub"]);
//! assert_eq!(parsed.directories(), ["docs"]);
//! assert_eq!(parsed.fragment(), Some("intro"));
//! # Ok::<(), burl::BurlError>(())
//! ```
//!
//! # Scope
//!
//! The crate targets the practical HTTP/HTTPS subset: no IPv6 hosts, no
//! relative URLs, no multi-valued query parameters, and no arbitrary
//! schemes. The parser does not recognize basic-auth credentials embedded
//! in an input string, even though the serializer can emit them.
//!
//! # Error Handling
//!
//! Only [`parse_url`] can fail, with the single error kind
//! [`BurlError::InvalidUrl`]. Every other operation is total: removing an
//! absent parameter key is a no-op, and absent optional components default.

// Re-export the URL value and its options
pub use builder::Burl;
pub use types::{Auth, BurlOptions, ParamValue, Params};

// Re-export parsing
pub use parser::parse_url;

// Re-export the error type
pub use error::BurlError;

// Module declarations
pub mod builder;
pub mod encode;
pub mod error;
pub mod parser;
pub mod types;
