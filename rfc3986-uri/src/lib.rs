// Copyright 2019 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! # URI Parsing, Resolution and Normalization
//!
//! This crate parses, validates, normalizes and resolves
//! [Uniform Resource Identifiers][IETF-RFC3986], with scheme-specific handling for
//! HTTP(S) ([IETF-RFC2616] section 3.2) and `file` URIs, including Windows/DOS
//! drive letters.
//!
//! The library only manipulates strings: it never dereferences a URI.
//!
//! ## Important Types
//!
//! [`Uri`] holds either a full [URI] (like "`http://example.com/`") or a
//! [relative-reference] (like "`../g?q=foo`"), parsed into its scheme,
//! userinfo, host, port, path, query and fragment. Every value is built in
//! one pass: parse, resolve against an optional base URI, then apply
//! scheme-specific post-processing.
//!
//! How a value is validated and post-processed is decided by its
//! [`SchemeKind`]:
//!
//! * [`SchemeKind::Generic`]: any syntactically valid scheme.
//! * [`SchemeKind::Http`]: only `http`/`https`; empty paths become `/` and
//!   default ports are dropped on normalization. Wrapped by [`HttpUri`].
//! * [`SchemeKind::File`]: only `file`; scheme and path are mandatory, and `..`
//!   segments never climb above a drive letter. Wrapped by [`FileUri`].
//!
//! ## Resolution
//!
//! Relative references are resolved with the strict algorithm from
//! [IETF-RFC3986 section 5.2][resolution]. Excess `..` segments clamp at the
//! root rather than failing:
//!
//! ```
//! use rfc3986_uri::prelude::*;
//!
//! let base = "http://a/b/c/d;p?q";
//!
//! assert_eq!(Uri::parse_with_base("../../g", base).unwrap().as_str(), "http://a/g");
//! assert_eq!(Uri::parse_with_base("../../../g", base).unwrap().as_str(), "http://a/g");
//! assert_eq!(Uri::parse_with_base("//g", base).unwrap().as_str(), "http://g");
//! assert_eq!(HttpUri::parse_with_base("//g", base).unwrap().as_str(), "http://g/");
//! ```
//!
//! ## Normalization and Equality
//!
//! [`Uri::normalize`] lowercases the scheme and host, percent-normalizes the
//! path, query and fragment, removes dot segments, and drops default ports.
//! It is idempotent. [`Uri::equals`] compares components either as-is or
//! after normalizing copies of both sides:
//!
//! ```
//! use rfc3986_uri::prelude::*;
//!
//! let a = HttpUri::parse("HTTP://Example.com:80/a/../%7euser").unwrap();
//! let b = HttpUri::parse("http://example.com/~user").unwrap();
//!
//! assert!(!a.equals(&b, false));
//! assert!(a.equals(&b, true));
//! assert_eq!(a.normalized().as_str(), "http://example.com/~user");
//! ```
//!
//! ## Errors
//!
//! Construction is the only operation that can fail. Malformed input produces
//! a [`UriSyntaxError`] with a [`SyntaxErrorKind`]; an unusable base URI is
//! reported as [`SyntaxErrorKind::InvalidBase`] wrapping the base's own error.
//! IPv6 literal hosts are rejected:
//!
//! ```
//! use rfc3986_uri::prelude::*;
//!
//! let err = Uri::parse("ldap://[2001:db8::7]/c=GB").unwrap_err();
//! assert_eq!(err.syntax_kind(), Some(&SyntaxErrorKind::Ipv6Unsupported));
//! ```
//!
//! ## Logging
//!
//! Diagnostics are emitted through the [`log`](https://docs.rs/log) facade.
//! This crate never installs a logger.
//!
//! [IETF-RFC3986]: https://tools.ietf.org/html/rfc3986
//! [IETF-RFC2616]: https://tools.ietf.org/html/rfc2616#section-3.2
//! [relative-reference]: https://tools.ietf.org/html/rfc3986#section-4.2
//! [URI]: https://tools.ietf.org/html/rfc3986#section-3
//! [resolution]: https://tools.ietf.org/html/rfc3986#section-5.2
//!

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub mod escape;
use escape::*;

mod regexes;
pub(crate) use regexes::*;

mod error;
pub use error::{Error, InternalError, SyntaxErrorKind, UriSyntaxError};

mod scheme;
pub use scheme::{SchemeKind, FILE_SCHEMES, HTTP_DEFAULT_PORTS, HTTP_SCHEMES};

mod components;
pub(crate) use components::UriComponents;

mod parser;
pub(crate) use parser::{parse_reference, scan_until_first_of};

mod dot_segments;
pub(crate) use dot_segments::{drive_letter_prefix, merge_paths, remove_dot_segments};

mod resolve;
pub(crate) use resolve::resolve;

mod uri;
pub use uri::Uri;

mod variants;
pub use variants::{FileUri, HttpUri};

#[cfg(test)]
mod test;

#[doc(hidden)]
pub mod prelude {
    pub use super::escape::StrExt;
    pub use super::{Error, SyntaxErrorKind, UriSyntaxError};
    pub use super::{FileUri, HttpUri, SchemeKind, Uri};
}
