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

//! # URI percent encoding/decoding ("URI Escaping")
//!
//! This module holds the [IETF-RFC3986] character classes along with a small
//! percent-encoding codec built on top of them.
//!
//! The primary interface is the [`StrExt`] trait, which extends `str` with
//! [`escape_uri()`] and [`unescape_uri()`]. Both return iterators that implement
//! [`core::fmt::Display`]:
//!
//! ```
//! use rfc3986_uri::escape::StrExt;
//! let escaped_string = "This needs escaping".escape_uri().to_string();
//!
//! assert_eq!(&escaped_string, "This%20needs%20escaping");
//! ```
//!
//! Unlike general-purpose percent decoders, [`unescape_uri()`] yields *bytes*
//! and never fails: malformed escapes such as `%zz` are passed along
//! verbatim. This matches what component normalization needs, where the
//! decoded bytes are immediately re-encoded.
//!
//! # Component normalization
//!
//! [`normalize_path`] and [`normalize_query_or_fragment`] decode a component
//! completely and then re-encode every byte that falls outside the
//! component's allowed character class, using uppercase hex digits:
//!
//! ```
//! use rfc3986_uri::escape::{normalize_path, normalize_query_or_fragment};
//!
//! assert_eq!(normalize_path("/foo/%5bbar"), "/foo/%5Bbar");
//! assert_eq!(normalize_path("/foo/[bar"), "/foo/%5Bbar");
//! assert_eq!(normalize_query_or_fragment("a+b=%7e"), "a%20b=~");
//! ```
//!
//! A bare `+` is read as an encoded space, so a decoded `+` is always
//! written back out as `%2B`. This keeps normalization idempotent.
//!
//! [IETF-RFC3986]: https://tools.ietf.org/html/rfc3986
//! [`escape_uri()`]: trait.StrExt.html#tymethod.escape_uri
//! [`unescape_uri()`]: trait.StrExt.html#tymethod.unescape_uri
//!

use std::marker::PhantomData;

mod escape_uri;
pub use escape_uri::*;

mod unescape_uri;
pub use unescape_uri::*;


/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub fn is_char_uri_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_' || c == '~'
}

/// `gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"`
pub fn is_char_uri_gen_delim(c: char) -> bool {
    c == ':' || c == '/' || c == '?' || c == '#' || c == '[' || c == ']' || c == '@'
}

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`
pub fn is_char_uri_sub_delim(c: char) -> bool {
    c == '!'
        || c == '$'
        || c == '&'
        || c == '\''
        || c == '('
        || c == ')'
        || c == '*'
        || c == '+'
        || c == ','
        || c == ';'
        || c == '='
}

/// `reserved = gen-delims / sub-delims`
pub fn is_char_uri_reserved(c: char) -> bool {
    is_char_uri_gen_delim(c) || is_char_uri_sub_delim(c)
}

/// `pchar = unreserved / pct-encoded / sub-delims / ":" / "@"`
///
/// The `pct-encoded` alternative is not a single character and is therefore
/// not covered here.
pub fn is_char_uri_pchar(c: char) -> bool {
    is_char_uri_unreserved(c) || is_char_uri_sub_delim(c) || c == ':' || c == '@'
}

/// `query = fragment = *( pchar / "/" / "?" )`
pub fn is_char_uri_query_or_fragment(c: char) -> bool {
    is_char_uri_pchar(c) || c == '/' || c == '?'
}

/// Trait for `str` adding URI percent encoding/decoding
///
/// See the [module-level](index.html) documentation for more details.
///
pub trait StrExt {
    /// Gets an iterator that performs general-purpose URI percent-encoding.
    ///
    /// By default, all characters that are not `pchar`s are escaped,
    /// which is appropriate for escaping path segments.
    /// Append [`for_query_or_fragment()`] for escaping appropriate to the
    /// query and fragment components.
    ///
    /// [`for_query_or_fragment()`]: struct.EscapeUri.html#method.for_query_or_fragment
    fn escape_uri(&self) -> EscapeUri<'_, EscapeUriSegment>;

    /// Gets an iterator that performs lenient URI percent-decoding, yielding bytes.
    ///
    /// Valid `%XX` escapes are decoded; everything else, including malformed
    /// escapes, is passed through unchanged.
    fn unescape_uri(&self) -> UnescapeUri<'_>;
}

impl StrExt for str {
    fn escape_uri(&self) -> EscapeUri<'_, EscapeUriSegment> {
        escape_uri_bytes(self.as_bytes())
    }

    fn unescape_uri(&self) -> UnescapeUri<'_> {
        UnescapeUri {
            iter: self.as_bytes().iter(),
            plus_as_space: false,
        }
    }
}

/// Gets a path-segment [`EscapeUri`] iterator over arbitrary bytes.
///
/// Bytes do not need to be valid UTF-8: every non-ASCII byte is escaped.
pub fn escape_uri_bytes(bytes: &[u8]) -> EscapeUri<'_, EscapeUriSegment> {
    EscapeUri {
        iter: bytes.iter(),
        state: EscapeUriState::Normal,
        needs_escape: PhantomData,
    }
}

/// Percent-normalizes a whole path, one `/`-delimited segment at a time.
///
/// Each segment is fully decoded (treating `+` as a space) and every byte that
/// is not a `pchar` is re-encoded. Escaped slashes (`%2F`) therefore survive
/// as `%2F` and never change the segment structure.
pub fn normalize_path(path: &str) -> String {
    let mut ret = String::with_capacity(path.len());

    for (n, seg) in path.split('/').enumerate() {
        if n != 0 {
            ret.push('/');
        }
        let decoded: Vec<u8> = seg.unescape_uri().plus_as_space().collect();
        ret.extend(escape_uri_bytes(&decoded));
    }

    ret
}

/// Percent-normalizes a query or a fragment.
///
/// The component is fully decoded (treating `+` as a space) and every byte
/// that is neither a `pchar`, `/` nor `?` is re-encoded.
pub fn normalize_query_or_fragment(item: &str) -> String {
    let decoded: Vec<u8> = item.unescape_uri().plus_as_space().collect();
    escape_uri_bytes(&decoded)
        .for_query_or_fragment()
        .to_string()
}
