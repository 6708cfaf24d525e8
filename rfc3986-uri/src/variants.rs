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

use super::*;

/// An `http` or `https` URI, as amended by [IETF-RFC2616] section 3.2.
///
/// Differences from a generic [`Uri`]: only the `http` and `https` schemes
/// are accepted, an empty path becomes `/`, and normalization drops the
/// default port.
///
/// ```
/// # use rfc3986_uri::*;
/// let uri = HttpUri::parse("http://a").unwrap();
/// assert_eq!(uri.path(), "/");
///
/// let uri = HttpUri::parse("https://example.com:443/over/there").unwrap();
/// assert_eq!(uri.normalized().as_str(), "https://example.com/over/there");
///
/// assert!(HttpUri::parse("ftp://example.com/").is_err());
/// ```
///
/// This type implements [`std::ops::Deref<Uri>`], so you can also use all of the
/// methods from [`Uri`] on this type.
///
/// [IETF-RFC2616]: https://tools.ietf.org/html/rfc2616#section-3.2
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct HttpUri(Uri);

impl_uri_variant_traits!(HttpUri, SchemeKind::Http);

/// A `file` URI, with support for Windows/DOS drive letters.
///
/// Differences from a generic [`Uri`]: only the `file` scheme is accepted, a
/// scheme and a non-empty path are required, and a host-less path with a
/// single leading slash is rewritten into the `///` form. `..` segments never
/// climb above a drive letter such as `c:`.
///
/// ```
/// # use rfc3986_uri::*;
/// let uri = FileUri::parse("file:/etc/hosts").unwrap();
/// assert_eq!(uri.as_str(), "file:///etc/hosts");
///
/// let uri = FileUri::parse_with_base("../../../../g", "file:///c:/a/b/c/d;p?q").unwrap();
/// assert_eq!(uri.as_str(), "file:///c:/g");
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct FileUri(Uri);

impl_uri_variant_traits!(FileUri, SchemeKind::File);

impl FileUri {
    /// Returns a normalized copy without query and fragment.
    ///
    /// ```
    /// # use rfc3986_uri::*;
    /// let uri = FileUri::parse("file://example.com/foo?bar#baz").unwrap();
    /// assert_eq!(uri.to_base_uri().as_str(), "file://example.com/foo");
    /// ```
    pub fn to_base_uri(&self) -> FileUri {
        let mut ret = self.clone();
        {
            let parts = ret.0.components_mut();
            parts.query = None;
            parts.fragment = None;
        }
        ret.normalize();
        ret
    }
}
