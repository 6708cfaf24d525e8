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

/// Schemes accepted by [`SchemeKind::Http`].
pub const HTTP_SCHEMES: &[&str] = &["http", "https"];

/// Schemes accepted by [`SchemeKind::File`].
pub const FILE_SCHEMES: &[&str] = &["file"];

/// Registered default ports for the schemes accepted by [`SchemeKind::Http`].
pub const HTTP_DEFAULT_PORTS: &[(&str, u16)] = &[("http", 80), ("https", 443)];

/// Enum describing which flavor of URI handling applies to a value.
///
/// Every kind runs the same parsing, resolution and normalization pipeline;
/// the kind only decides the validation and post-processing hooks along the way.
#[derive(Debug, Eq, Clone, Copy, PartialEq, Hash)]
pub enum SchemeKind {
    /// Any syntactically valid scheme, no default ports, empty paths allowed;
    /// E.g. `urn:example:animal:ferret:nose`
    ///
    /// ```
    /// # use rfc3986_uri::{Uri, SchemeKind};
    /// assert_eq!(SchemeKind::Generic, Uri::parse("urn:example:animal").unwrap().kind());
    /// ```
    Generic,

    /// `http` and `https` as amended by [IETF-RFC2616] section 3.2: the
    /// default port is dropped on normalization, and an empty path becomes `/`;
    /// E.g. `http://example.com/`
    ///
    /// [IETF-RFC2616]: https://tools.ietf.org/html/rfc2616#section-3.2
    Http,

    /// Local and remote `file` URIs, including Windows/DOS drive letters;
    /// E.g. `file:///c:/Windows/win.ini`
    ///
    /// A scheme and a non-empty path are required, and a host-less path with a
    /// single leading slash is rewritten to the `///` form.
    File,
}

impl Default for SchemeKind {
    fn default() -> Self {
        SchemeKind::Generic
    }
}

impl SchemeKind {
    /// The schemes this kind accepts, or `None` if any well-formed scheme is accepted.
    pub fn allowed_schemes(self) -> Option<&'static [&'static str]> {
        match self {
            SchemeKind::Generic => None,
            SchemeKind::Http => Some(HTTP_SCHEMES),
            SchemeKind::File => Some(FILE_SCHEMES),
        }
    }

    /// The default-port table used when normalizing.
    pub fn default_ports(self) -> &'static [(&'static str, u16)] {
        match self {
            SchemeKind::Http => HTTP_DEFAULT_PORTS,
            SchemeKind::Generic | SchemeKind::File => &[],
        }
    }

    /// Looks up the default port of the given (lowercase) scheme.
    pub fn default_port(self, scheme: &str) -> Option<u16> {
        self.default_ports()
            .iter()
            .find(|(name, _)| *name == scheme)
            .map(|(_, port)| *port)
    }

    /// Returns true if `..` segments must never remove a drive letter like `c:`.
    pub fn protects_drive_letters(self) -> bool {
        self == SchemeKind::File
    }

    /// Whether a host-less path may start with `//`, as in `file:///etc/hosts`.
    pub(crate) fn allows_hostless_double_slash(self) -> bool {
        self == SchemeKind::File
    }

    fn expected_name(self) -> &'static str {
        match self {
            SchemeKind::Generic => "valid",
            SchemeKind::Http => "HTTP",
            SchemeKind::File => "file",
        }
    }

    /// Checks the scheme grammar and the allowed-scheme set, returning the
    /// scheme lowercased.
    pub(crate) fn validate_scheme(self, scheme: &str) -> Result<String, SyntaxErrorKind> {
        if !URI_CHECK_SCHEME.is_match(scheme) {
            return Err(SyntaxErrorKind::InvalidScheme(scheme.to_string()));
        }

        let scheme = scheme.to_ascii_lowercase();

        match self.allowed_schemes() {
            Some(allowed) if !allowed.contains(&scheme.as_str()) => {
                Err(SyntaxErrorKind::SchemeNotAllowed {
                    scheme,
                    expected: self.expected_name(),
                })
            }
            _ => Ok(scheme),
        }
    }

    /// Checks that the path is consistent with the presence of an authority.
    pub(crate) fn validate_path(self, has_authority: bool, path: &str) -> Result<(), SyntaxErrorKind> {
        if !has_authority {
            if path.starts_with("//") {
                return Err(SyntaxErrorKind::PathStartsWithDoubleSlash(path.to_string()));
            }
        } else if !path.is_empty() && !path.starts_with('/') {
            return Err(SyntaxErrorKind::PathNotAbsolute(path.to_string()));
        }
        Ok(())
    }

    /// Checks that a port is a non-empty run of digits and converts it.
    pub(crate) fn validate_port(self, port: &str) -> Result<u16, SyntaxErrorKind> {
        if port.is_empty() {
            return Err(SyntaxErrorKind::EmptyPort);
        }

        if !URI_CHECK_PORT.is_match(port) {
            return Err(SyntaxErrorKind::InvalidPort(port.to_string()));
        }

        port.parse::<u16>().map_err(|_| SyntaxErrorKind::InvalidPort(port.to_string()))
    }

    /// Scheme-specific fix-ups, run once the components are final.
    pub(crate) fn post_process(self, parts: &mut UriComponents) -> Result<(), SyntaxErrorKind> {
        match self {
            SchemeKind::Generic => Ok(()),

            SchemeKind::Http => {
                if parts.path.is_empty() {
                    parts.path.push('/');
                }
                Ok(())
            }

            SchemeKind::File => {
                if parts.scheme.is_none() {
                    return Err(SyntaxErrorKind::MissingScheme);
                }

                if parts.path.is_empty() {
                    return Err(SyntaxErrorKind::MissingPath(parts.to_string()));
                }

                let hostless = parts.host.as_deref().map_or(true, str::is_empty);

                if hostless && parts.path.starts_with('/') && !parts.path.starts_with("//") {
                    parts.path.insert_str(0, "//");
                }

                Ok(())
            }
        }
    }
}
