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

use std::fmt::{Display, Formatter, Write};

/// Struct that holds parsed URI components.
///
/// All components are kept in raw/escaped form. This is the mutable
/// intermediate state that parsing, resolution and normalization work on;
/// callers only ever see it through [`Uri`].
///
/// The authority is not stored as a whole: its presence is signalled by
/// `host` being `Some` (possibly empty, as in `//user@/`), and it is
/// recomposed on demand.
#[derive(Debug, Default, Eq, Clone, PartialEq, Hash)]
pub(crate) struct UriComponents {
    pub(crate) scheme: Option<String>,
    pub(crate) username: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) host: Option<String>,
    pub(crate) port: Option<u16>,
    pub(crate) path: String,
    pub(crate) query: Option<String>,
    pub(crate) fragment: Option<String>,
}

impl Display for UriComponents {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.write_to(f)
    }
}

impl UriComponents {
    /// Splits a non-empty authority into userinfo, host and port.
    ///
    /// The userinfo ends at the *last* `@`; it is split into username and
    /// password on its *first* `:`. The port starts after the last `:` of
    /// what remains.
    pub(crate) fn parse_authority(
        &mut self,
        kind: SchemeKind,
        authority: &str,
    ) -> Result<(), SyntaxErrorKind> {
        let mut remaining = authority;

        self.username = None;
        self.password = None;
        self.port = None;

        if let Some(at) = remaining.rfind('@') {
            let userinfo = &remaining[..at];

            match userinfo.find(':') {
                Some(colon) => {
                    self.username = Some(userinfo[..colon].to_string());
                    self.password = Some(userinfo[colon + 1..].to_string());
                }
                None => self.username = Some(userinfo.to_string()),
            }

            remaining = &remaining[at + 1..];
        }

        if remaining.contains('[') {
            return Err(SyntaxErrorKind::Ipv6Unsupported);
        }

        match remaining.rfind(':') {
            Some(colon) => {
                self.port = Some(kind.validate_port(&remaining[colon + 1..])?);
                self.host = Some(remaining[..colon].to_string());
            }
            None => self.host = Some(remaining.to_string()),
        }

        Ok(())
    }

    /// Replaces this authority with the one from `base`, including its absence.
    pub(crate) fn inherit_authority(&mut self, base: &UriComponents) {
        self.username = base.username.clone();
        self.password = base.password.clone();
        self.host = base.host.clone();
        self.port = base.port;
    }

    #[inline(always)]
    pub(crate) fn has_authority(&self) -> bool {
        self.host.is_some()
    }

    /// Prefixes `/.` to a host-less path starting with `//`, so that it is
    /// not read back as an authority.
    pub(crate) fn guard_double_slash_path(&mut self) {
        if !self.has_authority() && self.path.starts_with("//") {
            self.path.insert_str(0, "/.");
        }
    }

    /// Recomposes `username[:password]`, if a username is present.
    pub(crate) fn userinfo(&self) -> Option<String> {
        self.username.as_ref().map(|username| match &self.password {
            Some(password) => format!("{}:{}", username, password),
            None => username.clone(),
        })
    }

    /// Recomposes `[userinfo@]host[:port]`, if an authority is present.
    pub(crate) fn authority(&self) -> Option<String> {
        if !self.has_authority() {
            return None;
        }
        let mut ret = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write_authority(&mut ret);
        Some(ret)
    }

    fn write_authority<T: Write + ?Sized>(&self, f: &mut T) -> Result<(), std::fmt::Error> {
        if let Some(host) = &self.host {
            if let Some(username) = &self.username {
                f.write_str(username)?;
                if let Some(password) = &self.password {
                    f.write_char(':')?;
                    f.write_str(password)?;
                }
                f.write_char('@')?;
            }

            f.write_str(host)?;

            if let Some(port) = self.port {
                write!(f, ":{}", port)?;
            }
        }
        Ok(())
    }

    /// Recomposes the components per [IETF-RFC3986 section 5.3].
    ///
    /// [IETF-RFC3986 section 5.3]: https://tools.ietf.org/html/rfc3986#section-5.3
    pub(crate) fn write_to<T: Write + ?Sized>(&self, f: &mut T) -> Result<(), std::fmt::Error> {
        if let Some(scheme) = &self.scheme {
            f.write_str(scheme)?;
            f.write_char(':')?;
        }

        if self.has_authority() {
            f.write_str("//")?;
            self.write_authority(f)?;
        }

        f.write_str(&self.path)?;

        if let Some(query) = &self.query {
            f.write_char('?')?;
            f.write_str(query)?;
        }

        if let Some(fragment) = &self.fragment {
            f.write_char('#')?;
            f.write_str(fragment)?;
        }

        Ok(())
    }

    /// An iterator which returns each individual *escaped* path segment.
    pub(crate) fn raw_path_segments(&self) -> impl Iterator<Item = &str> {
        let mut ret = self.path.split('/');
        if self.path.is_empty() {
            let _ = ret.next();
        }
        ret
    }

    /// An iterator which returns each individual *escaped* query item.
    pub(crate) fn raw_query_items(&self) -> impl Iterator<Item = &str> {
        let pattern = |c: char| c == '&' || c == ';';
        let mut ret = self.query.as_deref().unwrap_or("").split(pattern);
        if self.query.is_none() {
            let _ = ret.next();
        }
        ret
    }
}
