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

use std::borrow::Cow;
use std::iter::FusedIterator;

/// An iterator used to apply URI percent decoding to strings.
///
/// It is constructed via the method [`unescape_uri()`].
/// See the documentation for [`StrExt`] for more information.
///
/// The iterator yields raw bytes, since percent-encoded octets are not
/// required to form valid UTF-8. Malformed escapes (a `%` not followed by
/// two hex digits) are passed through as-is.
///
/// [`StrExt`]: trait.StrExt.html
/// [`unescape_uri()`]: trait.StrExt.html#tymethod.unescape_uri
#[derive(Debug, Clone)]
pub struct UnescapeUri<'a> {
    pub(super) iter: std::slice::Iter<'a, u8>,
    pub(super) plus_as_space: bool,
}

impl<'a> FusedIterator for UnescapeUri<'a> {}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

impl<'a> UnescapeUri<'a> {
    /// Consumes the iterator and returns a new one that decodes `+` as a space,
    /// the way `application/x-www-form-urlencoded` data is read.
    pub fn plus_as_space(mut self) -> Self {
        self.plus_as_space = true;
        self
    }

    /// Determines if this iterator will actually change anything.
    pub fn is_needed(&self) -> bool {
        let bytes = self.iter.as_slice();
        bytes.contains(&b'%') || (self.plus_as_space && bytes.contains(&b'+'))
    }

    /// Decodes the string, returning it as a copy-on-write type.
    ///
    /// Decoded octets that do not form valid UTF-8 are replaced with
    /// [`U+FFFD REPLACEMENT CHARACTER`][U+FFFD].
    ///
    /// [U+FFFD]: core::char::REPLACEMENT_CHARACTER
    pub fn to_cow(&self) -> Cow<'a, str> {
        if !self.is_needed() {
            if let Ok(s) = std::str::from_utf8(self.iter.as_slice()) {
                return Cow::from(s);
            }
        }

        let bytes: Vec<u8> = self.clone().collect();

        match String::from_utf8(bytes) {
            Ok(s) => Cow::from(s),
            Err(e) => Cow::from(String::from_utf8_lossy(e.as_bytes()).into_owned()),
        }
    }
}

impl<'a> Iterator for UnescapeUri<'a> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        let b = *self.iter.next()?;

        match b {
            b'+' if self.plus_as_space => Some(b' '),
            b'%' => {
                let rest = self.iter.as_slice();
                if rest.len() >= 2 {
                    if let (Some(msn), Some(lsn)) = (hex_value(rest[0]), hex_value(rest[1])) {
                        self.iter.nth(1);
                        return Some((msn << 4) | lsn);
                    }
                }
                Some(b'%')
            }
            b => Some(b),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.iter.size_hint().0;
        ((n + 2) / 3, Some(n))
    }
}
