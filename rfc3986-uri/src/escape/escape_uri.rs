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
use core::fmt::Write;
use std::borrow::Cow;
use std::fmt::Display;
use std::iter::FusedIterator;
use std::marker::PhantomData;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub(super) enum EscapeUriState {
    Normal,
    OutputHighNibble(u8),
    OutputLowNibble(u8),
}

/// An internal, unstable trait that is used to adjust the behavior of [`EscapeUri`].
///
/// It is subject to change and is not considered stable.
#[doc(hidden)]
pub trait NeedsEscape: Clone {
    fn byte_needs_escape(b: u8) -> bool {
        (b & 0x80) != 0 || Self::char_needs_escape(b as char)
    }
    fn char_needs_escape(c: char) -> bool;
}

/// A zero-sized implementor of [`NeedsEscape`] for escaping path segments.
///
/// `+` is escaped even though it is a `pchar`, because [`UnescapeUri`]
/// reads a bare `+` as a space when normalizing.
///
/// Its behavior is subject to change and is not considered stable.
#[doc(hidden)]
#[derive(Default, Copy, Clone, Debug)]
pub struct EscapeUriSegment;
impl NeedsEscape for EscapeUriSegment {
    fn char_needs_escape(c: char) -> bool {
        c == '+' || !is_char_uri_pchar(c)
    }
}

/// A zero-sized implementor of [`NeedsEscape`] for escaping queries and fragments.
///
/// Its behavior is subject to change and is not considered stable.
#[doc(hidden)]
#[derive(Default, Copy, Clone, Debug)]
pub struct EscapeUriQueryOrFragment;
impl NeedsEscape for EscapeUriQueryOrFragment {
    fn char_needs_escape(c: char) -> bool {
        c == '+' || !is_char_uri_query_or_fragment(c)
    }
}

/// An iterator used to apply URI percent encoding to strings.
///
/// It is constructed via the method [`escape_uri()`] or the function
/// [`escape_uri_bytes()`]. See the documentation for [`StrExt`] for more information.
///
/// [`StrExt`]: trait.StrExt.html
/// [`escape_uri()`]: trait.StrExt.html#tymethod.escape_uri
/// [`escape_uri_bytes()`]: fn.escape_uri_bytes.html
#[derive(Debug, Clone)]
pub struct EscapeUri<'a, X: NeedsEscape = EscapeUriSegment> {
    pub(super) iter: std::slice::Iter<'a, u8>,
    pub(super) state: EscapeUriState,
    pub(super) needs_escape: PhantomData<X>,
}

impl<'a, X: NeedsEscape> From<EscapeUri<'a, X>> for Cow<'a, str> {
    fn from(iter: EscapeUri<'a, X>) -> Self {
        iter.to_cow()
    }
}

impl<'a, X: NeedsEscape> EscapeUri<'a, X> {
    /// Determines if this iterator will actually escape anything.
    pub fn is_needed(&self) -> bool {
        self.iter.clone().any(|b| X::byte_needs_escape(*b))
    }

    /// Converts this iterator into a [`std::borrow::Cow<str>`].
    pub fn to_cow(&self) -> Cow<'a, str> {
        if self.is_needed() {
            return Cow::from(self.to_string());
        }

        // Nothing needs escaping, so every byte is ASCII.
        match std::str::from_utf8(self.iter.as_slice()) {
            Ok(s) => Cow::from(s),
            Err(_) => Cow::from(self.to_string()),
        }
    }

    /// Converts this iterator into one for escaping query or fragment components.
    pub fn for_query_or_fragment(self) -> EscapeUri<'a, EscapeUriQueryOrFragment> {
        EscapeUri {
            iter: self.iter,
            state: self.state,
            needs_escape: PhantomData,
        }
    }
}

impl<'a, X: NeedsEscape> Display for EscapeUri<'a, X> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.clone().try_for_each(|c| f.write_char(c))
    }
}

impl<'a, X: NeedsEscape> FusedIterator for EscapeUri<'a, X> {}

impl<'a, X: NeedsEscape> Iterator for EscapeUri<'a, X> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        match self.state {
            EscapeUriState::Normal => match self.iter.next().copied() {
                Some(b) if X::byte_needs_escape(b) => {
                    self.state = EscapeUriState::OutputHighNibble(b);
                    Some('%')
                }
                Some(b) => Some(b as char),
                None => None,
            },

            EscapeUriState::OutputHighNibble(b) => {
                self.state = EscapeUriState::OutputLowNibble(b);
                Some(HEX_DIGITS[(b >> 4) as usize] as char)
            }

            EscapeUriState::OutputLowNibble(b) => {
                self.state = EscapeUriState::Normal;
                Some(HEX_DIGITS[(b & 0b1111) as usize] as char)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.iter.size_hint().0;
        (n, Some(n * 3 + 2))
    }
}
