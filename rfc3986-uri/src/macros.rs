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

//! Macro definitions shared by the scheme-specific URI wrappers.

/// Implements constructors, conversions and the usual traits for a newtype
/// wrapper `$C(Uri)` whose values are always built with `$KIND`.
macro_rules! impl_uri_variant_traits {
    ( $C:ident, $KIND:expr ) => {
        impl $C {
            /// Parses a URI or relative reference with the rules of this type.
            pub fn parse(raw: &str) -> Result<$C, $crate::Error> {
                $crate::Uri::parse_as($KIND, raw, None).map($C)
            }

            /// Parses `raw` and, if it has no scheme, resolves it against `base`.
            ///
            /// The base is parsed with the rules of this type, and must have a scheme.
            pub fn parse_with_base(raw: &str, base: &str) -> Result<$C, $crate::Error> {
                $crate::Uri::parse_as($KIND, raw, Some(base)).map($C)
            }

            /// Borrows the underlying [`Uri`](crate::Uri).
            #[inline(always)]
            pub fn as_uri(&self) -> &$crate::Uri {
                &self.0
            }

            /// Unwraps the underlying [`Uri`](crate::Uri).
            #[inline(always)]
            pub fn into_uri(self) -> $crate::Uri {
                self.0
            }

            /// Normalizes in place. See [`Uri::normalize`](crate::Uri::normalize).
            pub fn normalize(&mut self) -> &mut Self {
                self.0.normalize();
                self
            }

            /// Returns a normalized copy, leaving this value untouched.
            pub fn normalized(&self) -> $C {
                $C(self.0.normalized())
            }
        }

        impl core::ops::Deref for $C {
            type Target = $crate::Uri;

            fn deref(&self) -> &Self::Target {
                self.as_uri()
            }
        }

        impl AsRef<$crate::Uri> for $C {
            fn as_ref(&self) -> &$crate::Uri {
                self.as_uri()
            }
        }

        impl AsRef<str> for $C {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl core::fmt::Display for $C {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl core::str::FromStr for $C {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$C>::parse(s)
            }
        }

        impl core::convert::TryFrom<&str> for $C {
            type Error = $crate::Error;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                <$C>::parse(s)
            }
        }

        impl core::convert::From<$C> for $crate::Uri {
            fn from(x: $C) -> Self {
                x.0
            }
        }

        impl core::convert::From<$C> for std::string::String {
            fn from(x: $C) -> Self {
                String::from(x.0)
            }
        }
    };
}
