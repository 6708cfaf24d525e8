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

use std::fmt;

/// The specific reason a URI failed to parse.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum SyntaxErrorKind {
    /// The scheme does not match `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    InvalidScheme(String),

    /// The scheme is well-formed, but the URI variant does not accept it.
    SchemeNotAllowed {
        /// The offending (lowercased) scheme.
        scheme: String,
        /// Human-readable name of what the variant accepts, like `"HTTP"`.
        expected: &'static str,
    },

    /// There is no authority, but the path begins with `//`.
    PathStartsWithDoubleSlash(String),

    /// There is an authority, but the non-empty path does not begin with `/`.
    PathNotAbsolute(String),

    /// The authority ends in `:` with nothing after it.
    EmptyPort,

    /// The port is not a run of decimal digits that fits in 16 bits.
    InvalidPort(String),

    /// The host is a bracketed IP literal, which is not supported.
    Ipv6Unsupported,

    /// A file URI was given without a scheme.
    MissingScheme,

    /// A file URI ended up without a path. Carries the composed URI.
    MissingPath(String),

    /// The base URI parsed, but it has no scheme.
    BaseNotAbsolute,

    /// The base URI could not be used. Carries the base's own error.
    InvalidBase(Box<UriSyntaxError>),
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScheme(scheme) => write!(f, "Invalid scheme: {}", scheme),
            Self::SchemeNotAllowed { expected, .. } => {
                write!(f, "Only {} scheme allowed", expected)
            }
            Self::PathStartsWithDoubleSlash(path) => write!(
                f,
                "Invalid path: '{}'. Can't begin with '//' if no authority was found",
                path
            ),
            Self::PathNotAbsolute(path) => write!(
                f,
                "Invalid path: '{}'. Must begin with '/' when an authority is present",
                path
            ),
            Self::EmptyPort => write!(f, "Port must not be empty"),
            Self::InvalidPort(port) => write!(f, "Port must be numeric: '{}'", port),
            Self::Ipv6Unsupported => write!(f, "IPv6 Addresses not yet supported"),
            Self::MissingScheme => write!(f, "File URIs must have a scheme"),
            Self::MissingPath(uri) => write!(
                f,
                "File URI '{}' must have a path. \
                 Is your File URI local and did you use '//' to start the path? That is illegal. \
                 Please use '///' or '/' for local File URIs.",
                uri
            ),
            Self::BaseNotAbsolute => write!(f, "The base Uri has to be absolute"),
            Self::InvalidBase(cause) => write!(f, "Invalid base Uri: {}", cause),
        }
    }
}

/// URI syntax error type.
///
/// This is the only error a caller can cause by handing in a bad URI or base URI.
/// Use [`UriSyntaxError::kind`] to find out exactly what was wrong.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct UriSyntaxError {
    kind: SyntaxErrorKind,
}

impl UriSyntaxError {
    /// Constructor for URI syntax errors.
    pub fn new(kind: SyntaxErrorKind) -> UriSyntaxError {
        UriSyntaxError { kind }
    }

    /// Wraps an error produced while parsing a base URI.
    pub fn invalid_base(cause: UriSyntaxError) -> UriSyntaxError {
        UriSyntaxError::new(SyntaxErrorKind::InvalidBase(Box::new(cause)))
    }

    /// The reason for this error.
    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    /// Returns true if this error was caused by the base URI rather than the reference.
    pub fn is_base_error(&self) -> bool {
        match self.kind {
            SyntaxErrorKind::InvalidBase(_) => true,
            _ => false,
        }
    }
}

impl fmt::Display for UriSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for UriSyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            SyntaxErrorKind::InvalidBase(cause) => Some(cause.as_ref()),
            _ => None,
        }
    }
}

impl From<SyntaxErrorKind> for UriSyntaxError {
    fn from(kind: SyntaxErrorKind) -> Self {
        UriSyntaxError::new(kind)
    }
}

/// Internal consistency failure: the parser finished but left input unconsumed.
///
/// This never happens for any input; if it does, it is a bug in this crate
/// rather than in the URI handed to it.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct InternalError {
    remaining: String,
}

impl InternalError {
    pub(crate) fn leftover_input<T: Into<String>>(remaining: T) -> InternalError {
        InternalError {
            remaining: remaining.into(),
        }
    }

    /// The input that the parser failed to consume.
    pub fn remaining(&self) -> &str {
        &self.remaining
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Still something left after parsing, shouldn't happen: '{}'",
            self.remaining
        )
    }
}

impl std::error::Error for InternalError {}

/// Error type for constructing a URI.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Error {
    /// The URI or its base is malformed.
    Syntax(UriSyntaxError),

    /// The parser violated one of its own invariants.
    Internal(InternalError),
}

impl Error {
    /// Returns the syntax error, if this is one.
    pub fn as_syntax_error(&self) -> Option<&UriSyntaxError> {
        match self {
            Error::Syntax(e) => Some(e),
            Error::Internal(_) => None,
        }
    }

    /// Shorthand for the [`SyntaxErrorKind`] of a syntax error.
    pub fn syntax_kind(&self) -> Option<&SyntaxErrorKind> {
        self.as_syntax_error().map(UriSyntaxError::kind)
    }

    /// Returns true if this error is an internal invariant violation.
    pub fn is_internal(&self) -> bool {
        match self {
            Error::Internal(_) => true,
            Error::Syntax(_) => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(e) => write!(f, "{}", e),
            Error::Internal(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Syntax(e) => Some(e),
            Error::Internal(e) => Some(e),
        }
    }
}

impl From<UriSyntaxError> for Error {
    fn from(error: UriSyntaxError) -> Self {
        Error::Syntax(error)
    }
}

impl From<SyntaxErrorKind> for Error {
    fn from(kind: SyntaxErrorKind) -> Self {
        Error::Syntax(kind.into())
    }
}

impl From<InternalError> for Error {
    fn from(error: InternalError) -> Self {
        Error::Internal(error)
    }
}
