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

use regex::Regex;
lazy_static! {
    /// Regex for verifying that a URI scheme is well-formed.
    pub(crate) static ref URI_CHECK_SCHEME: Regex = Regex::new(r#"^[A-Za-z][-+.A-Za-z0-9]*$"#)
        .expect("URI_CHECK_SCHEME");

    /// Regex for verifying that a port is a non-empty run of decimal digits.
    pub(crate) static ref URI_CHECK_PORT: Regex = Regex::new(r#"^[0-9]+$"#)
        .expect("URI_CHECK_PORT");

    /// Regex matching a path segment that is a Windows/DOS drive letter, like `c:`.
    pub(crate) static ref PATH_DRIVE_LETTER: Regex = Regex::new(r#"^[A-Za-z]:$"#)
        .expect("PATH_DRIVE_LETTER");
}
