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

/// Returns true if `segment` is a Windows/DOS drive letter, like `c:`.
pub(crate) fn is_drive_letter(segment: &str) -> bool {
    PATH_DRIVE_LETTER.is_match(segment)
}

/// Removes `.` and `..` segments from `path`, per [IETF-RFC3986 section 5.2.4].
///
/// Excess `..` segments clamp at the root instead of failing. If
/// `protect_drive_letters` is set, a `..` never removes a drive letter segment.
///
/// [IETF-RFC3986 section 5.2.4]: https://tools.ietf.org/html/rfc3986#section-5.2.4
pub(crate) fn remove_dot_segments(path: &str, protect_drive_letters: bool) -> String {
    let mut input = path.split('/').peekable();
    let mut output: Vec<&str> = Vec::new();

    while let Some(segment) = input.next() {
        let is_last = input.peek().is_none();

        match segment {
            ".." => {
                let can_pop = match output.last() {
                    Some(last) => {
                        !last.is_empty() && !(protect_drive_letters && is_drive_letter(last))
                    }
                    None => false,
                };

                if can_pop {
                    output.pop();
                }

                if is_last {
                    output.push("");
                }
            }
            "." => {
                if is_last {
                    output.push("");
                }
            }
            _ => output.push(segment),
        }
    }

    output.join("/")
}

/// Merges a relative-path reference onto the path of its base, per
/// [IETF-RFC3986 section 5.2.3].
///
/// [IETF-RFC3986 section 5.2.3]: https://tools.ietf.org/html/rfc3986#section-5.2.3
pub(crate) fn merge_paths(base: &UriComponents, path: &str) -> String {
    if base.has_authority() && base.path.is_empty() {
        return format!("/{}", path);
    }

    match base.path.rfind('/') {
        Some(i) => format!("{}{}", &base.path[..=i], path),
        None => path.to_string(),
    }
}

/// Returns the leading part of `path` up to and including its drive letter,
/// if its first non-empty segment is one. E.g. `///c:` for `///c:/a/b`.
pub(crate) fn drive_letter_prefix(path: &str) -> Option<&str> {
    let start = path.len() - path.trim_start_matches('/').len();
    let segment = scan_until_first_of(&path[start..], &['/']);

    if is_drive_letter(segment) {
        Some(&path[..start + segment.len()])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_segments() {
        let table = vec![
            ("/a/b/c/./../../g", "/a/g"),
            ("mid/content=5/../6", "mid/6"),
            ("/b/c/../../../g", "/g"),
            ("/b/c/d;p/../../../../g", "/g"),
            ("/b/c/./g", "/b/c/g"),
            ("/b/c/.", "/b/c/"),
            ("/b/c/..", "/b/"),
            ("/b/c/../", "/b/"),
            ("/b/c/g.", "/b/c/g."),
            ("/b/c/..g", "/b/c/..g"),
            ("/./g", "/g"),
            ("/../g", "/g"),
            ("/..", "/"),
            ("/.", "/"),
            ("/a//../b", "/a//b"),
            ("b/../c/g;x", "c/g;x"),
            ("", ""),
            ("/", "/"),
        ];

        for (input, expected) in table {
            assert_eq!(remove_dot_segments(input, false), expected, "Input: {:?}", input);
        }
    }

    #[test]
    fn dot_segments_drive_letters() {
        let table = vec![
            ("///c:/a/b/../../../g", "///c:/g", "///g"),
            ("///c:/a/b/../../../../g", "///c:/g", "///g"),
            ("///c:/a/..", "///c:/", "///c:/"),
            ("///c:/..", "///c:/", "///"),
            ("/c:/../g", "/c:/g", "/g"),
            ("///C:/x/./y", "///C:/x/y", "///C:/x/y"),
            ("///cd:/../g", "///g", "///g"),
        ];

        for (input, protected, unprotected) in table {
            assert_eq!(remove_dot_segments(input, true), protected, "Input: {:?}", input);
            assert_eq!(remove_dot_segments(input, false), unprotected, "Input: {:?}", input);
        }
    }

    #[test]
    fn merge() {
        let base = UriComponents {
            host: Some("a".to_string()),
            path: "/b/c/d;p".to_string(),
            ..UriComponents::default()
        };
        assert_eq!(merge_paths(&base, "g"), "/b/c/g");

        let base = UriComponents {
            host: Some("a".to_string()),
            ..UriComponents::default()
        };
        assert_eq!(merge_paths(&base, "g"), "/g");

        let base = UriComponents {
            path: "a:b".to_string(),
            ..UriComponents::default()
        };
        assert_eq!(merge_paths(&base, "g"), "g");
    }

    #[test]
    fn drive_letter() {
        assert!(is_drive_letter("c:"));
        assert!(is_drive_letter("Z:"));
        assert!(!is_drive_letter("cd:"));
        assert!(!is_drive_letter("1:"));
        assert!(!is_drive_letter("c"));

        assert_eq!(drive_letter_prefix("///c:/a/b"), Some("///c:"));
        assert_eq!(drive_letter_prefix("/D:"), Some("/D:"));
        assert_eq!(drive_letter_prefix("c:/a"), Some("c:"));
        assert_eq!(drive_letter_prefix("///a/c:/b"), None);
        assert_eq!(drive_letter_prefix("///"), None);
        assert_eq!(drive_letter_prefix(""), None);
    }
}
