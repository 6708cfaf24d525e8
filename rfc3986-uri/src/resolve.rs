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

/// Transforms `target` in place into the absolute URI it refers to when
/// resolved against `base`, per [IETF-RFC3986 section 5.2.2] (strict).
///
/// `base` is expected to carry a scheme. The fragment is never taken from
/// `base`.
///
/// [IETF-RFC3986 section 5.2.2]: https://tools.ietf.org/html/rfc3986#section-5.2.2
pub(crate) fn resolve(kind: SchemeKind, target: &mut UriComponents, base: &UriComponents) {
    let protect = kind.protects_drive_letters();

    if target.scheme.is_some() {
        debug!("Reference is absolute, only removing dot segments");
        target.path = remove_dot_segments(&target.path, protect);
    } else if target.has_authority() {
        debug!("Reference is network-path, keeping its authority");
        target.scheme = base.scheme.clone();
        target.path = remove_dot_segments(&target.path, protect);
    } else {
        target.scheme = base.scheme.clone();
        target.inherit_authority(base);

        if target.path.is_empty() {
            debug!("Reference has empty path, using the base path");
            target.path = base.path.clone();
            if target.query.is_none() {
                target.query = base.query.clone();
            }
        } else if target.path.starts_with('/') {
            debug!("Reference is absolute-path");
            if protect {
                if let Some(prefix) = drive_letter_prefix(&base.path) {
                    target.path.insert_str(0, prefix);
                }
            }
            target.path = remove_dot_segments(&target.path, protect);
        } else {
            debug!("Reference is relative-path, merging with the base path");
            let merged = merge_paths(base, &target.path);
            target.path = remove_dot_segments(&merged, protect);
        }
    }

    if !kind.allows_hostless_double_slash() {
        target.guard_double_slash_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(kind: SchemeKind, base: &str, reference: &str) -> String {
        let base = parse_reference(kind, base).expect("base");
        let mut target = parse_reference(kind, reference).expect("reference");
        resolve(kind, &mut target, &base);
        target.to_string()
    }

    #[test]
    fn fragment_never_inherited() {
        assert_eq!(resolved(SchemeKind::Generic, "http://a/b?q#f", ""), "http://a/b?q");
        assert_eq!(resolved(SchemeKind::Generic, "http://a/b?q#f", "#s"), "http://a/b?q#s");
        assert_eq!(resolved(SchemeKind::Generic, "http://a/b?q#f", "?y"), "http://a/b?y");
    }

    #[test]
    fn absolute_reference_removes_dot_segments() {
        assert_eq!(resolved(SchemeKind::Generic, "http://a/b", "g:/x/../y"), "g:/y");
        assert_eq!(resolved(SchemeKind::Generic, "http://a/b", "//h/./x/../y"), "http://h/y");
    }

    #[test]
    fn base_without_authority() {
        // The reference inherits the absence of an authority.
        assert_eq!(resolved(SchemeKind::Generic, "urn:a/b", "c"), "urn:a/c");
        assert_eq!(resolved(SchemeKind::Generic, "mailto:x@y", "z"), "mailto:z");
        assert_eq!(resolved(SchemeKind::Generic, "foo:/a/b", "../c"), "foo:/c");
    }

    #[test]
    fn double_slash_path_without_authority() {
        assert_eq!(resolved(SchemeKind::Generic, "foo:/a", ".//g"), "foo:/.//g");
        assert_eq!(resolved(SchemeKind::Generic, "foo:/a/b", "../..//g"), "foo:/.//g");
        assert_eq!(resolved(SchemeKind::Generic, "foo:/.//a", "b"), "foo:/.//b");
        assert_eq!(resolved(SchemeKind::Http, "http://a/b", ".//g"), "http://a//g");
    }

    #[test]
    fn userinfo_and_port_inherited() {
        assert_eq!(
            resolved(SchemeKind::Generic, "http://u:p@a:81/b/c", "../d"),
            "http://u:p@a:81/d"
        );
    }

    #[test]
    fn drive_letter_prepended() {
        let base = parse_reference(SchemeKind::File, "file:///c:/a/b").expect("base");

        let mut target = parse_reference(SchemeKind::File, "/g").expect("reference");
        resolve(SchemeKind::File, &mut target, &base);
        assert_eq!(target.path, "/c:/g");

        let mut target = parse_reference(SchemeKind::File, "/../../g").expect("reference");
        resolve(SchemeKind::File, &mut target, &base);
        assert_eq!(target.path, "/c:/g");

        // Only the file kind knows about drive letters.
        let mut target = parse_reference(SchemeKind::Generic, "/g").expect("reference");
        resolve(SchemeKind::Generic, &mut target, &base);
        assert_eq!(target.path, "/g");
    }
}
