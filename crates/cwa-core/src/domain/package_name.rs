//! npm package-name rules.
//!
//! Two pure functions: [`is_valid_package_name`] checks a name against the
//! registry convention, [`to_valid_package_name`] coerces arbitrary input
//! (usually a directory basename) into a name that passes that check.

use std::sync::LazyLock;

use regex::Regex;

/// Optional `@scope/` prefix followed by the bare name. No uppercase, and the
/// bare name may not start with `.` or `_`.
static VALID_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$")
        .expect("package name pattern is valid")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static DISALLOWED_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\-~]+").expect("disallowed pattern is valid"));

/// `true` iff `name` is acceptable to the npm registry.
pub fn is_valid_package_name(name: &str) -> bool {
    VALID_NAME.is_match(name)
}

/// Normalise `name` into a valid package name.
///
/// Lowercases, trims, turns whitespace runs into `-`, drops one leading `.`
/// or `_`, then replaces every remaining run of disallowed characters with a
/// single `-`. The result is empty when nothing usable was left.
pub fn to_valid_package_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    let stripped = hyphenated
        .strip_prefix(&['.', '_'][..])
        .unwrap_or(&*hyphenated);
    DISALLOWED_RUN.replace_all(stripped, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_scoped_names() {
        for name in ["my-app", "app2", "a.b_c~d", "@acme/widget", "@a*b/c", "-lead", "~x"] {
            assert!(is_valid_package_name(name), "should accept {name}");
        }
    }

    #[test]
    fn rejects_uppercase_and_leading_dot_or_underscore() {
        for name in ["MyApp", ".hidden", "_private", "", "my app", "@Acme/x", "@acme/.x", "a/b"] {
            assert!(!is_valid_package_name(name), "should reject {name:?}");
        }
    }

    #[test]
    fn normalises_typical_directory_names() {
        assert_eq!(to_valid_package_name("My Web App"), "my-web-app");
        assert_eq!(to_valid_package_name("  Spaced   Out  "), "spaced-out");
        assert_eq!(to_valid_package_name(".dotfile"), "dotfile");
        assert_eq!(to_valid_package_name("_under"), "under");
        assert_eq!(to_valid_package_name("a.b_c"), "a-b-c");
        assert_eq!(to_valid_package_name("hello!!world"), "hello-world");
    }

    #[test]
    fn strips_only_one_leading_marker() {
        assert_eq!(to_valid_package_name("..x"), "-x");
    }

    #[test]
    fn normalised_names_are_valid() {
        let samples = [
            "My Project",
            "project_with_underscores",
            "CamelCase",
            "émoji ✨ app",
            "@Scope/Name",
            "tab\tseparated",
            "trailing-",
            "123",
        ];
        for sample in samples {
            let normalised = to_valid_package_name(sample);
            assert!(
                is_valid_package_name(&normalised),
                "{sample:?} -> {normalised:?} should be valid"
            );
        }
    }

    #[test]
    fn normalisation_is_idempotent() {
        for sample in ["My Project", "..odd..name..", "ÜBER app", "a  b", "x_y.z"] {
            let once = to_valid_package_name(sample);
            assert_eq!(to_valid_package_name(&once), once, "input {sample:?}");
        }
    }

    #[test]
    fn nothing_usable_yields_empty() {
        assert_eq!(to_valid_package_name("   "), "");
        assert_eq!(to_valid_package_name("."), "");
    }
}
