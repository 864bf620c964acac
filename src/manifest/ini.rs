//! `package.ini` reading and rewriting
//!
//! Reading understands sections, `key = value` pairs, `;`/`#` comments and
//! quoted values. Writing is a line substitution so everything outside the
//! `version` line stays byte-identical.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

const PACKAGE_SECTION: &str = "package";

static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^version[ \t]*=[^\r\n]*").expect("version line pattern is a valid regex")
});

/// Returns `version` from the `[package]` section.
pub fn read_version(content: &str) -> Option<String> {
    let mut section: Option<&str> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = Some(name.trim());
            continue;
        }

        if section != Some(PACKAGE_SECTION) {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            if key.trim() == "version" {
                return Some(unquote(value.trim()).to_string());
            }
        }
    }

    None
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.split_once(quote))
            .map(|(inner, _)| inner)
        {
            return inner;
        }
    }
    // Unquoted values end at an inline comment
    value.split(';').next().unwrap_or(value).trim_end()
}

/// Rewrites every `version = ...` line to `version = <new>`.
///
/// Returns `None` when nothing would change.
pub fn set_version(content: &str, new_version: &str) -> Option<String> {
    let line = format!("version = {}", new_version);
    let updated = VERSION_LINE.replace_all(content, NoExpand(&line));
    (updated != content).then(|| updated.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACKAGE: &str = "; Acme package\n[package]\nname = acme\nversion = 1.0.0\ndesc = \"Kernel\"\n\n[require]\nphp = 8.1\n";

    #[test]
    fn test_read_version() {
        assert_eq!(read_version(PACKAGE).as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_read_version_quoted_and_commented() {
        assert_eq!(
            read_version("[package]\nversion = \"2.0.0-beta\"\n").as_deref(),
            Some("2.0.0-beta")
        );
        assert_eq!(
            read_version("[package]\nversion = 2.0.0 ; next release\n").as_deref(),
            Some("2.0.0")
        );
    }

    #[test]
    fn test_read_version_only_from_package_section() {
        let content = "[other]\nversion = 9.9.9\n[package]\nname = acme\n";
        assert_eq!(read_version(content), None);
    }

    #[test]
    fn test_read_version_without_section() {
        assert_eq!(read_version("version = 1.0.0\n"), None);
        assert_eq!(read_version(""), None);
    }

    #[test]
    fn test_set_version_changes_only_version_line() {
        let updated = set_version(PACKAGE, "1.0.1").unwrap();
        assert_eq!(updated, PACKAGE.replace("version = 1.0.0", "version = 1.0.1"));
    }

    #[test]
    fn test_set_version_normalizes_spacing_and_case() {
        let updated = set_version("[package]\nVERSION=1.0.0\n", "1.0.1").unwrap();
        assert_eq!(updated, "[package]\nversion = 1.0.1\n");
    }

    #[test]
    fn test_set_version_keeps_crlf() {
        let updated = set_version("[package]\r\nversion = 1.0.0\r\nname = x\r\n", "1.0.1").unwrap();
        assert_eq!(updated, "[package]\r\nversion = 1.0.1\r\nname = x\r\n");
    }

    #[test]
    fn test_set_version_without_change() {
        assert_eq!(set_version("[package]\nname = acme\n", "1.0.1"), None);
        assert_eq!(set_version("version = 1.0.1\n", "1.0.1"), None);
    }

    #[test]
    fn test_set_version_ignores_prefixed_keys() {
        assert_eq!(set_version("[package]\nmin_version = 1.0\n", "2.0.0"), None);
    }
}
