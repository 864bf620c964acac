//! Version markers embedded in source files
//!
//! Two marker forms are recognised, both case-insensitive:
//! - a class constant: `const VERSION = "1.2.3";`
//! - a docblock annotation: `@version 1.2.3`
//!
//! Everything here works on whole-file content so it can be tested without
//! touching the filesystem.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

static CLASS_CONSTANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)const\s+version\s*=\s*["'](.*?)["'];"#)
        .expect("class constant pattern is a valid regex")
});

static DOCBLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)@version\s+(\S+)").expect("docblock pattern is a valid regex")
});

/// Extracts the version held by a source file.
///
/// The class constant takes precedence over the docblock annotation; only the
/// first match of the winning pattern is used.
pub fn extract_version(content: &str) -> Option<&str> {
    CLASS_CONSTANT
        .captures(content)
        .or_else(|| DOCBLOCK.captures(content))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Rewrites every version marker in `content` to `new_version`.
///
/// Class constants become `const VERSION = "<new>";` and annotations become
/// `@VERSION <new>`. Content without markers comes back unchanged.
pub fn replace_version_markers(content: &str, new_version: &str) -> String {
    let constant = format!(r#"const VERSION = "{}";"#, new_version);
    let annotation = format!("@VERSION {}", new_version);

    let content = CLASS_CONSTANT.replace_all(content, NoExpand(&constant));
    DOCBLOCK
        .replace_all(&content, NoExpand(&annotation))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASS_SOURCE: &str = r#"<?php
namespace Acme;

class Kernel
{
    const VERSION = "1.0.0";

    public function boot() {}
}
"#;

    #[test]
    fn test_extract_class_constant() {
        assert_eq!(extract_version(CLASS_SOURCE), Some("1.0.0"));
    }

    #[test]
    fn test_extract_is_case_insensitive_and_accepts_single_quotes() {
        assert_eq!(extract_version("CONST Version = '2.1';"), Some("2.1"));
    }

    #[test]
    fn test_extract_docblock() {
        let content = "/**\n * Acme kernel\n *\n * @Version 3.0.0-beta trailing words\n */";
        assert_eq!(extract_version(content), Some("3.0.0-beta"));
    }

    #[test]
    fn test_class_constant_wins_over_docblock() {
        let content = "/** @version 9.9.9 */\nclass A { const VERSION = \"1.2.3\"; }";
        assert_eq!(extract_version(content), Some("1.2.3"));
    }

    #[test]
    fn test_extract_without_marker() {
        assert_eq!(extract_version("<?php echo 'hello';"), None);
        assert_eq!(extract_version(""), None);
    }

    #[test]
    fn test_replace_class_constant_only_touches_marker() {
        let replaced = replace_version_markers(CLASS_SOURCE, "1.0.1");
        assert_eq!(
            replaced,
            CLASS_SOURCE.replace(r#"const VERSION = "1.0.0";"#, r#"const VERSION = "1.0.1";"#)
        );
    }

    #[test]
    fn test_replace_canonicalizes_spelling() {
        let replaced = replace_version_markers("const version = '1.0';", "1.0.1");
        assert_eq!(replaced, r#"const VERSION = "1.0.1";"#);
    }

    #[test]
    fn test_replace_docblock() {
        let replaced = replace_version_markers(" * @version 1.0.0\n", "2.0.0");
        assert_eq!(replaced, " * @VERSION 2.0.0\n");
    }

    #[test]
    fn test_replace_all_occurrences_of_both_forms() {
        let content = "/** @version 1.0.0 */\nconst VERSION = \"1.0.0\";\n/** @version 1.0.0 */\n";
        let replaced = replace_version_markers(content, "1.1.0");
        assert_eq!(
            replaced,
            "/** @VERSION 1.1.0 */\nconst VERSION = \"1.1.0\";\n/** @VERSION 1.1.0 */\n"
        );
    }

    #[test]
    fn test_replace_without_marker_is_noop() {
        let content = "<?php\nfunction f() { return 1; }\n";
        assert_eq!(replace_version_markers(content, "1.0.1"), content);
    }

    #[test]
    fn test_replacement_text_is_literal() {
        let replaced = replace_version_markers("@version 1.0.0", "$1.0.0");
        assert_eq!(replaced, "@VERSION $1.0.0");
    }
}
