//! Document identifiers and URL slugs.
//!
//! Identifiers come from source filenames; slugs come from frontmatter or,
//! when absent, from the identifier.

use std::path::Path;

/// Derive a document identifier from its source path.
///
/// | Source | identifier |
/// |--------|------------|
/// | `content/posts/hello-world.md` | `hello-world` |
/// | `attention.v2.md` | `attention.v2` |
/// | `README` | `README` |
pub fn identifier_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_owned)
}

/// Resolve the slug for a document.
///
/// An explicit slug is used when it is already URL-safe; otherwise it is
/// slugified. Without an explicit slug the identifier is slugified.
pub fn resolve_slug(explicit: Option<&str>, identifier: &str) -> String {
    match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) if is_url_safe(slug) => slug.to_owned(),
        Some(slug) => slug::slugify(slug),
        None => slug::slugify(identifier),
    }
}

/// Whether a slug can be used in a URL path segment as-is.
pub fn is_url_safe(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_identifier_strips_extension() {
        let path = PathBuf::from("content/posts/hello-world.md");
        assert_eq!(identifier_from_path(&path).as_deref(), Some("hello-world"));
    }

    #[test]
    fn test_identifier_keeps_inner_dots() {
        let path = PathBuf::from("attention.v2.md");
        assert_eq!(identifier_from_path(&path).as_deref(), Some("attention.v2"));
    }

    #[test]
    fn test_identifier_without_extension() {
        let path = PathBuf::from("README");
        assert_eq!(identifier_from_path(&path).as_deref(), Some("README"));
    }

    #[test]
    fn test_identifier_empty_path() {
        assert_eq!(identifier_from_path(Path::new("")), None);
    }

    #[test]
    fn test_resolve_slug_prefers_explicit() {
        assert_eq!(resolve_slug(Some("custom-slug"), "file-name"), "custom-slug");
    }

    #[test]
    fn test_resolve_slug_slugifies_unsafe_explicit() {
        assert_eq!(resolve_slug(Some("Hello World!"), "file"), "hello-world");
    }

    #[test]
    fn test_resolve_slug_falls_back_to_identifier() {
        assert_eq!(resolve_slug(None, "my-first-post"), "my-first-post");
        assert_eq!(resolve_slug(Some("   "), "My Post"), "my-post");
    }

    #[test]
    fn test_is_url_safe() {
        assert!(is_url_safe("rust-2024_notes.v1"));
        assert!(!is_url_safe("has space"));
        assert!(!is_url_safe("a/b"));
        assert!(!is_url_safe("你好"));
        assert!(!is_url_safe(""));
    }
}
