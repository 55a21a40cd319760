//! Path normalization for ECCU subtree rules.
//!
//! Asset paths arrive as slash-delimited strings with inconsistent leading,
//! trailing, and duplicate slashes, and are composed with per-release
//! prefixes before they become match rules. This module reduces any
//! prefix/path pair to the ordered list of non-empty segments the tree
//! builder nests on.

/// Split `prefix` + `path` into ordered, non-empty path segments.
///
/// The two parts are joined with a separating slash, so callers never need
/// to care whether either side carries its own. Empty segments (from
/// leading, trailing, or doubled slashes) are dropped; order is preserved
/// root-to-leaf.
///
/// An input that reduces to nothing but slashes yields an empty vector,
/// which the tree builder turns into a depth-0 rule.
///
/// # Examples
///
/// ```
/// use cache_buster::eccu::path_segments;
///
/// assert_eq!(path_segments("/stable", "index.html"), vec!["stable", "index.html"]);
/// assert_eq!(path_segments("apps/", "/insights"), vec!["apps", "insights"]);
/// assert_eq!(path_segments("", "///"), Vec::<String>::new());
/// ```
#[must_use]
pub fn path_segments(prefix: &str, path: &str) -> Vec<String> {
    format!("{prefix}/{path}")
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}
