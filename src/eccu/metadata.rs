//! ECCU invalidation metadata construction.
//!
//! This is the heart of the tool: compiling flat asset paths into the nested
//! `match:recursive-dirs` markup Akamai's ECCU API consumes. Each input path
//! becomes its own independent chain of subtree-match rules terminated by a
//! `<revalidate>now</revalidate>` leaf; chains are never merged, even when
//! two paths share a prefix, and nothing is deduplicated across releases.
//!
//! For every release in the release map the assembled document contains, in
//! order: one chain for the release's `apps/<name>` asset prefix, one chain
//! per known HTML path, and one chain for the release's chrome config. All
//! of it is wrapped in a single `<eccu>` root element.

use tracing::debug;

use super::path::path_segments;
use crate::remote::ReleaseMap;

/// Fixed XML declaration, provenance comment, and root element opener.
const DOCUMENT_HEADER: &str =
    "<?xml version=\"1.0\"?>\n<!-- Submitted by the bust-cache deploy tool automatically -->\n<eccu>\n";

/// Indent unit for asset-prefix and chrome-config chains.
const DIR_RULE_INDENT: &str = "    ";

/// Indent unit for HTML path chains.
///
/// Narrower than [`DIR_RULE_INDENT`]; kept that way so resubmitted documents
/// diff cleanly against previously accepted requests.
const HTML_RULE_INDENT: &str = "   ";

/// Well-known configuration asset invalidated for every release.
const CHROME_CONFIG_PATH: &str = "config/chrome";

/// Emit one nested subtree-match chain for an ordered segment sequence.
///
/// Segment `i` opens a `<match:recursive-dirs>` rule at indent depth `i`;
/// the deepest level holds the single revalidate leaf; closing tags follow
/// in strict reverse order of opening, deepest first. An empty sequence
/// degenerates to the bare revalidate line with no nesting and no closing
/// tags.
fn subtree(segments: &[String], indent: &str) -> String {
    let mut chain = String::new();

    for (depth, segment) in segments.iter().enumerate() {
        chain.push_str(&indent.repeat(depth));
        chain.push_str(&format!("<match:recursive-dirs value=\"{segment}\">\n"));
    }

    chain.push_str(&indent.repeat(segments.len()));
    chain.push_str("<revalidate>now</revalidate>\n");

    for depth in (0..segments.len()).rev() {
        chain.push_str(&indent.repeat(depth));
        chain.push_str("</match:recursive-dirs>\n");
    }

    chain
}

/// Assemble the full invalidation document for one application.
///
/// Iterates the release map in document order; for each release emits the
/// asset-prefix chain (prefix defaulting to `/` when the release has none),
/// one chain per HTML path, and the chrome-config chain (both with the
/// prefix defaulting to the empty string). The two defaults differ on
/// purpose; they reproduce the wire format Akamai already accepts.
///
/// The output is deterministic: identical inputs produce byte-identical
/// markup.
#[must_use]
pub fn build_metadata(app_name: &str, html_paths: &[String], releases: &ReleaseMap) -> String {
    let mut metadata = String::from(DOCUMENT_HEADER);

    for (release, entry) in releases {
        debug!(%release, "generating invalidation chains");

        // JS/CSS assets live under apps/<prefix>/<name>
        let asset_prefix = entry.content_path_prefix.as_deref().unwrap_or("/");
        metadata.push_str(&subtree(
            &path_segments(&format!("apps{asset_prefix}"), app_name),
            DIR_RULE_INDENT,
        ));

        let prefix = entry.content_path_prefix.as_deref().unwrap_or("");
        for path in html_paths {
            metadata.push_str(&subtree(&path_segments(prefix, path), HTML_RULE_INDENT));
        }

        metadata.push_str(&subtree(
            &path_segments(prefix, CHROME_CONFIG_PATH),
            DIR_RULE_INDENT,
        ));
    }

    metadata.push_str("</eccu>");
    metadata
}
