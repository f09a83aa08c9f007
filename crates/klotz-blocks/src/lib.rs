//! Block-kind catalog: tags, footprints, visual variants, auto-sizing.
#![forbid(unsafe_code)]

mod catalog;
mod config;

pub use catalog::{BlockCatalog, BlockKind, KindId, Variant, cells_for_bounds};
pub use config::{CatalogConfig, KindDef, VariantDef};

/// Canonical tag form: surrounding whitespace stripped, ASCII-lowercased.
/// Every tag comparison in the workspace goes through this.
pub fn canonical_tag(tag: &str) -> String {
    tag.trim().to_ascii_lowercase()
}

/// Tag equality under the canonical form. An empty tag never matches; use
/// [`tag_is_wildcard`] to test for "accepts anything" slots first.
pub fn tag_matches(a: &str, b: &str) -> bool {
    let ca = canonical_tag(a);
    if ca.is_empty() {
        return false;
    }
    ca == canonical_tag(b)
}

/// A slot tag that is empty after trimming constrains nothing.
pub fn tag_is_wildcard(tag: &str) -> bool {
    tag.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_trim_and_ignore_case() {
        assert!(tag_matches("  Girder ", "girder"));
        assert!(tag_matches("BEAM", "beam"));
        assert!(!tag_matches("beam", "girder"));
    }

    #[test]
    fn empty_tags_never_match() {
        assert!(!tag_matches("", ""));
        assert!(!tag_matches("   ", "beam"));
        assert!(tag_is_wildcard("  "));
        assert!(!tag_is_wildcard(" x "));
    }
}
