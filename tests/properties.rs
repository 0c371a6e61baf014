use filetidy::file_category::Category;
use filetidy::file_name::{FilenameParts, normalize_stem};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_is_idempotent(stem in "[A-Za-zÀ-ÿ0-9 ._()\\-\t]{0,40}") {
        let once = normalize_stem(&stem);
        prop_assert_eq!(normalize_stem(&once), once);
    }

    #[test]
    fn normalized_stem_has_no_separators_or_edge_underscores(
        stem in "[A-Za-z0-9 ._\\-]{0,40}"
    ) {
        let normalized = normalize_stem(&stem);
        prop_assert!(!normalized.contains(|c: char| c.is_whitespace() || c == '.' || c == '-'));
        prop_assert!(!normalized.starts_with('_'));
        prop_assert!(!normalized.ends_with('_'));
    }

    #[test]
    fn normalized_stem_is_lowercase(stem in "[A-Za-z0-9 ]{0,40}") {
        let normalized = normalize_stem(&stem);
        prop_assert_eq!(normalized.to_lowercase(), normalized);
    }

    #[test]
    fn extension_survives_normalization(
        stem in "[A-Za-z0-9][A-Za-z0-9 \\-]{0,20}",
        ext in "[A-Za-z0-9]{1,5}"
    ) {
        let name = format!("{}.{}", stem, ext);
        let parts = FilenameParts::split(&name);
        prop_assert_eq!(parts.extension, format!(".{}", ext));
        let renamed = parts.normalized_name();
        let suffix = format!(".{}", ext);
        prop_assert!(renamed.ends_with(&suffix));
    }

    #[test]
    fn category_ignores_extension_case(ext in "[a-z]{1,6}") {
        prop_assert_eq!(
            Category::from_extension(&ext),
            Category::from_extension(&ext.to_uppercase())
        );
    }
}
