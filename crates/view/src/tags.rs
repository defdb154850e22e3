//! Category tag parsing.

/// Split a raw comma-separated category string into trimmed tags.
///
/// Order is kept, duplicates are kept, and empty pieces are kept: `""` yields one
/// empty tag and `"A,,B"` yields three tags.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_each_piece() {
        assert_eq!(parse_tags("A, B ,C"), vec!["A", "B", "C"]);
    }

    #[test]
    fn empty_string_yields_one_empty_tag() {
        assert_eq!(parse_tags(""), vec![""]);
    }

    #[test]
    fn keeps_empty_pieces_and_duplicates() {
        assert_eq!(parse_tags("Dairy,, Dairy ,"), vec!["Dairy", "", "Dairy", ""]);
    }

    #[test]
    fn inner_whitespace_is_preserved() {
        assert_eq!(parse_tags("  Frozen Food  "), vec!["Frozen Food"]);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: one tag per comma-separated piece, each trimmed.
            #[test]
            fn one_tag_per_piece(raw in "[a-z ,]{0,30}") {
                let tags = parse_tags(&raw);
                prop_assert_eq!(tags.len(), raw.matches(',').count() + 1);
                for tag in &tags {
                    prop_assert_eq!(tag.as_str(), tag.trim());
                }
            }
        }
    }
}
