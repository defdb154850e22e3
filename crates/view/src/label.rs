//! Display label for a product name.
//!
//! Lengths are counted in `char`s so a cut never lands inside a code point.

/// Collapsed names longer than this are cut to this many characters.
pub const TRUNCATE_AFTER: usize = 8;

/// Names longer than this count as long for layout purposes.
///
/// This is not the truncation threshold: a 9 or 10 character name is cut when
/// collapsed but is not long.
pub const LONG_NAME_AFTER: usize = 10;

pub const ELLIPSIS: &str = "...";

/// Label shown for `name` given the item's expansion state.
pub fn display_name(name: &str, expanded: bool) -> String {
    display_name_with(name, expanded, TRUNCATE_AFTER, ELLIPSIS)
}

pub fn display_name_with(name: &str, expanded: bool, truncate_after: usize, ellipsis: &str) -> String {
    if expanded || name.chars().count() <= truncate_after {
        return name.to_string();
    }

    let mut label: String = name.chars().take(truncate_after).collect();
    label.push_str(ellipsis);
    label
}

pub fn is_long_name(name: &str) -> bool {
    is_longer_than(name, LONG_NAME_AFTER)
}

pub fn is_longer_than(name: &str, threshold: usize) -> bool {
    name.chars().count() > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_are_untouched() {
        assert_eq!(display_name("", false), "");
        assert_eq!(display_name("Milk", false), "Milk");
        assert_eq!(display_name("Eight888", false), "Eight888");
    }

    #[test]
    fn nine_chars_truncate_but_are_not_long() {
        let name = "Nine99999";
        assert_eq!(display_name(name, false), "Nine9999...");
        assert!(!is_long_name(name));
    }

    #[test]
    fn ten_chars_truncate_but_are_not_long() {
        let name = "TenTenTen!";
        assert_eq!(display_name(name, false), "TenTenTe...");
        assert!(!is_long_name(name));
    }

    #[test]
    fn eleven_chars_are_long() {
        assert!(is_long_name("Eleven11111"));
    }

    #[test]
    fn expanded_shows_full_name() {
        assert_eq!(display_name("Extra Long Product", true), "Extra Long Product");
    }

    #[test]
    fn multibyte_names_cut_on_char_boundaries() {
        assert_eq!(display_name("Crème brûlée", false), "Crème br...");
        assert_eq!(display_name("日本のお茶とお菓子", false), "日本のお茶とお菓...");
    }

    #[test]
    fn custom_rules_apply() {
        assert_eq!(display_name_with("abcdef", false, 3, "…"), "abc…");
        assert!(is_longer_than("abcd", 3));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: a collapsed label is the name itself or an 8-char prefix plus ellipsis.
            #[test]
            fn collapsed_label_is_prefix_or_identity(name in "\\PC{0,20}") {
                let label = display_name(&name, false);
                if name.chars().count() <= TRUNCATE_AFTER {
                    prop_assert_eq!(label, name);
                } else {
                    let prefix: String = name.chars().take(TRUNCATE_AFTER).collect();
                    prop_assert_eq!(label, format!("{prefix}{ELLIPSIS}"));
                }
            }

            /// Property: expanded labels never change the name.
            #[test]
            fn expanded_is_identity(name in "\\PC{0,20}") {
                prop_assert_eq!(display_name(&name, true), name);
            }
        }
    }
}
