mod prop_tests {
    use crate::{DEFAULT_MAX_LENGTH, DoubleMetaphone, encode, encode_with_max_length};
    use proptest::prelude::*;

    const SYMBOLS: &str = "0AFHJKLMNPRSTX";

    proptest! {
        #[test]
        fn codes_never_exceed_max_length(s in "\\PC{0,60}", max in 0usize..12) {
            let (p, a) = encode_with_max_length(&s, max);
            prop_assert!(p.len() <= max);
            prop_assert!(a.len() <= max);
        }

        #[test]
        fn default_cap_holds(s in "[a-zA-Z ]{0,120}") {
            let (p, a) = encode(&s);
            prop_assert!(p.len() <= DEFAULT_MAX_LENGTH);
            prop_assert!(a.len() <= DEFAULT_MAX_LENGTH);
        }

        #[test]
        fn alternate_is_never_a_copy(s in "\\PC{0,40}") {
            let (p, a) = encode(&s);
            prop_assert!(a.is_empty() || a != p);
        }

        #[test]
        fn only_code_symbols_are_emitted(s in "\\PC{0,40}") {
            let (p, a) = encode(&s);
            prop_assert!(p.chars().chain(a.chars()).all(|c| SYMBOLS.contains(c)));
        }

        #[test]
        fn deterministic(s in "\\PC{0,40}") {
            let dm = DoubleMetaphone::new();
            prop_assert_eq!(dm.encode(&s), dm.encode(&s));
        }

        #[test]
        fn case_does_not_matter(s in "[a-zA-Z ]{0,30}") {
            prop_assert_eq!(encode(&s.to_lowercase()), encode(&s.to_uppercase()));
        }

        #[test]
        fn punctuation_does_not_matter(a in "[a-z]{1,10}", b in "[a-z]{1,10}", p in "[-'.,]") {
            let joined = format!("{a}{b}");
            let punctuated = format!("{a}{p}{b}");
            prop_assert_eq!(encode(&joined), encode(&punctuated));
        }

        #[test]
        fn capped_primary_is_prefix(s in "[a-zA-Z ]{0,30}", max in 1usize..8) {
            let full = encode(&s).0;
            let short = encode_with_max_length(&s, max).0;
            prop_assert!(full.starts_with(&short));
            prop_assert_eq!(short.len(), full.len().min(max));
        }

        #[test]
        fn no_letters_no_code(s in "[0-9 .,;!?'-]{0,30}") {
            prop_assert_eq!(encode(&s), (String::new(), String::new()));
        }
    }
}
