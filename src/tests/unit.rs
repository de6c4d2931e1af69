#[cfg(test)]
mod unit_tests {

    use crate::{Codes, DEFAULT_MAX_LENGTH, DoubleMetaphone, encode, encode_with_max_length};

    fn pair(p: &str, a: &str) -> (String, String) {
        (p.to_string(), a.to_string())
    }

    #[test]
    fn empty_input() {
        assert_eq!(encode(""), pair("", ""));
        assert_eq!(encode("   "), pair("", ""));
        assert_eq!(encode("42 -- !"), pair("", ""));
    }

    #[test]
    fn jose() {
        assert_eq!(encode("Jose"), pair("HS", ""));
    }

    #[test]
    fn richard() {
        assert_eq!(encode("richard"), pair("RXRT", "RKRT"));
    }

    #[test]
    fn smith() {
        assert_eq!(encode("Smith"), pair("SM0", "XMT"));
    }

    #[test]
    fn school() {
        assert_eq!(encode("school"), pair("SKL", ""));
    }

    #[test]
    fn schwarzenegger_codes_diverge() {
        assert_eq!(encode("Schwarzenegger"), pair("XRSNKR", "XFRTSNKR"));
    }

    #[test]
    fn allerton_and_its_short_code() {
        assert_eq!(encode("ALLERTON"), pair("ALRTN", ""));
        assert_eq!(encode_with_max_length("ALLERTON", 4), pair("ALRT", ""));
        assert!(encode("ALLERTON").0.len() > encode_with_max_length("ALLERTON", 4).0.len());
    }

    #[test]
    fn zero_max_length_is_empty() {
        assert_eq!(encode_with_max_length("Schwarzenegger", 0), pair("", ""));
    }

    #[test]
    fn homophones() {
        assert_eq!(encode("catherine"), encode("katherine"));
        assert_eq!(encode("catherine"), pair("K0RN", "KTRN"));
        assert_eq!(encode("brian"), encode("bryan"));
        assert_eq!(encode("brian"), pair("PRN", ""));
    }

    #[test]
    fn multi_word_matches_contracted() {
        assert_eq!(encode("mac caffrey"), encode("maccaffrey"));
        assert_eq!(encode("mac caffrey"), pair("MKFR", ""));
    }

    #[test]
    fn free_function_uses_default_cap() {
        let long = "abcdefghijklmnopqrstuvwxyzabcdefghijklmnopqrstuvwxyz";
        assert_eq!(encode(long).0.len(), DEFAULT_MAX_LENGTH);
    }

    #[test]
    fn codes_accessors() {
        let codes: Codes = DoubleMetaphone::new().encode("Smith");
        assert_eq!(codes.primary(), "SM0");
        assert_eq!(codes.alternate(), "XMT");
        assert!(codes.has_alternate());
        assert_eq!(codes.to_string(), "SM0/XMT");
    }
}
