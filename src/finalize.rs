use crate::engine::Output;
use std::fmt;

/// Primary and alternate Double Metaphone codes for one input.
///
/// `alternate` is empty when it would be identical to `primary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Codes {
    primary: String,
    alternate: String,
}

impl Codes {
    pub fn new(primary: impl Into<String>, alternate: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            alternate: alternate.into(),
        }
    }

    #[inline(always)]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    #[inline(always)]
    pub fn alternate(&self) -> &str {
        &self.alternate
    }

    #[inline(always)]
    pub fn has_alternate(&self) -> bool {
        !self.alternate.is_empty()
    }
}

impl fmt::Display for Codes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_alternate() {
            write!(f, "{}/{}", self.primary, self.alternate)
        } else {
            f.write_str(&self.primary)
        }
    }
}

impl From<Codes> for (String, String) {
    fn from(codes: Codes) -> Self {
        (codes.primary, codes.alternate)
    }
}

/// Cap both codes and drop an alternate that adds nothing.
pub fn finalize(primary: Output, alternate: Output, max_length: usize) -> Codes {
    let mut primary = primary.into_string();
    let mut alternate = alternate.into_string();
    primary.truncate(max_length);
    alternate.truncate(max_length);
    if alternate == primary {
        alternate.clear();
    }
    Codes { primary, alternate }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(s: &str) -> Output {
        let mut out = Output::with_cap(usize::MAX, s.len());
        out.push(s);
        out
    }

    #[test]
    fn identical_alternate_collapses() {
        let codes = finalize(output("SKL"), output("SKL"), 32);
        assert_eq!(codes.primary(), "SKL");
        assert_eq!(codes.alternate(), "");
        assert!(!codes.has_alternate());
    }

    #[test]
    fn truncation_happens_before_comparison() {
        let codes = finalize(output("ALRTN"), output("ALRTX"), 4);
        assert_eq!(Into::<(String, String)>::into(codes), ("ALRT".into(), String::new()));
    }

    #[test]
    fn display_joins_with_slash() {
        assert_eq!(Codes::new("SM0", "XMT").to_string(), "SM0/XMT");
        assert_eq!(Codes::new("SKL", "").to_string(), "SKL");
    }
}
