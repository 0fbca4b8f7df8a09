pub mod ansi;
pub mod json;

use std::fmt;

use crate::namespace::Namespace;
use crate::table::CodeEntry;

/// The three ways a code is commonly written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericForms {
    pub unsigned: u32,
    pub signed: i32,
    pub hex: String,
}

impl NumericForms {
    pub fn new(code: u32) -> Self {
        NumericForms {
            unsigned: code,
            signed: code as i32,
            hex: format!("0x{code:08X}"),
        }
    }
}

/// One namespace that recognised the code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub namespace: Namespace,
    pub text: String,
    pub entry: Option<&'static CodeEntry>, // set for built-in tables, `None` for host messages
}

/// Result of resolving one code across every namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub code: u32,
    pub numeric: NumericForms,
    pub hits: Vec<Hit>,
}

impl Report {
    pub fn new(code: u32) -> Self {
        Report { code, numeric: NumericForms::new(code), hits: Vec::new() }
    }

    /// Record a host-provided message.
    pub fn push(&mut self, namespace: Namespace, text: impl Into<String>) {
        self.push_hit(Hit { namespace, text: text.into(), entry: None });
    }

    /// Record a built-in table row.
    pub fn push_entry(&mut self, namespace: Namespace, entry: &'static CodeEntry) {
        self.push_hit(Hit { namespace, text: entry.text(), entry: Some(entry) });
    }

    fn push_hit(&mut self, hit: Hit) {
        debug_assert!(
            self.hits.last().is_none_or(|last| last.namespace < hit.namespace),
            "hits must be pushed once per namespace, in priority order"
        );
        self.hits.push(hit);
    }

    pub fn hit(&self, namespace: Namespace) -> Option<&Hit> {
        self.hits.iter().find(|h| h.namespace == namespace)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = Namespace> + '_ {
        self.hits.iter().map(|h| h.namespace)
    }

    pub fn is_unrecognised(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Plain text rendering, identical to [`ansi::AnsiRenderer`] without colour.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ansi::AnsiRenderer { use_color: false }.render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_forms_of_high_bit_code() {
        let n = NumericForms::new(3_221_225_786);
        assert_eq!(n.unsigned, 3_221_225_786);
        assert_eq!(n.signed, -1_073_741_510);
        assert_eq!(n.hex, "0xC000013A");

        let n = NumericForms::new(0xC000_0056);
        assert_eq!(n.unsigned, 3_221_225_558);
        assert_eq!(n.signed, -1_073_741_738);
    }

    #[test]
    fn numeric_forms_of_extremes() {
        let zero = NumericForms::new(0);
        assert_eq!((zero.unsigned, zero.signed, zero.hex.as_str()), (0, 0, "0x00000000"));
        let max = NumericForms::new(u32::MAX);
        assert_eq!((max.unsigned, max.signed, max.hex.as_str()), (4_294_967_295, -1, "0xFFFFFFFF"));
        let min = NumericForms::new(0x8000_0000);
        assert_eq!(min.signed, i32::MIN);
    }

    #[test]
    fn new_report_has_no_hits() {
        let r = Report::new(42);
        assert!(r.is_unrecognised());
        assert_eq!(r.numeric, NumericForms::new(42));
        assert!(r.hit(Namespace::KernelPanic).is_none());
    }

    #[test]
    fn push_keeps_order_and_entry() {
        static ROW: CodeEntry = CodeEntry::named(0x0A, "IRQL_NOT_LESS_OR_EQUAL");
        let mut r = Report::new(0x0A);
        r.push(Namespace::GeneralSystem, "The environment is incorrect.");
        r.push_entry(Namespace::KernelPanic, &ROW);
        let order: Vec<_> = r.namespaces().collect();
        assert_eq!(order, [Namespace::GeneralSystem, Namespace::KernelPanic]);
        let hit = r.hit(Namespace::KernelPanic).unwrap();
        assert_eq!(hit.text, "IRQL_NOT_LESS_OR_EQUAL");
        assert_eq!(hit.entry, Some(&ROW));
        assert!(r.hit(Namespace::GeneralSystem).unwrap().entry.is_none());
    }

    #[test]
    fn display_matches_plain_renderer() {
        let mut r = Report::new(9);
        r.push(Namespace::DirectoryProtocol, "LDAP_PARTIAL_RESULTS");
        let plain = ansi::AnsiRenderer { use_color: false }.render(&r);
        assert_eq!(r.to_string(), plain);
    }
}
