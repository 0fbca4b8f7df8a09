//! Built-in code tables.
//!
//! Each table is built once from a literal list compiled into the binary and
//! is read-only afterwards. Construction goes through [`LazyLock`], so the
//! first lookup from any thread initialises it exactly once.

mod bugcheck;
mod ldap;
mod update;

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::namespace::Namespace;

/// A row of a code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub code: u32,
    pub name: &'static str,
    pub summary: Option<&'static str>, // one-line explanation, when the source provides one
}

impl CodeEntry {
    pub const fn named(code: u32, name: &'static str) -> Self {
        CodeEntry { code, name, summary: None }
    }

    pub const fn described(code: u32, name: &'static str, summary: &'static str) -> Self {
        CodeEntry { code, name, summary: Some(summary) }
    }

    /// Display text: the symbolic name, followed by the summary in
    /// parentheses on its own line.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CodeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.summary {
            Some(summary) => write!(f, "{}\n({})", self.name, summary),
            None => f.write_str(self.name),
        }
    }
}

/// Immutable exact-match dictionary backing one namespace.
#[derive(Debug)]
pub struct CodeTable {
    namespace: Namespace,
    entries: HashMap<u32, &'static CodeEntry>,
}

impl CodeTable {
    /// Build a table from `rows`. A key listed more than once keeps its last row.
    pub fn new(namespace: Namespace, rows: &'static [CodeEntry]) -> Self {
        let mut entries = HashMap::with_capacity(rows.len());
        for row in rows {
            entries.insert(row.code, row);
        }
        tracing::trace!(
            namespace = namespace.key(),
            rows = rows.len(),
            keys = entries.len(),
            "built code table"
        );
        CodeTable { namespace, entries }
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn entry(&self, code: u32) -> Option<&'static CodeEntry> {
        self.entries.get(&code).copied()
    }

    /// Look up the display text for `code`. `None` means "no match".
    pub fn lookup(&self, code: u32) -> Option<String> {
        self.entry(code).map(CodeEntry::text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in ascending code order.
    pub fn sorted(&self) -> Vec<&'static CodeEntry> {
        let mut rows: Vec<_> = self.entries.values().copied().collect();
        rows.sort_unstable_by_key(|e| e.code);
        rows
    }
}

static UPDATE: LazyLock<CodeTable> =
    LazyLock::new(|| CodeTable::new(Namespace::UpdateSubsystem, update::ENTRIES));
static LDAP: LazyLock<CodeTable> =
    LazyLock::new(|| CodeTable::new(Namespace::DirectoryProtocol, ldap::ENTRIES));
static BUGCHECK: LazyLock<CodeTable> =
    LazyLock::new(|| CodeTable::new(Namespace::KernelPanic, bugcheck::ENTRIES));

pub fn update() -> &'static CodeTable {
    &UPDATE
}

pub fn ldap() -> &'static CodeTable {
    &LDAP
}

pub fn bugcheck() -> &'static CodeTable {
    &BUGCHECK
}

/// Built-in tables in report priority order.
pub fn builtin() -> [&'static CodeTable; 3] {
    [update(), ldap(), bugcheck()]
}

/// The built-in table for `namespace`, or `None` for host-provided namespaces.
pub fn for_namespace(namespace: Namespace) -> Option<&'static CodeTable> {
    match namespace {
        Namespace::UpdateSubsystem => Some(update()),
        Namespace::DirectoryProtocol => Some(ldap()),
        Namespace::KernelPanic => Some(bugcheck()),
        Namespace::GeneralSystem | Namespace::KernelSubsystem => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal_rows() -> [(Namespace, &'static [CodeEntry]); 3] {
        [
            (Namespace::UpdateSubsystem, update::ENTRIES),
            (Namespace::DirectoryProtocol, ldap::ENTRIES),
            (Namespace::KernelPanic, bugcheck::ENTRIES),
        ]
    }

    #[test]
    fn lookup_update_code() {
        let text = update().lookup(0x0024_0005).expect("0x00240005 should be in the update table");
        assert!(text.starts_with("WU_S_REBOOT_REQUIRED\n("), "got: {text}");
        assert!(text.ends_with(')'));
    }

    #[test]
    fn lookup_bugcheck_code() {
        assert_eq!(bugcheck().lookup(0xDEAD_DEAD).as_deref(), Some("MANUALLY_INITIATED_CRASH1"));
        assert_eq!(bugcheck().lookup(0x0000_000A).as_deref(), Some("IRQL_NOT_LESS_OR_EQUAL"));
    }

    #[test]
    fn duplicate_key_keeps_last_row() {
        let rows: Vec<_> = ldap::ENTRIES.iter().filter(|e| e.code == 0x09).collect();
        assert_eq!(rows.len(), 2, "literal list should still carry both 0x09 rows");
        assert_eq!(ldap().lookup(0x09).as_deref(), Some("LDAP_PARTIAL_RESULTS"));
        assert_eq!(ldap().len(), ldap::ENTRIES.len() - 1);
    }

    #[test]
    fn every_literal_row_resolves_to_its_last_definition() {
        for (ns, rows) in literal_rows() {
            let table = for_namespace(ns).expect("built-in namespace");
            for row in rows {
                let last = rows.iter().rev().find(|r| r.code == row.code).unwrap();
                assert_eq!(table.entry(row.code), Some(last), "{ns} 0x{:08X}", row.code);
                assert_eq!(table.lookup(row.code), Some(last.text()));
            }
        }
    }

    #[test]
    fn absent_code_is_no_match() {
        assert!(update().lookup(0).is_none());
        assert!(bugcheck().lookup(0).is_none());
        assert!(ldap().lookup(0xFFFF_FFFF).is_none());
        assert!(bugcheck().entry(0x1234_5678).is_none());
    }

    #[test]
    fn table_sizes() {
        assert_eq!(update().len(), 474);
        assert_eq!(ldap().len(), 62);
        assert_eq!(bugcheck().len(), 377);
        assert!(builtin().iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn all_rows_have_content() {
        for (ns, rows) in literal_rows() {
            for row in rows {
                assert!(!row.name.is_empty(), "{ns} 0x{:08X} missing name", row.code);
                assert!(
                    row.name.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_'),
                    "{ns} 0x{:08X} has a malformed name: {}",
                    row.code,
                    row.name
                );
                if let Some(summary) = row.summary {
                    assert!(!summary.is_empty(), "{ns} 0x{:08X} has an empty summary", row.code);
                }
            }
        }
    }

    #[test]
    fn only_update_rows_carry_summaries() {
        assert!(update::ENTRIES.iter().all(|e| e.summary.is_some()));
        assert!(ldap::ENTRIES.iter().all(|e| e.summary.is_none()));
        assert!(bugcheck::ENTRIES.iter().all(|e| e.summary.is_none()));
    }

    #[test]
    fn sorted_is_ascending_and_complete() {
        let rows = bugcheck().sorted();
        assert_eq!(rows.len(), bugcheck().len());
        assert!(rows.windows(2).all(|w| w[0].code < w[1].code));
        assert_eq!(rows.first().map(|e| e.code), Some(0x01));
        assert_eq!(rows.last().map(|e| e.name), Some("MANUALLY_INITIATED_CRASH1"));
    }

    #[test]
    fn host_namespaces_have_no_table() {
        assert!(for_namespace(Namespace::GeneralSystem).is_none());
        assert!(for_namespace(Namespace::KernelSubsystem).is_none());
        for table in builtin() {
            assert_eq!(for_namespace(table.namespace()).map(|t| t.namespace()), Some(table.namespace()));
        }
    }

    #[test]
    fn entry_display_text() {
        let plain = CodeEntry::named(1, "A_NAME");
        assert_eq!(plain.text(), "A_NAME");
        let described = CodeEntry::described(2, "B_NAME", "does a thing");
        assert_eq!(described.text(), "B_NAME\n(does a thing)");
    }
}
