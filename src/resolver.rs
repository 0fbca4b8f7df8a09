use crate::namespace::Namespace;
use crate::platform::{HostPlatform, PlatformResolver};
use crate::report::Report;
use crate::table;

/// Resolves a code against every namespace.
///
/// Holds no mutable state: the built-in tables are process-wide and
/// read-only, so one resolver can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Resolver<P = HostPlatform> {
    platform: P,
}

impl Resolver<HostPlatform> {
    /// A resolver backed by the current target's message facility.
    pub fn host() -> Self {
        Resolver::new(HostPlatform::default())
    }
}

impl<P: PlatformResolver> Resolver<P> {
    pub fn new(platform: P) -> Self {
        Resolver { platform }
    }

    /// Build the report for `code`. Hits appear in namespace priority order;
    /// a report with no hits is still a valid answer.
    pub fn resolve(&self, code: u32) -> Report {
        let mut report = Report::new(code);

        if let Some(text) = self.platform.resolve_general(code) {
            report.push(Namespace::GeneralSystem, text);
        }
        if let Some(text) = self.platform.resolve_kernel_subsystem(code) {
            report.push(Namespace::KernelSubsystem, text);
        }
        for table in table::builtin() {
            if let Some(entry) = table.entry(code) {
                report.push_entry(table.namespace(), entry);
            }
        }

        tracing::debug!(code = %report.numeric.hex, hits = report.hits.len(), "resolved code");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::NullPlatform;

    /// Answers every query in both host namespaces.
    struct Echo;

    impl PlatformResolver for Echo {
        fn resolve_general(&self, code: u32) -> Option<String> {
            Some(format!("general {code:#x}"))
        }
        fn resolve_kernel_subsystem(&self, code: u32) -> Option<String> {
            Some(format!("kernel {code:#x}"))
        }
    }

    #[test]
    fn update_code_resolves() {
        let r = Resolver::new(NullPlatform).resolve(0x0024_0005);
        let hit = r.hit(Namespace::UpdateSubsystem).expect("update hit");
        assert!(hit.text.contains("WU_S_REBOOT_REQUIRED"));
    }

    #[test]
    fn duplicate_directory_code_yields_one_hit() {
        let r = Resolver::new(NullPlatform).resolve(0x09);
        let ldap: Vec<_> = r.hits.iter().filter(|h| h.namespace == Namespace::DirectoryProtocol).collect();
        assert_eq!(ldap.len(), 1);
        assert_eq!(ldap[0].text, "LDAP_PARTIAL_RESULTS");
    }

    #[test]
    fn kernel_panic_code_resolves() {
        let r = Resolver::new(NullPlatform).resolve(0xDEAD_DEAD);
        assert_eq!(r.hit(Namespace::KernelPanic).map(|h| h.text.as_str()), Some("MANUALLY_INITIATED_CRASH1"));
    }

    #[test]
    fn zero_has_complete_numeric_block() {
        let r = Resolver::new(NullPlatform).resolve(0);
        assert_eq!(r.numeric.hex, "0x00000000");
        assert_eq!(r.numeric.signed, 0);
        assert!(r.hit(Namespace::KernelPanic).is_none());
        assert!(r.hit(Namespace::UpdateSubsystem).is_none());
        // 0 is LDAP_SUCCESS
        assert_eq!(r.hit(Namespace::DirectoryProtocol).map(|h| h.text.as_str()), Some("LDAP_SUCCESS"));
    }

    #[test]
    fn unknown_code_has_only_platform_hits() {
        let code = 0x1234_5678;
        assert!(Resolver::new(NullPlatform).resolve(code).is_unrecognised());
        let r = Resolver::new(Echo).resolve(code);
        let order: Vec<_> = r.namespaces().collect();
        assert_eq!(order, [Namespace::GeneralSystem, Namespace::KernelSubsystem]);
    }

    #[test]
    fn hits_follow_priority_order() {
        // 0x01 is present in the directory and kernel-panic tables
        let r = Resolver::new(Echo).resolve(0x01);
        let order: Vec<_> = r.namespaces().collect();
        assert_eq!(
            order,
            [Namespace::GeneralSystem, Namespace::KernelSubsystem, Namespace::DirectoryProtocol, Namespace::KernelPanic]
        );
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
    }

    #[test]
    fn resolve_is_idempotent() {
        let resolver = Resolver::new(Echo);
        for code in [0, 9, 0x0024_0005, 0xDEAD_DEAD, u32::MAX] {
            assert_eq!(resolver.resolve(code), resolver.resolve(code));
        }
    }

    #[test]
    fn extremes_never_fail() {
        let resolver = Resolver::new(NullPlatform);
        for code in [0, 1, i32::MAX as u32, 0x8000_0000, u32::MAX, (-5i32) as u32] {
            let r = resolver.resolve(code);
            assert_eq!(r.code, code);
            assert_eq!(r.numeric.signed, code as i32);
        }
    }

    #[test]
    fn shared_across_threads() {
        let resolver = Resolver::new(NullPlatform);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| resolver.resolve(0xDEAD_DEAD)))
                .collect();
            for h in handles {
                let r = h.join().unwrap();
                assert!(r.hit(Namespace::KernelPanic).is_some());
            }
        });
    }

    #[test]
    fn borrowed_platform_works() {
        let echo = Echo;
        let r = Resolver::new(&echo).resolve(2);
        assert_eq!(r.hit(Namespace::GeneralSystem).map(|h| h.text.as_str()), Some("general 0x2"));
    }
}
