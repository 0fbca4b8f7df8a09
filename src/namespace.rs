use std::fmt;
use std::str::FromStr;

/// One independent numeric-code space.
///
/// Variants are declared in report priority order, so `Ord` follows the
/// order in which hits are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    /// Win32 error codes and HRESULTs, resolved by the host.
    GeneralSystem,
    /// NTSTATUS values, resolved by the host's native system library.
    KernelSubsystem,
    /// Update agent result codes.
    UpdateSubsystem,
    /// Directory access protocol result codes.
    DirectoryProtocol,
    /// Stop codes (bug checks).
    KernelPanic,
}

impl Namespace {
    pub const ALL: [Namespace; 5] = [
        Namespace::GeneralSystem,
        Namespace::KernelSubsystem,
        Namespace::UpdateSubsystem,
        Namespace::DirectoryProtocol,
        Namespace::KernelPanic,
    ];

    /// Stable identifier used as the report label and in JSON output.
    pub fn key(self) -> &'static str {
        match self {
            Namespace::GeneralSystem => "general-system",
            Namespace::KernelSubsystem => "kernel-subsystem",
            Namespace::UpdateSubsystem => "update-subsystem",
            Namespace::DirectoryProtocol => "directory-protocol",
            Namespace::KernelPanic => "kernel-panic",
        }
    }

    /// The name people usually know the code family by.
    pub fn title(self) -> &'static str {
        match self {
            Namespace::GeneralSystem => "Win32/HRESULT",
            Namespace::KernelSubsystem => "NTSTATUS",
            Namespace::UpdateSubsystem => "Windows Update",
            Namespace::DirectoryProtocol => "LDAP",
            Namespace::KernelPanic => "StopCode/BugCheck",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown namespace '{name}' (expected one of: general-system, kernel-subsystem, update-subsystem, directory-protocol, kernel-panic)")]
pub struct UnknownNamespace {
    pub name: String,
}

impl FromStr for Namespace {
    type Err = UnknownNamespace;

    /// Accepts the stable key or the common short name (`wu`, `ldap`, `bugcheck`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let ns = match name.as_str() {
            "general-system" | "win32" | "hresult" => Namespace::GeneralSystem,
            "kernel-subsystem" | "ntstatus" => Namespace::KernelSubsystem,
            "update-subsystem" | "wu" | "windows-update" => Namespace::UpdateSubsystem,
            "directory-protocol" | "ldap" => Namespace::DirectoryProtocol,
            "kernel-panic" | "bugcheck" | "stopcode" => Namespace::KernelPanic,
            _ => return Err(UnknownNamespace { name: s.to_string() }),
        };
        Ok(ns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_priority_order() {
        let mut sorted = Namespace::ALL;
        sorted.sort();
        assert_eq!(sorted, Namespace::ALL);
        assert_eq!(Namespace::ALL[0], Namespace::GeneralSystem);
        assert_eq!(Namespace::ALL[4], Namespace::KernelPanic);
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for ns in Namespace::ALL {
            assert_eq!(ns.key().parse::<Namespace>(), Ok(ns));
        }
    }

    #[test]
    fn short_names_accepted() {
        assert_eq!("WU".parse::<Namespace>(), Ok(Namespace::UpdateSubsystem));
        assert_eq!("ldap".parse::<Namespace>(), Ok(Namespace::DirectoryProtocol));
        assert_eq!("bugcheck".parse::<Namespace>(), Ok(Namespace::KernelPanic));
        assert_eq!("ntstatus".parse::<Namespace>(), Ok(Namespace::KernelSubsystem));
    }

    #[test]
    fn unknown_name_rejected() {
        let err = "errno".parse::<Namespace>().unwrap_err();
        assert_eq!(err.name, "errno");
        assert!(err.to_string().contains("update-subsystem"));
    }
}
