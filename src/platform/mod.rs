//! Host-native message lookup.
//!
//! Two namespaces (Win32/HRESULT and NTSTATUS) are not carried as tables:
//! their text comes from the operating system's own message facility. On
//! targets without one, [`HostPlatform`] is [`NullPlatform`] and both
//! namespaces simply never match.

/// Resolves codes through the host's message facilities.
///
/// Both operations answer `None` for "no match", including when the host
/// facility itself is unavailable. They never fail.
pub trait PlatformResolver {
    /// System-wide message table (Win32 error codes and HRESULTs).
    fn resolve_general(&self, code: u32) -> Option<String>;

    /// Kernel-subsystem message table (NTSTATUS values).
    fn resolve_kernel_subsystem(&self, code: u32) -> Option<String>;
}

impl<T: PlatformResolver + ?Sized> PlatformResolver for &T {
    fn resolve_general(&self, code: u32) -> Option<String> {
        (**self).resolve_general(code)
    }

    fn resolve_kernel_subsystem(&self, code: u32) -> Option<String> {
        (**self).resolve_kernel_subsystem(code)
    }
}

/// A resolver for hosts without a message facility.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPlatform;

impl PlatformResolver for NullPlatform {
    fn resolve_general(&self, _code: u32) -> Option<String> {
        None
    }

    fn resolve_kernel_subsystem(&self, _code: u32) -> Option<String> {
        None
    }
}

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        mod win32;
        pub use win32::WindowsPlatform;
        pub type HostPlatform = WindowsPlatform;
    } else {
        pub type HostPlatform = NullPlatform;
    }
}

/// Strip the line terminators host messages end with. Empty text is no match.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn clean_message(raw: &str) -> Option<String> {
    let text = raw.trim_end_matches(['\r', '\n']);
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_platform_never_matches() {
        let p = NullPlatform;
        for code in [0, 5, 0x8007_0005, 0xC000_0005, u32::MAX] {
            assert!(p.resolve_general(code).is_none());
            assert!(p.resolve_kernel_subsystem(code).is_none());
        }
    }

    #[test]
    fn clean_message_trims_trailing_newlines() {
        assert_eq!(clean_message("Access is denied.\r\n").as_deref(), Some("Access is denied."));
        assert_eq!(clean_message("two\nlines\n\n").as_deref(), Some("two\nlines"));
        assert_eq!(clean_message("no newline").as_deref(), Some("no newline"));
    }

    #[test]
    fn clean_message_empty_is_no_match() {
        assert!(clean_message("").is_none());
        assert!(clean_message("\r\n").is_none());
        assert!(clean_message("  \r\n").is_none());
    }

    #[test]
    fn references_delegate() {
        struct Fixed;
        impl PlatformResolver for Fixed {
            fn resolve_general(&self, code: u32) -> Option<String> {
                (code == 5).then(|| "Access is denied.".to_string())
            }
            fn resolve_kernel_subsystem(&self, _code: u32) -> Option<String> {
                None
            }
        }
        let p = &Fixed;
        assert_eq!(p.resolve_general(5).as_deref(), Some("Access is denied."));
        assert!(p.resolve_general(6).is_none());
    }
}
