//! Translate numeric error codes into their symbolic names and messages.
//!
//! A code is looked up in five independent namespaces and every match is
//! collected into a [`Report`]:
//!
//! | namespace            | source                                   |
//! |----------------------|------------------------------------------|
//! | `general-system`     | host message facility (Win32/HRESULT)    |
//! | `kernel-subsystem`   | host message facility (NTSTATUS)         |
//! | `update-subsystem`   | built-in table (update agent codes)      |
//! | `directory-protocol` | built-in table (LDAP result codes)       |
//! | `kernel-panic`       | built-in table (stop codes / bug checks) |
//!
//! The two host namespaces only resolve on Windows; elsewhere they never match.
//!
//! ```
//! use errcode::{Namespace, Resolver, platform::NullPlatform};
//!
//! let report = Resolver::new(NullPlatform).resolve(0xDEAD_DEAD);
//! assert_eq!(report.numeric.signed, -559_030_611);
//! assert_eq!(
//!     report.hit(Namespace::KernelPanic).map(|h| h.text.as_str()),
//!     Some("MANUALLY_INITIATED_CRASH1"),
//! );
//! ```

pub mod input;
pub mod namespace;
pub mod platform;
pub mod report;
pub mod resolver;
pub mod settings;
pub mod table;

pub use namespace::Namespace;
pub use report::{Hit, NumericForms, Report};
pub use resolver::Resolver;
pub use table::{CodeEntry, CodeTable};

/// Resolve `code` with the current host's message facility.
pub fn resolve(code: u32) -> Report {
    Resolver::host().resolve(code)
}
