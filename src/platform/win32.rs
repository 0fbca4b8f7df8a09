use std::ffi::c_void;
use std::ptr;

use windows_sys::Win32::Foundation::LocalFree;
use windows_sys::Win32::System::Diagnostics::Debug::{
    FORMAT_MESSAGE_ALLOCATE_BUFFER, FORMAT_MESSAGE_FROM_HMODULE, FORMAT_MESSAGE_FROM_SYSTEM,
    FORMAT_MESSAGE_IGNORE_INSERTS, FORMAT_MESSAGE_OPTIONS, FormatMessageW,
};
use windows_sys::Win32::System::LibraryLoader::GetModuleHandleW;

use super::{PlatformResolver, clean_message};

/// `MAKELANGID(LANG_NEUTRAL, SUBLANG_DEFAULT)`
const LANG_NEUTRAL_DEFAULT: u32 = 0x0400;

/// Native system library carrying the NTSTATUS message table.
const NTDLL: &str = "ntdll.dll";

/// Resolves codes with `FormatMessageW`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsPlatform;

impl WindowsPlatform {
    fn format(flags: FORMAT_MESSAGE_OPTIONS, source: *const c_void, code: u32) -> Option<String> {
        let mut buffer: *mut u16 = ptr::null_mut();
        // SAFETY: with FORMAT_MESSAGE_ALLOCATE_BUFFER, lpBuffer is read as a
        // pointer to a PWSTR that receives a LocalAlloc'd buffer of `len` chars.
        let len = unsafe {
            FormatMessageW(
                flags | FORMAT_MESSAGE_ALLOCATE_BUFFER | FORMAT_MESSAGE_IGNORE_INSERTS,
                source,
                code,
                LANG_NEUTRAL_DEFAULT,
                (&mut buffer as *mut *mut u16).cast(),
                0,
                ptr::null(),
            )
        };
        if len == 0 || buffer.is_null() {
            return None;
        }
        // SAFETY: FormatMessageW wrote `len` UTF-16 units to `buffer`.
        let text = String::from_utf16_lossy(unsafe { std::slice::from_raw_parts(buffer, len as usize) });
        // SAFETY: the buffer was allocated by FormatMessageW with LocalAlloc.
        unsafe {
            LocalFree(buffer.cast());
        }
        clean_message(&text)
    }
}

impl PlatformResolver for WindowsPlatform {
    fn resolve_general(&self, code: u32) -> Option<String> {
        Self::format(FORMAT_MESSAGE_FROM_SYSTEM, ptr::null(), code)
    }

    fn resolve_kernel_subsystem(&self, code: u32) -> Option<String> {
        let name: Vec<u16> = NTDLL.encode_utf16().chain(std::iter::once(0)).collect();
        // SAFETY: `name` is a NUL-terminated UTF-16 string that outlives the call.
        let module = unsafe { GetModuleHandleW(name.as_ptr()) };
        if module.is_null() {
            tracing::debug!(module = NTDLL, "message module not loaded");
            return None;
        }
        Self::format(FORMAT_MESSAGE_FROM_HMODULE, module.cast_const(), code)
    }
}
