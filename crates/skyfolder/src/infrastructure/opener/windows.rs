//! Windows folder opener using the Win32 shell.
//!
//! `ShellExecuteW` with the `open` verb on a directory shows it in Explorer,
//! the same thing double-clicking it does.

use std::os::windows::ffi::OsStrExt;
use std::path::Path;

use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Shell::ShellExecuteW;
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

use crate::application::open_folders::{FolderOpener, LaunchError};

/// Return values at or below this are error codes.
const SHELL_EXECUTE_MAX_ERROR: isize = 32;

/// Opens folders in Explorer through `ShellExecuteW`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellOpener;

impl FolderOpener for ShellOpener {
    fn reveal(&self, path: &Path) -> Result<(), LaunchError> {
        let wide: Vec<u16> = path
            .as_os_str()
            .encode_wide()
            .chain(std::iter::once(0))
            .collect();

        // SAFETY: `wide` is NUL-terminated and outlives the call; the verb is a
        // static wide string and the remaining pointers are null.
        let instance = unsafe {
            ShellExecuteW(
                HWND(std::ptr::null_mut()),
                w!("open"),
                PCWSTR(wide.as_ptr()),
                PCWSTR::null(),
                PCWSTR::null(),
                SW_SHOWNORMAL,
            )
        };

        let code = instance.0 as isize;
        if code <= SHELL_EXECUTE_MAX_ERROR {
            return Err(LaunchError::Shell { code });
        }
        Ok(())
    }
}
