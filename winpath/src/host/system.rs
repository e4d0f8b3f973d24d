//! Host backed by the Windows API.

#![allow(unsafe_code)]

use std::io;
use std::os::windows::ffi::OsStrExt;

use windows::core::PCWSTR;
use windows::Win32::Storage::FileSystem::GetShortPathNameW;

use crate::host::PathHost;
use crate::path::classify::add_long_path_prefix_if_needed;

/// Host that queries the running Windows process and filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl PathHost for SystemHost {
    fn current_dir(&self) -> io::Result<Vec<u16>> {
        let cwd: Vec<u16> = std::env::current_dir()?
            .as_os_str()
            .encode_wide()
            .collect();
        Ok(add_long_path_prefix_if_needed(&cwd))
    }

    fn short_path_name(&self, path: &[u16]) -> io::Result<Option<Vec<u16>>> {
        let mut long = path.to_vec();
        long.push(0);

        let mut buffer = vec![0u16; path.len() + 1];
        loop {
            // SAFETY: `long` is NUL-terminated and outlives the call, and the
            // API writes at most `buffer.len()` units into `buffer`.
            let written =
                unsafe { GetShortPathNameW(PCWSTR(long.as_ptr()), Some(&mut buffer)) } as usize;
            if written == 0 {
                let err = io::Error::last_os_error();
                return if err.kind() == io::ErrorKind::NotFound {
                    Ok(None)
                } else {
                    Err(err)
                };
            }
            if written < buffer.len() {
                buffer.truncate(written);
                return Ok(Some(buffer));
            }
            // Buffer too small: `written` is the required size including the
            // terminator. The path may have changed between calls, so loop.
            buffer.resize(written, 0);
        }
    }
}
