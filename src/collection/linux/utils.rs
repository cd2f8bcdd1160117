use std::{borrow::Cow, fs, os::unix::ffi::OsStrExt, path::Path};

use libc::PATH_MAX;

/// Reads a sysfs attribute, trimming the trailing newline. Returns [`None`] if the
/// attribute does not exist or can't be read.
#[inline]
pub(crate) fn read_attribute(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|value| value.trim_end().to_string())
}

/// A custom implementation to read a symlink while allowing for buffer reuse.
///
/// If successful, then a [`Cow`] will be returned referencing the contents of `buffer`.
pub(crate) fn read_link<'a>(path: &Path, buffer: &'a mut Vec<u8>) -> std::io::Result<Cow<'a, str>> {
    let c_path = std::ffi::CString::new(path.as_os_str().as_bytes())?;

    if buffer.len() < PATH_MAX as usize {
        buffer.resize(PATH_MAX as usize, 0);
    }

    // SAFETY: this is a libc API; we must check the length which we do below.
    let len = unsafe {
        libc::readlink(
            c_path.as_ptr(),
            buffer.as_mut_ptr() as *mut libc::c_char,
            buffer.len(),
        )
    };

    if len < 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(String::from_utf8_lossy(&buffer[..len as usize]))
}
