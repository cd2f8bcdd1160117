//! Collecting memory data with `sysinfo(2)`.

use std::{io, mem::MaybeUninit};

use crate::collection::{
    error::{HostInfoError, HostInfoResult},
    memory::MemorySnapshot,
};

/// Returns total and free RAM from one `sysinfo` call.
#[allow(clippy::unnecessary_cast)]
pub(crate) fn get_memory_snapshot() -> HostInfoResult<MemorySnapshot> {
    let mut info = MaybeUninit::<libc::sysinfo>::zeroed();

    // SAFETY: `info` is a valid, zeroed sysinfo struct; we only read it if the call succeeds.
    let ret = unsafe { libc::sysinfo(info.as_mut_ptr()) };
    if ret != 0 {
        return Err(HostInfoError::query(format!(
            "sysinfo failed: {}",
            io::Error::last_os_error()
        )));
    }

    // SAFETY: The call succeeded, so the kernel filled in the struct.
    let info = unsafe { info.assume_init() };

    Ok(scale(
        info.totalram as u64,
        info.freeram as u64,
        info.mem_unit as u64,
    ))
}

/// `sysinfo` reports memory in multiples of `mem_unit` bytes.
#[inline]
fn scale(total: u64, free: u64, mem_unit: u64) -> MemorySnapshot {
    let mem_unit = mem_unit.max(1);

    MemorySnapshot {
        total_bytes: total.saturating_mul(mem_unit),
        available_bytes: free.saturating_mul(mem_unit),
    }
}
