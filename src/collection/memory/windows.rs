use std::mem::size_of;

use windows::Win32::System::SystemInformation::{GlobalMemoryStatusEx, MEMORYSTATUSEX};

use crate::collection::{
    error::{HostInfoError, HostInfoResult},
    memory::MemorySnapshot,
};

const MEMORY_STATUS_SIZE: u32 = size_of::<MEMORYSTATUSEX>() as _;

/// Returns total and available physical memory from one `GlobalMemoryStatusEx` call.
pub(crate) fn get_memory_snapshot() -> HostInfoResult<MemorySnapshot> {
    let mut status = MEMORYSTATUSEX {
        dwLength: MEMORY_STATUS_SIZE,
        ..Default::default()
    };

    // SAFETY: `status` is a valid MEMORYSTATUSEX with `dwLength` set, and we only
    // touch it if the call succeeds.
    unsafe { GlobalMemoryStatusEx(&mut status) }.map_err(|err| {
        HostInfoError::query(format!("GlobalMemoryStatusEx failed: {err:?}"))
    })?;

    Ok(MemorySnapshot {
        total_bytes: status.ullTotalPhys,
        available_bytes: status.ullAvailPhys,
    })
}
