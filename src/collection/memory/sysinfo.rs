//! Collecting memory data using sysinfo, for platforms without a native backend.

use std::num::NonZeroU64;

use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use crate::collection::{
    error::{HostInfoError, HostInfoResult},
    memory::MemorySnapshot,
};

/// Returns total and available RAM.
pub(crate) fn get_memory_snapshot() -> HostInfoResult<MemorySnapshot> {
    let sys = System::new_with_specifics(
        RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram()),
    );

    let Some(total) = NonZeroU64::new(sys.total_memory()) else {
        return Err(HostInfoError::query("sysinfo reported no physical memory"));
    };

    Ok(MemorySnapshot {
        total_bytes: total.get(),
        available_bytes: sys.available_memory(),
    })
}
