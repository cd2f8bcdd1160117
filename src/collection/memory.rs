//! Physical memory data collection.

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        pub(crate) mod linux;
    } else if #[cfg(target_os = "windows")] {
        pub(crate) mod windows;
    } else {
        pub(crate) mod sysinfo;
    }
}

/// Total and available physical memory, sampled by a single OS call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySnapshot {
    pub total_bytes: u64,
    pub available_bytes: u64,
}
