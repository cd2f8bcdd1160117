//! Host data collection.
//!
//! Each supported platform gets exactly one [`HostInfoProvider`]
//! implementation, re-exported as [`PlatformProvider`]. The choice is made at
//! compile time.

pub mod display;
pub mod error;
pub mod memory;

#[cfg(target_os = "linux")]
mod linux {
    pub mod utils;
}

use self::{
    display::{DisplayDescriptor, DisplaySettings},
    error::HostInfoResult,
    memory::MemorySnapshot,
};

/// The three host queries.
///
/// The memory queries are derived from [`HostInfoProvider::memory_snapshot`],
/// so an implementation only needs to supply one OS call for both.
pub trait HostInfoProvider {
    /// Returns the name of the primary graphics device.
    fn primary_display_name(&self) -> HostInfoResult<DisplayDescriptor>;

    /// Samples total and available physical memory in one call.
    fn memory_snapshot(&self) -> HostInfoResult<MemorySnapshot>;

    /// Returns the total physical memory, in bytes.
    fn total_physical_memory(&self) -> HostInfoResult<u64> {
        self.memory_snapshot().map(|snapshot| snapshot.total_bytes)
    }

    /// Returns the currently available physical memory, in bytes.
    fn available_physical_memory(&self) -> HostInfoResult<u64> {
        self.memory_snapshot().map(|snapshot| snapshot.available_bytes)
    }
}

impl<P: HostInfoProvider + ?Sized> HostInfoProvider for &P {
    fn primary_display_name(&self) -> HostInfoResult<DisplayDescriptor> {
        (**self).primary_display_name()
    }

    fn memory_snapshot(&self) -> HostInfoResult<MemorySnapshot> {
        (**self).memory_snapshot()
    }
}

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        /// The [`HostInfoProvider`] for Linux.
        #[derive(Debug, Clone, Default)]
        pub struct LinuxProvider {
            settings: DisplaySettings,
        }

        impl LinuxProvider {
            pub fn new(settings: DisplaySettings) -> Self {
                Self { settings }
            }
        }

        impl HostInfoProvider for LinuxProvider {
            fn primary_display_name(&self) -> HostInfoResult<DisplayDescriptor> {
                use self::display::{DisplayBackend, driver, lspci, sdl};

                log::debug!("querying display name with the {:?} backend", self.settings.backend);

                match self.settings.backend {
                    DisplayBackend::Lspci => {
                        lspci::query(&self.settings.lspci_command, self.settings.timeout)
                    }
                    DisplayBackend::Driver => driver::query(driver::DRM_CLASS_PATH),
                    DisplayBackend::Sdl => sdl::query(),
                }
            }

            fn memory_snapshot(&self) -> HostInfoResult<MemorySnapshot> {
                memory::linux::get_memory_snapshot()
            }
        }

        pub use self::LinuxProvider as PlatformProvider;
    } else if #[cfg(target_os = "windows")] {
        /// The [`HostInfoProvider`] for Windows.
        #[derive(Debug, Clone, Default)]
        pub struct WindowsProvider;

        impl WindowsProvider {
            /// Windows has a single display backend, so the settings are not used.
            pub fn new(_settings: DisplaySettings) -> Self {
                Self
            }
        }

        impl HostInfoProvider for WindowsProvider {
            fn primary_display_name(&self) -> HostInfoResult<DisplayDescriptor> {
                display::enumeration::find_primary_adapter(&mut display::windows::Win32Adapters)
            }

            fn memory_snapshot(&self) -> HostInfoResult<MemorySnapshot> {
                memory::windows::get_memory_snapshot()
            }
        }

        pub use self::WindowsProvider as PlatformProvider;
    } else {
        /// The [`HostInfoProvider`] for platforms without a native backend.
        /// Memory comes from sysinfo; the display name is unsupported.
        #[derive(Debug, Clone, Default)]
        pub struct FallbackProvider;

        impl FallbackProvider {
            pub fn new(_settings: DisplaySettings) -> Self {
                Self
            }
        }

        impl HostInfoProvider for FallbackProvider {
            fn primary_display_name(&self) -> HostInfoResult<DisplayDescriptor> {
                Err(error::HostInfoError::Unsupported)
            }

            fn memory_snapshot(&self) -> HostInfoResult<MemorySnapshot> {
                memory::sysinfo::get_memory_snapshot()
            }
        }

        pub use self::FallbackProvider as PlatformProvider;
    }
}
