//! A library for querying the primary graphics device and the physical memory
//! of the host system.
//!
//! Every query goes through a [`HostInfoProvider`]. The provider for the
//! current platform is [`PlatformProvider`], picked at compile time:
//!
//! - Linux: the graphics device comes from either the PCI device listing or
//!   the DRM video driver; memory comes from `sysinfo(2)`.
//! - Windows: `EnumDisplayDevicesW` and `GlobalMemoryStatusEx`.
//! - Anything else: memory through the sysinfo crate; the graphics device is
//!   unsupported.
//!
//! Callers that need the legacy `-1`/`null` conventions should wrap a
//! provider in a [`LegacyBoundary`].
//!
//! ```no_run
//! use hostinfo::{HostInfoProvider, PlatformProvider, collection::display::DisplaySettings};
//!
//! let provider = PlatformProvider::new(DisplaySettings::default());
//! let total = provider.total_physical_memory()?;
//! let available = provider.available_physical_memory()?;
//! println!("{available} of {total} bytes available");
//! # Ok::<(), hostinfo::collection::error::HostInfoError>(())
//! ```

pub mod boundary;
pub mod collection;
pub mod options;
pub mod report;

pub mod utils {
    pub mod data_prefixes;
    pub mod logging;
}

pub use boundary::LegacyBoundary;
pub use collection::{HostInfoProvider, PlatformProvider};
