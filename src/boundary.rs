//! The legacy foreign-function contract.
//!
//! Callers across the old boundary can't receive typed errors, so failures
//! collapse to `None` or `-1` here and nowhere else.

use crate::collection::{error::HostInfoResult, HostInfoProvider};

/// The value returned by the memory queries on failure.
pub const FAILURE_SENTINEL: i64 = -1;

/// Adapts a [`HostInfoProvider`] to the sentinel-based legacy interface.
#[derive(Debug, Clone, Default)]
pub struct LegacyBoundary<P> {
    provider: P,
}

impl<P: HostInfoProvider> LegacyBoundary<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the wrapped provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// `getGraphicsDevice`: the primary display name, or [`None`] on any error.
    pub fn get_graphics_device(&self) -> Option<String> {
        match self.provider.primary_display_name() {
            Ok(name) => Some(name.into_string()),
            Err(err) => {
                log::debug!("getGraphicsDevice failed: {err}");
                None
            }
        }
    }

    /// `getSystemAvailableRAM`: available memory in bytes, or [`FAILURE_SENTINEL`].
    pub fn get_system_available_ram(&self) -> i64 {
        to_sentinel("getSystemAvailableRAM", self.provider.available_physical_memory())
    }

    /// `getSystemTotalRAM`: total memory in bytes, or [`FAILURE_SENTINEL`].
    pub fn get_system_total_ram(&self) -> i64 {
        to_sentinel("getSystemTotalRAM", self.provider.total_physical_memory())
    }
}

fn to_sentinel(entry_point: &str, result: HostInfoResult<u64>) -> i64 {
    match result {
        Ok(bytes) => i64::try_from(bytes).unwrap_or(i64::MAX),
        Err(err) => {
            log::debug!("{entry_point} failed: {err}");
            FAILURE_SENTINEL
        }
    }
}
