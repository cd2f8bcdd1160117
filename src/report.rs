//! The host report printed by the `hostinfo` binary.

use std::fmt;

use serde::Serialize;

use crate::{
    boundary::LegacyBoundary,
    collection::{error::HostInfoResult, HostInfoProvider},
    utils::data_prefixes::binary_byte_string,
};

const HEADER: &str = "Local System Information:";

/// Values that don't come from a [`HostInfoProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemDetails {
    pub os: String,
    pub arch: String,
    pub cpus: Option<usize>,
}

impl SystemDetails {
    pub fn current() -> Self {
        Self {
            os: sysinfo::System::long_os_version()
                .unwrap_or_else(|| std::env::consts::OS.to_string()),
            arch: std::env::consts::ARCH.to_string(),
            cpus: std::thread::available_parallelism()
                .ok()
                .map(|cpus| cpus.get()),
        }
    }
}

/// A report using the typed queries. Failed queries are [`None`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostReport {
    #[serde(flatten)]
    pub details: SystemDetails,
    pub graphics_device: Option<String>,
    pub total_ram: Option<u64>,
    pub available_ram: Option<u64>,
}

impl HostReport {
    pub fn collect<P: HostInfoProvider>(details: SystemDetails, provider: &P) -> Self {
        Self {
            details,
            graphics_device: log_failure(
                "graphics device",
                provider.primary_display_name().map(|name| name.into_string()),
            ),
            total_ram: log_failure("total RAM", provider.total_physical_memory()),
            available_ram: log_failure("available RAM", provider.available_physical_memory()),
        }
    }
}

impl fmt::Display for HostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_details(f, &self.details)?;
        writeln!(
            f,
            "Graphics Device = {}",
            self.graphics_device.as_deref().unwrap_or("unknown")
        )?;
        write_ram(f, "Total RAM", self.total_ram)?;
        write_ram(f, "Available RAM", self.available_ram)
    }
}

/// A report going through the [`LegacyBoundary`], so failures show up as
/// `-1` and `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyHostReport {
    #[serde(flatten)]
    pub details: SystemDetails,
    pub graphics_device: Option<String>,
    pub total_ram: i64,
    pub available_ram: i64,
}

impl LegacyHostReport {
    pub fn collect<P: HostInfoProvider>(details: SystemDetails, boundary: &LegacyBoundary<P>) -> Self {
        Self {
            details,
            graphics_device: boundary.get_graphics_device(),
            total_ram: boundary.get_system_total_ram(),
            available_ram: boundary.get_system_available_ram(),
        }
    }
}

impl fmt::Display for LegacyHostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_details(f, &self.details)?;
        writeln!(
            f,
            "Graphics Device = {}",
            self.graphics_device.as_deref().unwrap_or("null")
        )?;
        writeln!(f, "Total RAM = {} bytes", self.total_ram)?;
        writeln!(f, "Available RAM = {} bytes", self.available_ram)
    }
}

fn write_details(f: &mut fmt::Formatter<'_>, details: &SystemDetails) -> fmt::Result {
    writeln!(f, "{HEADER}")?;
    writeln!(f, "OS = {}", details.os)?;
    writeln!(f, "Arch = {}", details.arch)?;
    match details.cpus {
        Some(cpus) => writeln!(f, "CPUs = {cpus}"),
        None => writeln!(f, "CPUs = unknown"),
    }
}

fn write_ram(f: &mut fmt::Formatter<'_>, label: &str, bytes: Option<u64>) -> fmt::Result {
    match bytes {
        Some(bytes) => writeln!(f, "{label} = {bytes} bytes ({})", binary_byte_string(bytes)),
        None => writeln!(f, "{label} = unknown"),
    }
}

fn log_failure<T>(what: &str, result: HostInfoResult<T>) -> Option<T> {
    result
        .map_err(|err| log::warn!("could not get the {what}: {err}"))
        .ok()
}
