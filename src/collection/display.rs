//! Primary display device discovery.

pub mod enumeration;
pub mod lspci;

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        pub mod driver;
        pub mod sdl;
    } else if #[cfg(target_os = "windows")] {
        pub mod windows;
    }
}

use std::{fmt, str::FromStr, time::Duration};

use serde::Deserialize;

/// The maximum number of characters kept from a device name.
pub const MAX_DISPLAY_NAME_LEN: usize = 128;

/// The default timeout for the PCI listing subprocess.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(2);

/// The default program used to list PCI devices.
pub const DEFAULT_LSPCI_COMMAND: &str = "lspci";

/// The name of the primary display adapter or its driver.
///
/// Always non-empty and at most [`MAX_DISPLAY_NAME_LEN`] characters long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDescriptor(String);

impl DisplayDescriptor {
    /// Creates a new [`DisplayDescriptor`], truncating `name` to
    /// [`MAX_DISPLAY_NAME_LEN`] characters. Returns [`None`] if `name` is empty.
    pub fn new(name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }

        let name = match name.char_indices().nth(MAX_DISPLAY_NAME_LEN) {
            Some((end, _)) => &name[..end],
            None => name,
        };

        Some(Self(name.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DisplayDescriptor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Which backend is used to find the display name on Linux.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayBackend {
    /// Parse the VGA entry from the PCI device listing.
    #[default]
    Lspci,
    /// Read the driver bound to the primary DRM card.
    Driver,
    /// Ask SDL which video driver it uses. Needs the `sdl` feature.
    Sdl,
}

impl FromStr for DisplayBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lspci" => Ok(DisplayBackend::Lspci),
            "driver" => Ok(DisplayBackend::Driver),
            "sdl" => Ok(DisplayBackend::Sdl),
            _ => Err(format!("'{s}' is not a valid display backend")),
        }
    }
}

/// Settings for the display name query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    pub backend: DisplayBackend,
    pub timeout: Duration,
    pub lspci_command: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            backend: DisplayBackend::default(),
            timeout: DEFAULT_QUERY_TIMEOUT,
            lspci_command: DEFAULT_LSPCI_COMMAND.to_string(),
        }
    }
}
