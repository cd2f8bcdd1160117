//! Finding the active video driver through the kernel's DRM subsystem.

use std::{
    fs,
    path::{Path, PathBuf},
};

use super::DisplayDescriptor;
use crate::collection::{
    error::{HostInfoError, HostInfoResult},
    linux::utils::{read_attribute, read_link},
};

/// Where the kernel exposes DRM devices.
pub const DRM_CLASS_PATH: &str = "/sys/class/drm";

/// Returns the name of the driver bound to the primary DRM card under `drm_root`.
///
/// The primary card is the one whose PCI device is flagged `boot_vga`. If no
/// card is flagged, the lowest-numbered card with a bound driver is used.
pub fn query<P: AsRef<Path>>(drm_root: P) -> HostInfoResult<DisplayDescriptor> {
    let drm_root = drm_root.as_ref();
    let entries = fs::read_dir(drm_root).map_err(|err| {
        HostInfoError::init(format!("could not open '{}': {err}", drm_root.display()))
    })?;

    let mut cards: Vec<(u32, PathBuf)> = entries
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let index = card_index(&entry.file_name().to_string_lossy())?;

            Some((index, entry.path()))
        })
        .collect();
    cards.sort_unstable_by_key(|(index, _)| *index);

    let mut buffer = Vec::new();
    let mut fallback = None;

    for (_, card) in cards {
        let device = card.join("device");
        let Some(driver) = driver_name(&device, &mut buffer) else {
            continue;
        };

        if is_boot_vga(&device) {
            log::debug!("using boot VGA card at {}", card.display());
            fallback = Some(driver);
            break;
        }

        fallback.get_or_insert(driver);
    }

    fallback
        .as_deref()
        .and_then(DisplayDescriptor::new)
        .ok_or_else(|| HostInfoError::init("no DRM card has a bound video driver"))
}

/// Parses `cardN` entries. Connectors like `card0-HDMI-A-1` are skipped.
fn card_index(name: &str) -> Option<u32> {
    let index = name.strip_prefix("card")?;

    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    index.parse().ok()
}

fn driver_name(device: &Path, buffer: &mut Vec<u8>) -> Option<String> {
    let target = read_link(&device.join("driver"), buffer).ok()?;

    Path::new(target.as_ref())
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

#[inline]
fn is_boot_vga(device: &Path) -> bool {
    read_attribute(&device.join("boot_vga")).is_some_and(|value| value == "1")
}
