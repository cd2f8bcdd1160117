//! Display adapter enumeration through `EnumDisplayDevicesW`.

use std::mem::size_of;

use windows::{
    core::PCWSTR,
    Win32::Graphics::Gdi::{
        EnumDisplayDevicesW, DISPLAY_DEVICEW, DISPLAY_DEVICE_ATTACHED_TO_DESKTOP,
        DISPLAY_DEVICE_PRIMARY_DEVICE,
    },
};

use super::enumeration::{AdapterEnumerator, DisplayAdapter};

const DISPLAY_DEVICE_SIZE: u32 = size_of::<DISPLAY_DEVICEW>() as _;

/// Enumerates the display adapters known to the desktop window manager.
#[derive(Debug, Default)]
pub struct Win32Adapters;

impl AdapterEnumerator for Win32Adapters {
    fn adapter(&mut self, index: u32) -> Option<DisplayAdapter> {
        let mut device = DISPLAY_DEVICEW {
            cb: DISPLAY_DEVICE_SIZE,
            ..Default::default()
        };

        // SAFETY: `device` is a valid, correctly sized DISPLAY_DEVICEW, and we only
        // read it if the call reports success. A null device name enumerates adapters.
        let found = unsafe { EnumDisplayDevicesW(PCWSTR::null(), index, &mut device, 0) };
        if !found.as_bool() {
            return None;
        }

        let flags = device.StateFlags.0;

        Some(DisplayAdapter {
            description: from_wide(&device.DeviceString),
            attached_to_desktop: flags & DISPLAY_DEVICE_ATTACHED_TO_DESKTOP.0 != 0,
            primary: flags & DISPLAY_DEVICE_PRIMARY_DEVICE.0 != 0,
        })
    }
}

/// Converts a fixed-size, nul-terminated UTF-16 buffer.
fn from_wide(buffer: &[u16]) -> String {
    let len = buffer
        .iter()
        .position(|&c| c == 0)
        .unwrap_or(buffer.len());

    String::from_utf16_lossy(&buffer[..len])
}
