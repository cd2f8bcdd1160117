//! Finding the active video backend (e.g. `x11` or `wayland`) through SDL.
//!
//! Only available with the `sdl` feature, since it links against the system's
//! SDL2 library.

use super::DisplayDescriptor;
use crate::collection::error::{HostInfoError, HostInfoResult};

/// Initializes SDL's video subsystem and returns the name of the driver it
/// picked.
#[cfg(feature = "sdl")]
pub fn query() -> HostInfoResult<DisplayDescriptor> {
    let context = sdl2::init()
        .map_err(|err| HostInfoError::init(format!("could not initialize SDL: {err}")))?;
    let video = context.video().map_err(|err| {
        HostInfoError::init(format!("could not initialize the SDL video subsystem: {err}"))
    })?;

    let driver = video.current_video_driver();
    log::debug!("SDL picked the '{driver}' video driver");

    descriptor(driver)
}

#[cfg(not(feature = "sdl"))]
pub fn query() -> HostInfoResult<DisplayDescriptor> {
    Err(HostInfoError::init(
        "hostinfo was built without the 'sdl' feature",
    ))
}

#[cfg_attr(not(feature = "sdl"), allow(dead_code))]
fn descriptor(driver: &str) -> HostInfoResult<DisplayDescriptor> {
    DisplayDescriptor::new(driver)
        .ok_or_else(|| HostInfoError::init("SDL reported an empty video driver name"))
}
