//! Finding the display device name from a PCI device listing (`lspci`).
//!
//! Running the command and parsing its output are kept apart, so
//! [`parse_device_listing`] can be tested against captured text.

use std::{
    io::Read,
    process::{Child, Command, ExitStatus, Stdio},
    sync::mpsc::{self, RecvTimeoutError},
    thread,
    time::{Duration, Instant},
};

use super::DisplayDescriptor;
use crate::collection::error::{HostInfoError, HostInfoResult};

/// Marks the line describing the VGA-compatible controller.
const VGA_MARKER: &str = "VGA";

/// Separates the device class from the device description.
const DESCRIPTION_SEPARATOR: &str = ": ";

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs `command` and returns the description of the first VGA device it lists.
///
/// `command` is split on whitespace into a program and its arguments. No shell
/// is involved. The child is killed if it is still running after `timeout`, and
/// its output must be fully read by then too.
pub fn query(command: &str, timeout: Duration) -> HostInfoResult<DisplayDescriptor> {
    let output = run_with_timeout(command, timeout)?;
    parse_device_listing(&output)
}

/// Extracts the device description from a PCI listing.
///
/// The first line containing `VGA` is used. The description is everything after
/// the first `": "` following the marker, minus the trailing newline. A line such
/// as
///
/// ```text
/// 00:02.0 VGA compatible controller: Intel Corporation UHD Graphics 620 (rev 07)
/// ```
///
/// yields `Intel Corporation UHD Graphics 620 (rev 07)`. Descriptions longer than
/// [`MAX_DISPLAY_NAME_LEN`](super::MAX_DISPLAY_NAME_LEN) characters are
/// truncated.
pub fn parse_device_listing(output: &str) -> HostInfoResult<DisplayDescriptor> {
    let Some((line, marker)) = output
        .split_inclusive('\n')
        .find_map(|line| line.find(VGA_MARKER).map(|pos| (line, pos)))
    else {
        return Err(HostInfoError::not_found("no VGA device in the PCI listing"));
    };

    let after_marker = &line[marker + VGA_MARKER.len()..];
    let Some(separator) = after_marker.find(DESCRIPTION_SEPARATOR) else {
        return Err(HostInfoError::not_found(
            "the VGA entry has no device description",
        ));
    };

    let description = &after_marker[separator + DESCRIPTION_SEPARATOR.len()..];
    let description = description.strip_suffix('\n').unwrap_or(description);
    let description = description.strip_suffix('\r').unwrap_or(description);

    DisplayDescriptor::new(description)
        .ok_or_else(|| HostInfoError::not_found("the VGA device description is empty"))
}

fn run_with_timeout(command: &str, timeout: Duration) -> HostInfoResult<String> {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(HostInfoError::exec("no PCI listing command was given"));
    };

    // A timeout too large to represent as an instant means there is no deadline.
    let deadline = Instant::now().checked_add(timeout);

    let mut child = Command::new(program)
        .args(parts)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| HostInfoError::exec(format!("could not start '{program}': {err}")))?;

    let Some(mut stdout) = child.stdout.take() else {
        return Err(HostInfoError::exec("the child's stdout was not captured"));
    };

    // Read on another thread so a chatty child can't fill the pipe and stall. The
    // reader may outlive this call if something else keeps the pipe open.
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let mut buffer = Vec::new();
        let _ = sender.send(stdout.read_to_end(&mut buffer).map(|_| buffer));
    });

    let status = wait_with_deadline(&mut child, program, timeout, deadline)?;

    let received = match deadline {
        Some(deadline) => receiver
            .recv_timeout(deadline.saturating_duration_since(Instant::now()))
            .map_err(|err| match err {
                RecvTimeoutError::Timeout => timed_out(program, timeout),
                RecvTimeoutError::Disconnected => reader_died(program),
            }),
        None => receiver.recv().map_err(|_| reader_died(program)),
    }?;

    let buffer = received.map_err(|err| {
        HostInfoError::exec(format!("could not read the output of '{program}': {err}"))
    })?;

    if !status.success() {
        return Err(HostInfoError::exec(format!("'{program}' exited with {status}")));
    }

    if buffer.is_empty() {
        return Err(HostInfoError::exec(format!("'{program}' produced no output")));
    }

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Waits for `child` to exit, killing and reaping it once `deadline` passes.
fn wait_with_deadline(
    child: &mut Child, program: &str, timeout: Duration, deadline: Option<Instant>,
) -> HostInfoResult<ExitStatus> {
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) if deadline.map_or(true, |deadline| Instant::now() < deadline) => {
                thread::sleep(POLL_INTERVAL)
            }
            Ok(None) => {
                log::debug!("'{program}' timed out after {timeout:?}, killing it");
                let _ = child.kill();
                let _ = child.wait();

                return Err(timed_out(program, timeout));
            }
            Err(err) => {
                let _ = child.kill();
                let _ = child.wait();

                return Err(HostInfoError::exec(format!(
                    "could not wait on '{program}': {err}"
                )));
            }
        }
    }
}

fn timed_out(program: &str, timeout: Duration) -> HostInfoError {
    HostInfoError::exec(format!(
        "'{program}' did not finish within {}",
        humantime::format_duration(timeout)
    ))
}

fn reader_died(program: &str) -> HostInfoError {
    HostInfoError::exec(format!("the output reader for '{program}' stopped unexpectedly"))
}
