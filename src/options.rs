//! How we handle config files and arguments.

pub mod args;
pub mod config;
pub mod error;

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

pub use self::{
    args::Args,
    config::Config,
    error::{OptionError, OptionResult},
};
use self::config::StringOrNum;
use crate::collection::display::{
    DisplayBackend, DisplaySettings, DEFAULT_LSPCI_COMMAND, DEFAULT_QUERY_TIMEOUT,
};

/// Where the config file lives, relative to the platform config directory.
pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "hostinfo/hostinfo.toml";

pub const MIN_QUERY_TIMEOUT: Duration = Duration::from_millis(100);
pub const MAX_QUERY_TIMEOUT: Duration = Duration::from_secs(60);

/// How the report should be printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub json: bool,
    pub legacy: bool,
}

/// Returns the config path to use. If `override_config_path` is set, that path
/// is used; otherwise the default path under the platform config directory.
pub fn get_config_path(override_config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(conf_loc) = override_config_path {
        return Some(conf_loc.to_path_buf());
    }

    dirs::config_dir().map(|path| path.join(DEFAULT_CONFIG_FILE_LOCATION))
}

/// Reads and parses the config file.
///
/// A file given explicitly must exist. A missing default file is not an error
/// and is never created; defaults are used instead.
pub fn get_config(override_config_path: Option<&Path>) -> OptionResult<Config> {
    let Some(path) = get_config_path(override_config_path) else {
        return Ok(Config::default());
    };

    if override_config_path.is_none() && !path.exists() {
        log::debug!("no config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let config_string = fs::read_to_string(&path)?;
    Ok(toml_edit::de::from_str(&config_string)?)
}

/// Resolves the display query settings. Arguments take precedence over the
/// config file, which takes precedence over the defaults.
pub fn get_display_settings(args: &Args, config: &Config) -> OptionResult<DisplaySettings> {
    let display_args = &args.display_args;
    let display_config = &config.display;

    let backend = match &display_args.backend {
        Some(backend) => backend.parse::<DisplayBackend>().map_err(OptionError::arg)?,
        None => display_config.backend.unwrap_or_default(),
    };

    let timeout = if let Some(timeout) = &display_args.timeout {
        let timeout =
            parse_duration(timeout).ok_or_else(|| OptionError::invalid_arg_value("timeout"))?;
        check_timeout(timeout).map_err(|reason| OptionError::arg(format!("'--timeout' {reason}")))?
    } else if let Some(timeout) = &display_config.timeout {
        let timeout = match timeout {
            StringOrNum::String(s) => parse_duration(s),
            StringOrNum::Num(ms) => Some(Duration::from_millis(*ms)),
        }
        .ok_or_else(|| OptionError::invalid_config_value("timeout"))?;
        check_timeout(timeout).map_err(|reason| OptionError::config(format!("'timeout' {reason}")))?
    } else {
        DEFAULT_QUERY_TIMEOUT
    };

    let lspci_command = display_args
        .lspci_command
        .as_ref()
        .or(display_config.lspci_command.as_ref())
        .map(|command| command.trim().to_string())
        .unwrap_or_else(|| DEFAULT_LSPCI_COMMAND.to_string());

    if lspci_command.is_empty() {
        return Err(if display_args.lspci_command.is_some() {
            OptionError::invalid_arg_value("lspci-command")
        } else {
            OptionError::invalid_config_value("lspci_command")
        });
    }

    Ok(DisplaySettings {
        backend,
        timeout,
        lspci_command,
    })
}

/// Returns the output options. These only come from arguments.
pub fn get_output_options(args: &Args) -> OutputOptions {
    OutputOptions {
        json: args.output_args.json,
        legacy: args.output_args.legacy,
    }
}

/// Parses either a plain number of milliseconds or a human duration like `2s`.
fn parse_duration(value: &str) -> Option<Duration> {
    let value = value.trim();

    if let Ok(ms) = value.parse::<u64>() {
        Some(Duration::from_millis(ms))
    } else {
        humantime::parse_duration(value).ok()
    }
}

fn check_timeout(timeout: Duration) -> Result<Duration, &'static str> {
    if timeout < MIN_QUERY_TIMEOUT {
        Err("must be at least 100ms.")
    } else if timeout > MAX_QUERY_TIMEOUT {
        Err("must be at most 60s.")
    } else {
        Ok(timeout)
    }
}
