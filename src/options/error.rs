use std::borrow::Cow;

use thiserror::Error;

/// A problem with the config file or the arguments. These are shown to the
/// user as-is, so say what is wrong and how to fix it, quoting values with
/// single quotes (e.g. `'bad'`).
#[derive(Debug, Error, PartialEq)]
pub enum OptionError {
    #[error("Configuration file error: {0}")]
    Config(Cow<'static, str>),

    #[error("Argument error: {0}")]
    Argument(Cow<'static, str>),

    /// The config file could not be read at all.
    #[error("Could not read the config file: {0}")]
    Unreadable(Cow<'static, str>),
}

impl OptionError {
    pub(crate) fn config<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        OptionError::Config(reason.into())
    }

    pub(crate) fn arg<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        OptionError::Argument(reason.into())
    }

    /// An argument that could not be parsed, like `'--timeout'`.
    pub(crate) fn invalid_arg_value(arg: &str) -> Self {
        OptionError::arg(format!(
            "'--{arg}' was set with an invalid value, please update your arguments."
        ))
    }

    /// A config key that could not be parsed, like `'timeout'`.
    pub(crate) fn invalid_config_value(key: &str) -> Self {
        OptionError::config(format!(
            "'{key}' was set with an invalid value, please update it in your config file."
        ))
    }
}

pub type OptionResult<T> = Result<T, OptionError>;

impl From<toml_edit::de::Error> for OptionError {
    fn from(err: toml_edit::de::Error) -> Self {
        OptionError::config(err.to_string())
    }
}

impl From<std::io::Error> for OptionError {
    fn from(err: std::io::Error) -> Self {
        OptionError::Unreadable(err.to_string().into())
    }
}
