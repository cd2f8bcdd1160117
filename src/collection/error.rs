use std::borrow::Cow;

use thiserror::Error;

/// An error from one host query. Every variant is terminal for the call that
/// produced it; nothing is retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostInfoError {
    /// The video subsystem or driver could not be initialized.
    #[error("failed to initialize the video subsystem: {0}")]
    Init(Cow<'static, str>),

    /// The expected device or text pattern was absent.
    #[error("no primary display device found: {0}")]
    NotFound(Cow<'static, str>),

    /// A subprocess could not run or produced no usable output.
    #[error("failed to run the device query: {0}")]
    Exec(Cow<'static, str>),

    /// The OS memory-status call failed.
    #[error("failed to query memory status: {0}")]
    Query(Cow<'static, str>),

    /// The query is not supported on this platform.
    #[error("this query is unsupported on this platform")]
    Unsupported,
}

impl HostInfoError {
    pub fn init<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        HostInfoError::Init(reason.into())
    }

    pub fn not_found<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        HostInfoError::NotFound(reason.into())
    }

    pub fn exec<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        HostInfoError::Exec(reason.into())
    }

    pub fn query<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        HostInfoError::Query(reason.into())
    }
}

/// A [`Result`] with the error type being a [`HostInfoError`].
pub type HostInfoResult<T> = Result<T, HostInfoError>;
