//! Error types.

use thiserror::Error;

/// Errors raised while encoding or delivering lighting commands.
#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum Error {
    #[error("arguments too long: {len} bytes (max {max})")]
    ArgumentsTooLong { len: usize, max: usize },

    #[error("device not supported: PID 0x{0:04X}")]
    DeviceNotSupported(u16),

    #[error("unable to open interface {path}: {reason}")]
    InterfaceOpenFailed { path: String, reason: String },

    #[error("short feature report write on {path}: {written} of {expected} bytes")]
    WriteMismatch { path: String, expected: usize, written: usize },

    #[error("no interface of {0} accepted the report")]
    SendFailed(&'static str),

    #[error("no Razer devices found")]
    NoDevicesFound,

    #[error("no device matches '{0}'")]
    DeviceNotFound(String),

    #[error("input closed before a {0} was entered")]
    InputClosed(&'static str),

    #[error("unable to read input: {0}")]
    Input(String),

    #[error("HID error: {0}")]
    Hid(String),
}

impl From<hidapi::HidError> for Error {
    fn from(err: hidapi::HidError) -> Self {
        Error::Hid(err.to_string())
    }
}
