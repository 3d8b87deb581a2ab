//! Common error types.

use std::{error, fmt};

/// An error that may be generated while registering a resize listener.
#[derive(Debug)]
pub enum SetupError {
    /// The host has no viewport able to emit resize notifications.
    NotSupported(NotSupportedError),
    /// The host rejected the listener registration.
    Os(OsError),
}

impl From<NotSupportedError> for SetupError {
    fn from(value: NotSupportedError) -> Self {
        Self::NotSupported(value)
    }
}

impl From<OsError> for SetupError {
    fn from(value: OsError) -> Self {
        Self::Os(value)
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            SetupError::NotSupported(e) => e.fmt(f),
            SetupError::Os(e) => e.fmt(f),
        }
    }
}

impl error::Error for SetupError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SetupError::NotSupported(e) => Some(e),
            SetupError::Os(e) => Some(e),
        }
    }
}

/// The error type for when the host cannot deliver resize notifications.
#[derive(Clone)]
pub struct NotSupportedError {
    reason: &'static str,
}

impl NotSupportedError {
    /// Create a new [`NotSupportedError`].
    #[inline]
    pub fn new(reason: &'static str) -> NotSupportedError {
        NotSupportedError { reason }
    }

    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

impl fmt::Debug for NotSupportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("NotSupportedError").field("reason", &self.reason).finish()
    }
}

impl fmt::Display for NotSupportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.pad(&format!("resize notifications are not supported: {}", self.reason))
    }
}

impl error::Error for NotSupportedError {}

/// The error type for when the host fails to perform the requested operation.
#[derive(Debug, Clone)]
pub struct OsError {
    line: u32,
    file: &'static str,
    message: String,
}

impl OsError {
    /// Prefer the [`os_error!`](crate::os_error) macro, which fills in the location.
    pub fn new(line: u32, file: &'static str, message: impl Into<String>) -> OsError {
        OsError { line, file, message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Build an [`OsError`] tagged with the current source location.
#[macro_export]
macro_rules! os_error {
    ($message:expr) => {{
        $crate::error::OsError::new(line!(), file!(), $message)
    }};
}

impl fmt::Display for OsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.pad(&format!("os error at {}:{}: {}", self.file, self.line, self.message))
    }
}

impl error::Error for OsError {}
