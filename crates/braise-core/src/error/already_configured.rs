use super::Error;

/// Error when a single-assignment clause of a SELECT node is set twice.
#[derive(Debug)]
pub(super) struct AlreadyConfigured {
    clause: &'static str,
}

impl std::error::Error for AlreadyConfigured {}

impl core::fmt::Display for AlreadyConfigured {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} clause already configured", self.clause)
    }
}

impl Error {
    /// Creates an "already configured" error for the named clause.
    pub fn already_configured(clause: &'static str) -> Error {
        Error::from(super::ErrorKind::AlreadyConfigured(AlreadyConfigured {
            clause,
        }))
    }

    /// Returns `true` if this error is an "already configured" error.
    pub fn is_already_configured(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AlreadyConfigured(_))
    }
}
