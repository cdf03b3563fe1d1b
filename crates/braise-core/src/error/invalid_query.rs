use super::Error;

/// Error when a query is well-formed but cannot produce a meaningful result.
///
/// Paging with `Skip` and no ordering is the typical case: row order is
/// undefined so the skipped rows would be arbitrary.
#[derive(Debug)]
pub(super) struct InvalidQuery {
    message: Box<str>,
}

impl std::error::Error for InvalidQuery {}

impl core::fmt::Display for InvalidQuery {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid query: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid query error.
    pub fn invalid_query(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidQuery(InvalidQuery {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid query error.
    pub fn is_invalid_query(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidQuery(_))
    }
}
