use super::Error;

/// Error when the translator meets an operator, method or node it does not
/// implement.
///
/// The message names the offending operation so the caller can find it in
/// the query that produced it.
#[derive(Debug)]
pub(super) struct UnsupportedOperation {
    operation: Box<str>,
}

impl std::error::Error for UnsupportedOperation {}

impl core::fmt::Display for UnsupportedOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported operation: {}", self.operation)
    }
}

impl Error {
    /// Creates an unsupported operation error naming `operation`.
    pub fn unsupported_operation(operation: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedOperation(
            UnsupportedOperation {
                operation: operation.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported operation error.
    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedOperation(_))
    }
}
