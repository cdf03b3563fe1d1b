use super::Error;

/// Error when a converter or the generic conversion cannot transform a value.
#[derive(Debug)]
pub(super) struct ConversionFailure {
    message: Box<str>,
}

impl std::error::Error for ConversionFailure {}

impl core::fmt::Display for ConversionFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "conversion failed: {}", self.message)
    }
}

impl Error {
    /// Creates a conversion failure error with a free-form message.
    pub fn conversion_failure(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ConversionFailure(ConversionFailure {
            message: message.into().into(),
        }))
    }

    /// Creates a conversion failure for a value of type `from` that cannot
    /// become `to_type`.
    pub fn type_conversion(from: impl core::fmt::Display, to_type: impl core::fmt::Display) -> Error {
        Error::conversion_failure(format!("cannot convert {from} to {to_type}"))
    }

    /// Returns `true` if this error is a conversion failure.
    pub fn is_conversion_failure(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConversionFailure(_))
    }
}
