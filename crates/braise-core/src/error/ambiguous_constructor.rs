use super::Error;

/// Error when the materializer cannot pick a way to construct a type.
///
/// A destination type needs either a parameterless constructor or exactly one
/// constructor whose parameters are resolved by name.
#[derive(Debug)]
pub(super) struct AmbiguousConstructor {
    type_name: Box<str>,
    candidates: usize,
}

impl std::error::Error for AmbiguousConstructor {}

impl core::fmt::Display for AmbiguousConstructor {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot select a constructor for `{}`: no parameterless constructor and {} candidate constructors",
            self.type_name, self.candidates
        )
    }
}

impl Error {
    /// Creates an ambiguous constructor error for the named type.
    pub fn ambiguous_constructor(type_name: impl Into<String>, candidates: usize) -> Error {
        Error::from(super::ErrorKind::AmbiguousConstructor(
            AmbiguousConstructor {
                type_name: type_name.into().into(),
                candidates,
            },
        ))
    }

    /// Returns `true` if this error is an ambiguous constructor error.
    pub fn is_ambiguous_constructor(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AmbiguousConstructor(_))
    }
}
