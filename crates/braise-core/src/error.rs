mod adhoc;
mod already_configured;
mod ambiguous_constructor;
mod conversion_failure;
mod driver;
mod expression_evaluation_failed;
mod invalid_query;
mod unsupported_operation;

use adhoc::AdhocError;
use already_configured::AlreadyConfigured;
use ambiguous_constructor::AmbiguousConstructor;
use conversion_failure::ConversionFailure;
use driver::DriverError;
use expression_evaluation_failed::ExpressionEvaluationFailed;
use invalid_query::InvalidQuery;
use std::sync::Arc;
use unsupported_operation::UnsupportedOperation;

/// An error that can occur while translating a query or materializing rows.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }

        if let Some(inner) = err.inner.as_mut().and_then(Arc::get_mut) {
            if inner.cause.is_none() {
                inner.cause = Some(self);
                return err;
            }
        }

        // The consequent is shared or already carries a cause; rebuild it as
        // a message so the chain stays linear.
        let kind = ErrorKind::Adhoc(AdhocError::new(err.kind().to_string()));
        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    /// Returns the error that caused this one, if any.
    pub fn cause(&self) -> Option<&Error> {
        self.inner.as_ref().and_then(|inner| inner.cause.as_ref())
    }

    /// Returns the innermost error of the chain.
    pub fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Creates an ad-hoc error from preformatted arguments. Used by the
    /// `bail!` and `err!` macros.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args.to_string())))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Driver(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => self
                .cause()
                .map(|cause| cause as &(dyn std::error::Error + 'static)),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    AlreadyConfigured(AlreadyConfigured),
    AmbiguousConstructor(AmbiguousConstructor),
    ConversionFailure(ConversionFailure),
    Driver(DriverError),
    ExpressionEvaluationFailed(ExpressionEvaluationFailed),
    InvalidQuery(InvalidQuery),
    UnsupportedOperation(UnsupportedOperation),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            AlreadyConfigured(err) => core::fmt::Display::fmt(err, f),
            AmbiguousConstructor(err) => core::fmt::Display::fmt(err, f),
            ConversionFailure(err) => core::fmt::Display::fmt(err, f),
            Driver(err) => core::fmt::Display::fmt(err, f),
            ExpressionEvaluationFailed(err) => core::fmt::Display::fmt(err, f),
            InvalidQuery(err) => core::fmt::Display::fmt(err, f),
            UnsupportedOperation(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown braise error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Error {
        parse_failure(err)
    }
}

impl From<std::num::ParseFloatError> for Error {
    fn from(err: std::num::ParseFloatError) -> Error {
        parse_failure(err)
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Error {
        parse_failure(err)
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Error {
        parse_failure(err)
    }
}

/// Parse errors surface as conversion failures caused by the parser's error.
fn parse_failure(err: impl std::error::Error + Send + Sync + 'static) -> Error {
    Error::from(anyhow::Error::from(err)).context(Error::conversion_failure("cannot parse value"))
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = err!("root cause");
        let mid = err!("middle context");
        let top = err!("top context");

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
        assert_eq!(chained.root().to_string(), "root cause");
    }

    #[test]
    fn context_on_shared_consequent_keeps_chain() {
        let consequent = err!("outer");
        let shared = consequent.clone();

        let chained = err!("inner").context(consequent);
        assert_eq!(chained.to_string(), "outer: inner");
        assert_eq!(shared.to_string(), "outer");
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn parse_int_bridge() {
        let err: Error = "abc".parse::<i32>().unwrap_err().into();
        assert!(err.is_conversion_failure());
        assert_eq!(
            err.to_string(),
            "conversion failed: cannot parse value: invalid digit found in string"
        );
    }
}
