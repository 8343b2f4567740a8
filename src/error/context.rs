use crate::{error::BoxError, Error};

/// Wrap the error side of a `Result` without touching `Ok` values.
///
/// ```rust
/// use errchain::Context;
///
/// fn read_config() -> errchain::Result<String> {
///     std::fs::read_to_string("/definitely/not/here.toml").wrap("reading config")
/// }
///
/// let err = read_config().unwrap_err();
/// assert_eq!(err.message(), "reading config");
/// assert_eq!(err.trace_lines().len(), 2);
/// ```
pub trait Context<T> {
    fn wrap<M: Into<String>>(self, message: M) -> Result<T, Error>;
    fn wrap_with<M: Into<String>>(self, f: impl FnOnce() -> M) -> Result<T, Error>;
    fn trace(self) -> Result<T, Error>;
}

impl<T, E: Into<BoxError>> Context<T> for Result<T, E> {
    #[track_caller]
    fn wrap<M: Into<String>>(self, message: M) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::wrap(err, message)),
        }
    }

    #[track_caller]
    fn wrap_with<M: Into<String>>(self, f: impl FnOnce() -> M) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::wrap(err, f())),
        }
    }

    #[track_caller]
    fn trace(self) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::trace(err)),
        }
    }
}
