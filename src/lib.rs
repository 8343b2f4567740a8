//! Contextual error chains.
//!
//! An [`Error`] is a message attached to whatever error came before it. The
//! original error is never thrown away: [`Error::cause`] gets it back, and
//! [`Error::trace_lines`] / [`Error::details`] describe every step that was
//! added on the way up, root cause first.
//!
//! ```rust
//! use errchain::{Context, Error};
//!
//! fn load() -> errchain::Result<()> {
//!     Err(Error::new("connection refused"))
//! }
//!
//! fn run() -> errchain::Result<()> {
//!     load().wrap("loading user 42")?;
//!     Ok(())
//! }
//!
//! let err = run().unwrap_err();
//! assert_eq!(err.to_string(), "connection refused");
//! assert_eq!(err.details(), "[error] connection refused\n[error] loading user 42");
//! ```
//!
//! Source locations are only recorded when [`set_include_caller`] was turned
//! on, or when building through an explicit [`Config`].

mod config;
mod error;
mod location;
pub mod inspect;
pub mod report;

pub use config::*;
pub use error::*;
pub use inspect::{cause, details, get_trace, unwrap};
pub use location::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Build a root [`Error`] from a format string.
#[macro_export]
macro_rules! format_err {
    ($($arg:tt)*) => {
        $crate::Error::newf(format_args!($($arg)*))
    };
}

/// Return early with a root [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::format_err!($($arg)*).into())
    };
}

/// [`Error::wrapf`] with format arguments.
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)*) => {
        $crate::Error::wrapf($err, format_args!($($arg)*))
    };
}

/// [`Error::tracef`] with format arguments.
#[macro_export]
macro_rules! tracef {
    ($err:expr, $($arg:tt)*) => {
        $crate::Error::tracef($err, format_args!($($arg)*))
    };
}
