use std::{
    fmt::Arguments,
    sync::atomic::{AtomicBool, Ordering},
};

use crate::{error::BoxError, Error, Location};

/// Environment variable read by [`Config::from_env`] and [`init_from_env`].
pub const INCLUDE_CALLER_ENV: &str = "ERRCHAIN_INCLUDE_CALLER";

static INCLUDE_CALLER: AtomicBool = AtomicBool::new(false);

/// Whether constructors that don't take an explicit [`Config`] record their caller.
pub fn include_caller() -> bool {
    INCLUDE_CALLER.load(Ordering::Relaxed)
}

/// Turn caller capture on or off for the whole process.
///
/// Meant to be called once during start-up. The switch is read on every
/// construction, so errors built on other threads while it flips may end up
/// with or without a location.
pub fn set_include_caller(enabled: bool) {
    let previous = INCLUDE_CALLER.swap(enabled, Ordering::Relaxed);
    if previous != enabled {
        tracing::debug!(enabled, "error caller capture toggled");
    }
}

/// Apply [`INCLUDE_CALLER_ENV`] to the process-wide switch, if it is set to a
/// recognised value. Returns the value now in effect.
pub fn init_from_env() -> bool {
    let config = Config::from_env();
    set_include_caller(config.include_caller);
    config.include_caller
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Construction settings, for callers that would rather not depend on the
/// process-wide switch.
///
/// ```rust
/// use errchain::Config;
///
/// let config = Config { include_caller: true };
/// let err = config.wrap(config.error("disk full"), "saving snapshot");
/// assert!(err.location().is_some());
/// assert_eq!(err.to_string(), "disk full");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub include_caller: bool,
}

impl Config {
    /// A snapshot of the process-wide switch.
    pub fn global() -> Self {
        Self {
            include_caller: include_caller(),
        }
    }

    /// The process-wide switch, overridden by [`INCLUDE_CALLER_ENV`] when it
    /// holds a recognised value.
    pub fn from_env() -> Self {
        let mut config = Self::global();
        if let Some(enabled) = std::env::var(INCLUDE_CALLER_ENV)
            .ok()
            .as_deref()
            .and_then(parse_flag)
        {
            config.include_caller = enabled;
        }
        config
    }

    #[track_caller]
    fn location(&self) -> Option<Location> {
        if self.include_caller {
            Some(Location::caller())
        } else {
            None
        }
    }

    /// Build a root error.
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) -> Error {
        Error::build(message.into(), self.location(), None)
    }

    #[track_caller]
    pub fn errorf(&self, args: Arguments<'_>) -> Error {
        Error::build(args.to_string(), self.location(), None)
    }

    /// Put `message` on top of `source`.
    #[track_caller]
    pub fn wrap(&self, source: impl Into<BoxError>, message: impl Into<String>) -> Error {
        Error::build(message.into(), self.location(), Some(source.into()))
    }

    #[track_caller]
    pub fn wrapf(&self, source: impl Into<BoxError>, args: Arguments<'_>) -> Error {
        Error::build(args.to_string(), self.location(), Some(source.into()))
    }

    /// Record that `source` passed through here, without a message of its own.
    #[track_caller]
    pub fn trace(&self, source: impl Into<BoxError>) -> Error {
        Error::build(String::new(), self.location(), Some(source.into()))
    }

    #[track_caller]
    pub fn tracef(&self, source: impl Into<BoxError>, args: Arguments<'_>) -> Error {
        Error::build(args.to_string(), self.location(), Some(source.into()))
    }
}
