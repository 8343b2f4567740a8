//! Handing chains over to logging and to `color_eyre`.

use color_eyre::{Report, Section, SectionExt};

use crate::{inspect, Error};

/// Log `err` as a single `tracing` error event.
///
/// The event carries the cause's message, the number of trace lines and the
/// full [`inspect::details`] text, so one record is enough to follow the chain.
pub fn emit(err: &(dyn std::error::Error + 'static)) {
    let lines = inspect::get_trace(Some(err));
    let cause = inspect::cause(Some(err)).map(ToString::to_string);
    tracing::error!(
        cause = cause.as_deref().unwrap_or_default(),
        depth = lines.len(),
        details = %lines.join("\n"),
        "error chain"
    );
}

impl Error {
    /// Convert into a [`Report`] with the trace attached as a section.
    ///
    /// The section only shows up when a `color_eyre` handler is installed;
    /// the chain itself stays reachable through `downcast_ref`.
    pub fn into_report(self) -> Report {
        let details = self.details();
        Report::new(self).section(details.header("Trace:"))
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::Write,
        sync::{Arc, Mutex},
    };

    use super::*;
    use crate::Config;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn emit_writes_one_event() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let config = Config::default();
        let err = config.wrap(config.error("disk full"), "saving snapshot");
        tracing::subscriber::with_default(subscriber, || emit(&err));

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("error chain").count(), 1);
        assert!(output.contains("ERROR"));
        assert!(output.contains("cause=\"disk full\""));
        assert!(output.contains("depth=2"));
        assert!(output.contains("[error] saving snapshot"));
    }

    #[test]
    fn report_keeps_the_chain() {
        let config = Config::default();
        let err = config.wrap(config.error("kaboom"), "woosh");
        let report = err.into_report();
        assert_eq!(report.to_string(), "kaboom");
        let err = report.downcast_ref::<Error>().unwrap();
        assert_eq!(err.message(), "woosh");
    }
}
