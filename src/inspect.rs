//! Inspection of arbitrary errors, chain nodes or not.
//!
//! Everything here accepts `None` for "no error" and answers with `None`,
//! an empty trace or an empty string. Errors that weren't built by this crate
//! are treated as opaque chain terminators.

use crate::Error;

type DynError = dyn std::error::Error + 'static;

/// The error `err` originally came from.
///
/// For a chain node this is the root node, or the foreign error the chain was
/// started on. Anything else is its own cause. Foreign `source()` links are
/// never followed.
pub fn cause(err: Option<&DynError>) -> Option<&DynError> {
    let err = err?;
    match err.downcast_ref::<Error>() {
        Some(node) => Some(node.cause()),
        None => Some(err),
    }
}

/// One step down the chain.
///
/// Returns the predecessor of a chain node, and `err` itself for a root node
/// or a foreign error.
pub fn unwrap(err: Option<&DynError>) -> Option<&DynError> {
    let err = err?;
    match err.downcast_ref::<Error>().and_then(Error::predecessor) {
        Some(predecessor) => Some(predecessor),
        None => Some(err),
    }
}

/// The trace of `err`, root cause first. See [`Error::trace_lines`].
pub fn get_trace(err: Option<&DynError>) -> Vec<String> {
    match err {
        None => Vec::new(),
        Some(err) => match err.downcast_ref::<Error>() {
            Some(node) => node.trace_lines(),
            None => vec![err.to_string()],
        },
    }
}

/// [`get_trace`] joined by newlines.
pub fn details(err: Option<&DynError>) -> String {
    get_trace(err).join("\n")
}

/// Iterate `err` and everything reachable through `source()`.
fn sources(err: Option<&DynError>) -> impl Iterator<Item = &DynError> {
    std::iter::successors(err, |e| (*e).source())
}

/// Whether any error in the `source()` chain of `err` is a `T` equal to `target`.
pub fn is<T>(err: Option<&DynError>, target: &T) -> bool
where
    T: std::error::Error + PartialEq + 'static,
{
    sources(err).any(|e| e.downcast_ref::<T>() == Some(target))
}

/// The first error in the `source()` chain of `err` that is a `T`.
pub fn downcast_ref<T>(err: Option<&DynError>) -> Option<&T>
where
    T: std::error::Error + 'static,
{
    sources(err).find_map(|e| e.downcast_ref::<T>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[derive(Debug, PartialEq)]
    struct Code(u16);

    impl std::fmt::Display for Code {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "code {}", self.0)
        }
    }

    impl std::error::Error for Code {}

    const PLAIN: Config = Config {
        include_caller: false,
    };

    #[test]
    fn nothing_in_nothing_out() {
        assert!(cause(None).is_none());
        assert!(unwrap(None).is_none());
        assert!(get_trace(None).is_empty());
        assert_eq!(details(None), "");
        assert!(!is(None, &Code(1)));
        assert!(downcast_ref::<Code>(None).is_none());
    }

    #[test]
    fn foreign_error_is_its_own_cause() {
        let code = Code(404);
        let found = cause(Some(&code)).unwrap();
        assert!(std::ptr::eq(
            found as *const DynError as *const (),
            &code as *const Code as *const ()
        ));
        let step = unwrap(Some(&code)).unwrap();
        assert_eq!(step.to_string(), "code 404");
        assert_eq!(get_trace(Some(&code)), ["code 404"]);
    }

    #[test]
    fn unwrap_takes_a_single_step() {
        let err = PLAIN.wrap(PLAIN.wrap(PLAIN.error("a"), "b"), "c");
        let step = unwrap(Some(&err)).unwrap();
        assert_eq!(step.downcast_ref::<Error>().unwrap().message(), "b");
        let step = unwrap(Some(step)).unwrap();
        assert_eq!(step.downcast_ref::<Error>().unwrap().message(), "a");
        let root = unwrap(Some(step)).unwrap();
        assert!(std::ptr::eq(
            root as *const DynError as *const (),
            step as *const DynError as *const ()
        ));
    }

    #[test]
    fn cause_matches_method() {
        let err = PLAIN.wrap(PLAIN.wrap(Code(7), "inner"), "outer");
        let found = cause(Some(&err)).unwrap();
        assert_eq!(found.downcast_ref::<Code>(), Some(&Code(7)));
        assert!(std::ptr::eq(
            found as *const DynError as *const (),
            err.cause() as *const DynError as *const ()
        ));
    }

    #[test]
    fn trace_and_details() {
        let err = PLAIN.wrap(PLAIN.error("first"), "second");
        assert_eq!(get_trace(Some(&err)), ["[error] first", "[error] second"]);
        assert_eq!(details(Some(&err)), "[error] first\n[error] second");
        assert_eq!(get_trace(Some(&err)), get_trace(Some(&err)));
    }

    #[test]
    fn is_and_downcast_look_through_nodes() {
        let err = PLAIN.wrap(PLAIN.trace(Code(500)), "handling request");
        assert!(is(Some(&err), &Code(500)));
        assert!(!is(Some(&err), &Code(501)));
        assert_eq!(downcast_ref::<Code>(Some(&err)), Some(&Code(500)));

        let node = downcast_ref::<Error>(Some(&err)).unwrap();
        assert_eq!(node.message(), "handling request");
        assert!(downcast_ref::<std::fmt::Error>(Some(&err)).is_none());
    }
}
