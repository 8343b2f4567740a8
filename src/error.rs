use std::fmt::{Arguments, Debug, Display};

use annotate_snippets::{Level, Renderer};

use crate::{Config, Location};

mod context;

pub use context::Context;

/// Anything that can sit below a node in the chain.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// One step of an error chain: a message, maybe the place it was attached,
/// and whatever it was attached to.
///
/// `Display` prints the cause's message, so wrapping never changes what the
/// error says, only what [`Error::details`] can tell about how it got here.
///
/// ```rust
/// use errchain::Error;
///
/// let err = Error::new("first");
/// let err = Error::wrap(err, "second");
///
/// assert_eq!(err.to_string(), "first");
/// assert_eq!(err.details(), "[error] first\n[error] second");
/// ```
pub struct Error {
    data: Box<ErrorData>,
}

struct ErrorData {
    location: Option<Location>,
    message: String,
    predecessor: Option<Predecessor>,
}

enum Predecessor {
    Chain(Error),
    Foreign(BoxError),
}

impl From<BoxError> for Predecessor {
    fn from(value: BoxError) -> Self {
        match value.downcast::<Error>() {
            Ok(node) => Self::Chain(*node),
            Err(foreign) => Self::Foreign(foreign),
        }
    }
}

impl Predecessor {
    fn link(&self) -> Link<'_> {
        match self {
            Self::Chain(node) => Link::Node(node),
            Self::Foreign(err) => Link::Foreign(&**err),
        }
    }
}

impl Error {
    pub(crate) fn build(
        message: String,
        location: Option<Location>,
        predecessor: Option<BoxError>,
    ) -> Self {
        Self {
            data: Box::new(ErrorData {
                location,
                message,
                predecessor: predecessor.map(Predecessor::from),
            }),
        }
    }

    /// A root error. Records the caller if [`crate::include_caller`] is on.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Config::global().error(message)
    }

    /// A root error with a formatted message, see also [`crate::format_err!`].
    #[track_caller]
    pub fn newf(args: Arguments<'_>) -> Self {
        Config::global().errorf(args)
    }

    /// Attach `message` to `source`.
    ///
    /// `source` may be another [`Error`], in which case the chain just grows,
    /// or any foreign error, which then terminates the chain.
    #[track_caller]
    pub fn wrap(source: impl Into<BoxError>, message: impl Into<String>) -> Self {
        Config::global().wrap(source, message)
    }

    #[track_caller]
    pub fn wrapf(source: impl Into<BoxError>, args: Arguments<'_>) -> Self {
        Config::global().wrapf(source, args)
    }

    /// Mark that `source` passed through here. Only useful with caller
    /// capture on, the node itself carries no message.
    #[track_caller]
    pub fn trace(source: impl Into<BoxError>) -> Self {
        Config::global().trace(source)
    }

    #[track_caller]
    pub fn tracef(source: impl Into<BoxError>, args: Arguments<'_>) -> Self {
        Config::global().tracef(source, args)
    }

    pub fn message(&self) -> &str {
        &self.data.message
    }

    pub fn location(&self) -> Option<Location> {
        self.data.location
    }

    /// The error this node was attached to, `None` for a root node.
    pub fn predecessor(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.data
            .predecessor
            .as_ref()
            .map(|p| p.link().as_error())
    }

    pub fn is_root(&self) -> bool {
        self.data.predecessor.is_none()
    }

    /// Walk the chain starting at `self`, most recent first.
    pub fn links(&self) -> Links<'_> {
        Links(Some(Link::Node(self)))
    }

    fn terminal(&self) -> Link<'_> {
        let mut node = self;
        loop {
            match &node.data.predecessor {
                None => return Link::Node(node),
                Some(Predecessor::Chain(next)) => node = next,
                Some(Predecessor::Foreign(err)) => return Link::Foreign(&**err),
            }
        }
    }

    /// The error the chain started from: the root node, or the foreign error
    /// the first wrap was applied to.
    pub fn cause(&self) -> &(dyn std::error::Error + 'static) {
        self.terminal().as_error()
    }

    /// One line per link, root cause first and the most recent wrap last.
    pub fn trace_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.links().map(|link| link.line()).collect();
        lines.reverse();
        lines
    }

    /// [`Error::trace_lines`] joined by newlines.
    pub fn details(&self) -> String {
        self.trace_lines().join("\n")
    }
}

/// A single entry of [`Error::links`].
#[derive(Clone, Copy)]
pub enum Link<'a> {
    Node(&'a Error),
    Foreign(&'a (dyn std::error::Error + Send + Sync + 'static)),
}

impl<'a> Link<'a> {
    pub fn as_error(&self) -> &'a (dyn std::error::Error + 'static) {
        match *self {
            Link::Node(node) => node,
            Link::Foreign(err) => err,
        }
    }

    /// The trace line for this link.
    pub fn line(&self) -> String {
        match self {
            Link::Node(node) => match node.location() {
                Some(location) => format!("{location} [error] {}", node.message()),
                None => format!("[error] {}", node.message()),
            },
            Link::Foreign(err) => err.to_string(),
        }
    }
}

impl Debug for Link<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.line())
    }
}

pub struct Links<'a>(Option<Link<'a>>);

impl<'a> Iterator for Links<'a> {
    type Item = Link<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.0.take()?;
        if let Link::Node(node) = next {
            self.0 = node.data.predecessor.as_ref().map(Predecessor::link);
        }
        Some(next)
    }
}

impl Drop for ErrorData {
    fn drop(&mut self) {
        // dropping must not recurse down the chain
        let mut next = self.predecessor.take();
        while let Some(Predecessor::Chain(node)) = next {
            let mut node = node;
            next = node.data.predecessor.take();
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.predecessor()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.terminal() {
            Link::Node(root) => f.write_str(root.message()),
            Link::Foreign(err) => Display::fmt(err, f),
        }
    }
}

impl Error {
    fn render(&self, renderer: &Renderer) -> String {
        let title = self.to_string();
        let lines = self.trace_lines();
        let message = lines
            .iter()
            .fold(Level::Error.title(&title), |message, line| {
                message.footer(Level::Note.title(line))
            });
        let res = renderer.render(message).to_string();
        res
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let renderer = if colored::control::SHOULD_COLORIZE.should_colorize() {
            Renderer::styled()
        } else {
            Renderer::plain()
        };
        f.write_str(&self.render(&renderer))
    }
}

/// [`Error::wrap`], passing `None` through untouched.
#[track_caller]
pub fn wrap<E: Into<BoxError>>(err: Option<E>, message: impl Into<String>) -> Option<Error> {
    match err {
        Some(err) => Some(Error::wrap(err, message)),
        None => None,
    }
}

/// [`Error::wrapf`], passing `None` through untouched.
#[track_caller]
pub fn wrapf<E: Into<BoxError>>(err: Option<E>, args: Arguments<'_>) -> Option<Error> {
    match err {
        Some(err) => Some(Error::wrapf(err, args)),
        None => None,
    }
}

/// [`Error::trace`], passing `None` through untouched.
#[track_caller]
pub fn trace<E: Into<BoxError>>(err: Option<E>) -> Option<Error> {
    match err {
        Some(err) => Some(Error::trace(err)),
        None => None,
    }
}

/// [`Error::tracef`], passing `None` through untouched.
#[track_caller]
pub fn tracef<E: Into<BoxError>>(err: Option<E>, args: Arguments<'_>) -> Option<Error> {
    match err {
        Some(err) => Some(Error::tracef(err, args)),
        None => None,
    }
}
