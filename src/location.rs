use std::fmt::Display;

/// A source position recorded when a chain node is constructed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    file: &'static str,
    line: u32,
    column: u32,
}

impl std::fmt::Debug for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { file, line, column } = self;
        write!(f, "{file}:{line}:{column}")
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

impl Location {
    /// The location of whoever called into the `#[track_caller]` chain that ends here.
    #[track_caller]
    pub fn caller() -> Self {
        std::panic::Location::caller().into()
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

impl From<&'static std::panic::Location<'static>> for Location {
    fn from(value: &'static std::panic::Location<'static>) -> Self {
        Self {
            file: value.file(),
            line: value.line(),
            column: value.column(),
        }
    }
}
