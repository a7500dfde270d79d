use std::fmt;

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Io(kind) => write!(f, "io error: {kind}"),
            ErrorKind::NotARepository => write!(f, "not a git repository"),
            ErrorKind::Unsupported(what) => write!(f, "{what}"),
            ErrorKind::Backend(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for Error {}

#[derive(Debug)]
pub enum ErrorKind {
    Io(std::io::ErrorKind),
    NotARepository,
    Unsupported(&'static str),
    Backend(String),
}
