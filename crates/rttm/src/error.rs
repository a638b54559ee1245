use std::fmt;

#[derive(Debug)]
pub enum RttmError {
    Io(std::io::Error),
    Parse { line: usize, message: String },
}

impl fmt::Display for RttmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RttmError::Io(err) => write!(f, "io error: {err}"),
            RttmError::Parse { line, message } => {
                write!(f, "parse error at line {line}: {message}")
            }
        }
    }
}

impl std::error::Error for RttmError {}

impl From<std::io::Error> for RttmError {
    fn from(err: std::io::Error) -> Self {
        RttmError::Io(err)
    }
}

/// Result type for RTTM operations
pub type Result<T> = std::result::Result<T, RttmError>;
