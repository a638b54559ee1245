use std::fmt;

#[derive(Debug)]
pub enum MimicError {
    Rttm(rttm::RttmError),
    NoReferences,
    ReferenceTooShort {
        uri: String,
        duration: f64,
        length: f64,
    },
    EmptyCrop {
        uri: String,
    },
}

impl fmt::Display for MimicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MimicError::Rttm(err) => write!(f, "rttm error: {err}"),
            MimicError::NoReferences => {
                write!(f, "reference file produced no annotations")
            }
            MimicError::ReferenceTooShort {
                uri,
                duration,
                length,
            } => write!(
                f,
                "reference {uri} spans {duration:.3}s, shorter than the {length:.3}s crop window"
            ),
            MimicError::EmptyCrop { uri } => {
                write!(f, "crop window over {uri} contains no speech")
            }
        }
    }
}

impl std::error::Error for MimicError {}

impl From<rttm::RttmError> for MimicError {
    fn from(err: rttm::RttmError) -> Self {
        MimicError::Rttm(err)
    }
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, MimicError>;
