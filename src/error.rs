use std::error::Error;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum AveragerError {
    InvalidInput(String),
    EmptyAggregation,
    AlreadyFinalized,
    MalformedKey(String),
    DuplicateKey(String),
    Group {
        key: String,
        source: Box<AveragerError>,
    },
    Io(io::Error),
    Json(serde_json::Error),
}

impl AveragerError {
    pub fn in_group(self, key: &str) -> AveragerError {
        AveragerError::Group {
            key: key.to_string(),
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping any group context.
    pub fn root(&self) -> &AveragerError {
        match *self {
            AveragerError::Group { ref source, .. } => source.root(),
            _ => self,
        }
    }
}

impl Display for AveragerError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            AveragerError::InvalidInput(ref value) => write!(f, "Invalid sample: {}", value),
            AveragerError::EmptyAggregation => write!(f, "No samples to average"),
            AveragerError::AlreadyFinalized => write!(f, "Averager is already finalized"),
            AveragerError::MalformedKey(ref key) => {
                write!(f, "Malformed key {:?}, expected \"label;unit\"", key)
            }
            AveragerError::DuplicateKey(ref key) => write!(f, "Duplicate key {:?}", key),
            AveragerError::Group { ref key, ref source } => {
                write!(f, "Group {:?}: {}", key, source)
            }
            AveragerError::Io(ref error) => Display::fmt(error, f),
            AveragerError::Json(ref error) => Display::fmt(error, f),
        }
    }
}

impl Error for AveragerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            AveragerError::Io(ref error) => Some(error),
            AveragerError::Json(ref error) => Some(error),
            _ => None,
        }
    }
}

impl PartialEq for AveragerError {
    fn eq(&self, other: &Self) -> bool {
        use AveragerError::*;
        match (self, other) {
            (InvalidInput(a), InvalidInput(b)) => a == b,
            (EmptyAggregation, EmptyAggregation) => true,
            (AlreadyFinalized, AlreadyFinalized) => true,
            (MalformedKey(a), MalformedKey(b)) => a == b,
            (DuplicateKey(a), DuplicateKey(b)) => a == b,
            (
                Group { key: a, source: x },
                Group { key: b, source: y },
            ) => a == b && x == y,
            (Io(a), Io(b)) => a.kind() == b.kind(),
            (Json(a), Json(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

impl From<io::Error> for AveragerError {
    fn from(e: io::Error) -> AveragerError {
        AveragerError::Io(e)
    }
}

impl From<serde_json::Error> for AveragerError {
    fn from(e: serde_json::Error) -> AveragerError {
        AveragerError::Json(e)
    }
}
