use std::error::Error;
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum PhysicsError {
    /// The configuration text is not valid JSON for `PhysicsConfig`.
    ConfigParse(serde_json::Error),
    /// The configuration parsed but a value is out of range.
    InvalidConfig(String),
}

impl Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(inner) => write!(f, "failed to parse physics config: {}", inner),
            Self::InvalidConfig(reason) => write!(f, "invalid physics config: {}", reason),
        }
    }
}

impl Error for PhysicsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ConfigParse(inner) => Some(inner),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<serde_json::Error> for PhysicsError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigParse(err)
    }
}
