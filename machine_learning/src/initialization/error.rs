use std::{
    error::Error,
    fmt::{self, Display},
};

use rand_distr::uniform::Error as UniformError;

/// The specific result type for the different instances of `RandParamGen` generators.
pub type Result<T> = std::result::Result<T, InitErr>;

/// The error that can occur when building a random parameter generator.
#[derive(Debug)]
pub enum InitErr {
    Uniform(UniformError),
}

impl Display for InitErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitErr::Uniform(e) => write!(f, "invalid uniform range: {e}"),
        }
    }
}

impl Error for InitErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InitErr::Uniform(e) => Some(e),
        }
    }
}

impl From<UniformError> for InitErr {
    fn from(value: UniformError) -> Self {
        Self::Uniform(value)
    }
}
