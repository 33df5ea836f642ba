use std::{
    error::Error,
    fmt::{self, Display},
};

use crate::initialization::InitErr;

/// The result type used in the entire machine learning module.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The machine learning module's error type.
#[derive(Debug)]
pub enum MlErr {
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    InvalidSpec(String),
    Init(InitErr),
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch in {what}, got {got} and expected {expected}"
            ),
            MlErr::InvalidSpec(msg) => write!(f, "invalid model spec: {msg}"),
            MlErr::Init(e) => write!(f, "failed to initialize parameters: {e}"),
        }
    }
}

impl Error for MlErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MlErr::Init(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InitErr> for MlErr {
    fn from(value: InitErr) -> Self {
        Self::Init(value)
    }
}
