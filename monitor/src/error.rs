use std::{error::Error, fmt, io};

/// The monitor module's result type.
pub type Result<T> = std::result::Result<T, MonitorErr>;

/// Which side of an inference record a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    Input,
    Output,
    /// The capture line wrapping both payloads.
    Event,
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Payload::Input => "endpoint input",
            Payload::Output => "endpoint output",
            Payload::Event => "capture event",
        };

        write!(f, "{s}")
    }
}

/// Record reshaping failures. None of them leaves a partial result behind.
#[derive(Debug)]
pub enum MonitorErr {
    Io(io::Error),
    Json {
        payload: Payload,
        source: serde_json::Error,
    },
    InputNotSequence,
    NonNumericFeature {
        index: usize,
    },
    MissingPredictions,
    EmptyPredictions,
    NonNumericPrediction,
    Line {
        line: usize,
        source: Box<MonitorErr>,
    },
}

impl fmt::Display for MonitorErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorErr::Io(e) => write!(f, "io error: {e}"),
            MonitorErr::Json { payload, source } => {
                write!(f, "malformed {payload} payload: {source}")
            }
            MonitorErr::InputNotSequence => {
                write!(f, "endpoint input is not a sequence of features")
            }
            MonitorErr::NonNumericFeature { index } => {
                write!(f, "feature {index} of the endpoint input is not a number")
            }
            MonitorErr::MissingPredictions => {
                write!(f, "endpoint output has no `predictions` key")
            }
            MonitorErr::EmptyPredictions => {
                write!(f, "endpoint output has no prediction at [0][0]")
            }
            MonitorErr::NonNumericPrediction => {
                write!(f, "prediction at [0][0] is not a number")
            }
            MonitorErr::Line { line, source } => write!(f, "line {line}: {source}"),
        }
    }
}

impl Error for MonitorErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MonitorErr::Io(e) => Some(e),
            MonitorErr::Json { source, .. } => Some(source),
            MonitorErr::Line { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for MonitorErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
