pub mod capture;
pub mod error;
pub mod preprocess;
pub mod record;

pub use capture::reshape_capture;
pub use error::{MonitorErr, Payload, Result};
pub use preprocess::{ReshapedRecord, preprocess_handler};
pub use record::{CaptureData, CaptureEvent, InferenceRecord};
