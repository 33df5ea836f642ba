use std::io::BufRead;

use log::warn;

use crate::{
    MonitorErr, Payload, Result,
    preprocess::{ReshapedRecord, preprocess_handler},
    record::CaptureEvent,
};

/// Reshapes every event of a JSON lines capture file.
///
/// Blank lines are skipped. Each failing line yields a `MonitorErr::Line` carrying its 1-based
/// number, and iteration goes on, so the caller decides whether to stop at the first error.
///
/// # Arguments
/// * `reader` - The capture file, one `CaptureEvent` per line.
///
/// # Returns
/// An iterator over the reshaped records.
pub fn reshape_capture<R: BufRead>(reader: R) -> impl Iterator<Item = Result<ReshapedRecord>> {
    reader
        .lines()
        .enumerate()
        .filter(|(_, line)| !matches!(line, Ok(l) if l.trim().is_empty()))
        .map(|(i, line)| {
            reshape_line(line).map_err(|e| {
                warn!("capture line {} failed: {e}", i + 1);
                MonitorErr::Line {
                    line: i + 1,
                    source: Box::new(e),
                }
            })
        })
}

fn reshape_line(line: std::io::Result<String>) -> Result<ReshapedRecord> {
    let event: CaptureEvent = serde_json::from_str(&line?).map_err(|source| MonitorErr::Json {
        payload: Payload::Event,
        source,
    })?;

    preprocess_handler(&event.capture_data)
}
