use serde::{Deserialize, Serialize};

const JSON_CONTENT_TYPE: &str = "application/json";
const JSON_ENCODING: &str = "JSON";

/// One side of a captured request/response pair, as the endpoint logged it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureData {
    #[serde(default)]
    pub observed_content_type: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    /// The serialized payload text.
    pub data: String,
    #[serde(default)]
    pub encoding: Option<String>,
}

impl CaptureData {
    fn json(mode: &str, data: impl Into<String>) -> Self {
        Self {
            observed_content_type: Some(JSON_CONTENT_TYPE.into()),
            mode: Some(mode.into()),
            data: data.into(),
            encoding: Some(JSON_ENCODING.into()),
        }
    }
}

/// One logged request/response pair from a deployed model endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceRecord {
    pub endpoint_input: CaptureData,
    pub endpoint_output: CaptureData,
}

impl InferenceRecord {
    /// Creates a record out of two JSON payloads.
    ///
    /// # Arguments
    /// * `input` - The request body, e.g. `[1, 2, 3]`.
    /// * `output` - The response body, e.g. `{"predictions": [[0.5]]}`.
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            endpoint_input: CaptureData::json("INPUT", input),
            endpoint_output: CaptureData::json("OUTPUT", output),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMetadata {
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub inference_time: Option<String>,
}

/// A single line of a data capture file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureEvent {
    pub capture_data: InferenceRecord,
    #[serde(default)]
    pub event_metadata: EventMetadata,
    #[serde(default)]
    pub event_version: Option<String>,
}
