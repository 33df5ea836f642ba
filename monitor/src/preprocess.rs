use log::debug;
use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::{Number, Value};

use crate::{MonitorErr, Payload, Result, record::InferenceRecord};

const FEATURE_PREFIX: &str = "feature";
const PREDICTION_KEY: &str = "prediction0";

/// A flat mapping of `feature0..featureN` followed by `prediction0`.
///
/// Keys keep the order they were inserted in, both when iterating and when serialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReshapedRecord {
    fields: Vec<(String, Number)>,
}

impl ReshapedRecord {
    pub fn get(&self, key: &str) -> Option<&Number> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Number)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for ReshapedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Flattens an inference record into its input features and its first prediction.
///
/// The input payload must be a JSON sequence of numbers, each becomes `feature<i>`. The output
/// payload must be a JSON object whose `predictions` holds a sequence of sequences, the value at
/// `[0][0]` becomes `prediction0`. The payload text is parsed as JSON whatever encoding the
/// record declares.
///
/// # Arguments
/// * `record` - The captured request/response pair.
///
/// # Returns
/// The reshaped record or an error describing the first malformed part, never a partial result.
pub fn preprocess_handler(record: &InferenceRecord) -> Result<ReshapedRecord> {
    let input = parse(&record.endpoint_input.data, Payload::Input)?;
    let output = parse(&record.endpoint_output.data, Payload::Output)?;

    let features = input.as_array().ok_or(MonitorErr::InputNotSequence)?;
    let mut fields = Vec::with_capacity(features.len() + 1);

    for (i, feature) in features.iter().enumerate() {
        let Value::Number(n) = feature else {
            return Err(MonitorErr::NonNumericFeature { index: i });
        };

        fields.push((format!("{FEATURE_PREFIX}{i}"), n.clone()));
    }

    let prediction = output
        .get("predictions")
        .ok_or(MonitorErr::MissingPredictions)?
        .get(0)
        .and_then(|row| row.get(0))
        .ok_or(MonitorErr::EmptyPredictions)?;

    let Value::Number(prediction) = prediction else {
        return Err(MonitorErr::NonNumericPrediction);
    };

    fields.push((PREDICTION_KEY.to_string(), prediction.clone()));

    debug!("reshaped record with {} features", features.len());
    Ok(ReshapedRecord { fields })
}

fn parse(data: &str, payload: Payload) -> Result<Value> {
    serde_json::from_str(data).map_err(|source| MonitorErr::Json { payload, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reshape(input: &str, output: &str) -> Result<ReshapedRecord> {
        preprocess_handler(&InferenceRecord::new(input, output))
    }

    #[test]
    fn keys_follow_input_order() {
        let record = reshape("[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]", r#"{"predictions": [[1]]}"#)
            .unwrap();

        let keys: Vec<_> = record.keys().collect();
        assert_eq!(keys.len(), 13);
        assert_eq!(keys[2], "feature2");
        assert_eq!(keys[10], "feature10");
        assert_eq!(keys[12], "prediction0");
    }

    #[test]
    fn serializes_in_order() {
        let record = reshape("[3, 1.5]", r#"{"predictions": [[0.25]]}"#).unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"feature0":3,"feature1":1.5,"prediction0":0.25}"#
        );
    }

    #[test]
    fn only_first_prediction_is_kept() {
        let record = reshape("[1]", r#"{"predictions": [[0.1, 0.2], [0.3]]}"#).unwrap();

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("prediction0").and_then(Number::as_f64), Some(0.1));
    }

    #[test]
    fn input_object_is_rejected() {
        let err = reshape(r#"{"instances": [1]}"#, r#"{"predictions": [[1]]}"#).unwrap_err();
        assert!(matches!(err, MonitorErr::InputNotSequence));
    }

    #[test]
    fn non_numeric_feature() {
        let err = reshape(r#"[1, "two", 3]"#, r#"{"predictions": [[1]]}"#).unwrap_err();
        assert!(matches!(err, MonitorErr::NonNumericFeature { index: 1 }));
    }

    #[test]
    fn malformed_output_text() {
        let err = reshape("[1]", "{predictions").unwrap_err();
        assert!(matches!(
            err,
            MonitorErr::Json {
                payload: Payload::Output,
                ..
            }
        ));
    }

    #[test]
    fn flat_predictions() {
        let err = reshape("[1]", r#"{"predictions": [0.4]}"#).unwrap_err();
        assert!(matches!(err, MonitorErr::EmptyPredictions));
    }

    #[test]
    fn non_numeric_prediction() {
        let err = reshape("[1]", r#"{"predictions": [[null]]}"#).unwrap_err();
        assert!(matches!(err, MonitorErr::NonNumericPrediction));
    }
}
