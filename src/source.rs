use crate::error::AveragerError;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// A raw `"label;unit"` key with its samples, in the order they should be fed.
pub type SampleEntry = (String, Vec<Value>);

pub trait SampleSource {
    fn entries(&self) -> Result<Vec<SampleEntry>, AveragerError>;
}

static EMBEDDED_SAMPLES: Lazy<Value> = Lazy::new(|| {
    json!({
        "girls;kg": [40, 41, 42, 43, 44, 54],
        "girls;m": [1.5, 1.6, 1.8, 1.5, 1.45, 1.6],
        "boys;kg": [50, 51, 62, 53, 54, 54],
        "boys;m": [1.6, 1.8, 1.8, 1.7, 1.55, 1.6],
    })
});

/// Heights and weights of boys and girls, used when no input file is given.
pub struct EmbeddedSource;

impl SampleSource for EmbeddedSource {
    fn entries(&self) -> Result<Vec<SampleEntry>, AveragerError> {
        entries_from_value(&EMBEDDED_SAMPLES)
    }
}

pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }
}

impl SampleSource for JsonFileSource {
    fn entries(&self) -> Result<Vec<SampleEntry>, AveragerError> {
        debug!(path = %self.path.display(), "reading samples");
        let content = fs::read_to_string(&self.path)?;
        let value: Value = serde_json::from_str(&content)?;
        entries_from_value(&value)
    }
}

fn entries_from_value(value: &Value) -> Result<Vec<SampleEntry>, AveragerError> {
    let object = value
        .as_object()
        .ok_or_else(|| AveragerError::InvalidInput("expected an object of sample arrays".to_string()))?;

    let mut entries = Vec::with_capacity(object.len());
    for (key, samples) in object {
        let samples = samples
            .as_array()
            .ok_or_else(|| AveragerError::InvalidInput(samples.to_string()).in_group(key))?;
        entries.push((key.clone(), samples.clone()));
    }
    Ok(entries)
}
