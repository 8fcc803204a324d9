//! Key-path access into assessment evidence

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Failure to read a value out of [`Evidence`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvidenceError {
    #[error("evidence not found: {0}")]
    NotFound(String),

    #[error("evidence {path} has an unexpected type: {message}")]
    TypeMismatch { path: String, message: String },
}

/// Server-defined nested structure explaining an assessment.
///
/// The client never interprets evidence; it only addresses it by dotted key
/// paths such as `"device.location.distance_to_home"`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Evidence(Map<String, Value>);

impl Evidence {
    /// Wrap a decoded evidence object.
    #[must_use]
    pub const fn new(values: Map<String, Value>) -> Self {
        Self(values)
    }

    /// True when the server sent no evidence.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw evidence object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Unwrap the evidence object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Raw value at `path`. Explicit `null` counts as absent.
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next().filter(|s| !s.is_empty())?;
        let mut current = self.0.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        (!current.is_null()).then_some(current)
    }

    /// Value at `path` decoded into `T`.
    ///
    /// # Errors
    /// [`EvidenceError::NotFound`] when any segment is missing or not an
    /// object, [`EvidenceError::TypeMismatch`] when the value does not decode
    /// as `T`.
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, EvidenceError> {
        let value = self.get_path(path).ok_or_else(|| EvidenceError::NotFound(path.to_string()))?;
        T::deserialize(value).map_err(|e| EvidenceError::TypeMismatch {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Integer value at `path`. Floats are accepted when they are integral.
    pub fn get_i64(&self, path: &str) -> Result<i64, EvidenceError> {
        let value = self.get_path(path).ok_or_else(|| EvidenceError::NotFound(path.to_string()))?;
        let mismatch = |message: &str| EvidenceError::TypeMismatch {
            path: path.to_string(),
            message: message.to_string(),
        };

        if let Some(n) = value.as_i64() {
            return Ok(n);
        }
        let float = value.as_f64().ok_or_else(|| mismatch("not a number"))?;
        integral(float).ok_or_else(|| mismatch("not an integer"))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value <= i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then(|| value as i64)
}

impl From<Map<String, Value>> for Evidence {
    fn from(values: Map<String, Value>) -> Self {
        Self(values)
    }
}
