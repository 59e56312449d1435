//! Fitted label encoders.
//!
//! Classes are kept sorted and de-duplicated; a label's code is its index in
//! that order. This matches how the training pipeline assigns codes.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use super::artifact::{read_json, write_json, ArtifactError};
use crate::ports::{EncodingError, LabelEncoder, LabelEncoders};

/// A label encoder for one categorical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FittedLabelEncoder {
    column: String,
    classes: Vec<String>,
}

impl FittedLabelEncoder {
    /// Fits an encoder on every value observed in a column.
    pub fn fit<I, S>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classes: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        Self {
            column: column.into(),
            classes: classes.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl LabelEncoder for FittedLabelEncoder {
    fn column(&self) -> &str {
        &self.column
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn encode(&self, label: &str) -> Result<i64, EncodingError> {
        self.classes
            .binary_search_by(|class| class.as_str().cmp(label))
            .map(|index| index as i64)
            .map_err(|_| EncodingError::UnseenLabel {
                column: self.column.clone(),
                label: label.to_string(),
            })
    }

    fn decode(&self, code: i64) -> Result<String, EncodingError> {
        usize::try_from(code)
            .ok()
            .and_then(|index| self.classes.get(index))
            .cloned()
            .ok_or_else(|| EncodingError::UnknownCode {
                column: self.column.clone(),
                code,
                classes: self.classes.len(),
            })
    }
}

/// Encoders keyed by column name, persisted together as one artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncoderSet {
    encoders: BTreeMap<String, FittedLabelEncoder>,
}

impl EncoderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an encoder, replacing any previous one for the same column.
    pub fn insert(&mut self, encoder: FittedLabelEncoder) {
        self.encoders.insert(encoder.column.clone(), encoder);
    }

    pub fn get(&self, column: &str) -> Option<&FittedLabelEncoder> {
        self.encoders.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.encoders.keys().map(String::as_str)
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        read_json(path)
    }

    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        write_json(path, self)
    }
}

impl LabelEncoders for EncoderSet {
    fn encoder(&self, column: &str) -> Result<&dyn LabelEncoder, EncodingError> {
        self.get(column)
            .map(|encoder| encoder as &dyn LabelEncoder)
            .ok_or_else(|| EncodingError::MissingColumn(column.to_string()))
    }
}
