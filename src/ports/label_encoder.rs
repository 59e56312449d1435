//! Label Encoder Port - bidirectional category/code mapping.
//!
//! Encoders are fixed at training time. Unseen labels and unknown codes are
//! errors; nothing is ever coerced to a default.

/// Errors that can occur while encoding or decoding a category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("{column} contains previously unseen label: '{label}'")]
    UnseenLabel { column: String, label: String },

    #[error("{column} has no label for code {code} ({classes} known classes)")]
    UnknownCode {
        column: String,
        code: i64,
        classes: usize,
    },

    #[error("no label encoder for column '{0}'")]
    MissingColumn(String),
}

/// Port for a single fitted label encoder.
pub trait LabelEncoder: Send + Sync {
    /// Column this encoder was fitted on.
    fn column(&self) -> &str;

    /// Known classes, ordered by code.
    fn classes(&self) -> &[String];

    /// Maps a category string to its code.
    ///
    /// # Errors
    /// Returns `EncodingError::UnseenLabel` for a label absent at training time.
    fn encode(&self, label: &str) -> Result<i64, EncodingError>;

    /// Maps a code back to its category string.
    ///
    /// # Errors
    /// Returns `EncodingError::UnknownCode` for a code with no class.
    fn decode(&self, code: i64) -> Result<String, EncodingError>;
}

/// Port for a keyed collection of encoders, one per categorical column.
pub trait LabelEncoders: Send + Sync {
    /// Returns the encoder fitted on `column`.
    ///
    /// # Errors
    /// Returns `EncodingError::MissingColumn` if no such encoder exists.
    fn encoder(&self, column: &str) -> Result<&dyn LabelEncoder, EncodingError>;

    fn encode(&self, column: &str, label: &str) -> Result<i64, EncodingError> {
        self.encoder(column)?.encode(label)
    }

    fn decode(&self, column: &str, code: i64) -> Result<String, EncodingError> {
        self.encoder(column)?.decode(code)
    }
}
