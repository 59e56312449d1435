//! Questionnaire definitions.
//!
//! A questionnaire is the ordered list of fields the bot must collect before
//! it can run a model. Both instances are static and immutable.

use serde::{Deserialize, Serialize};

/// Field names, shared by the questionnaires and the feature builders.
pub mod field {
    pub const NITROGEN: &str = "Nitrogen";
    pub const PHOSPHORUS: &str = "Phosphorus";
    pub const POTASSIUM: &str = "Potassium";
    pub const TEMPERATURE: &str = "Temperature";
    pub const HUMIDITY: &str = "Humidity";
    pub const PH_VALUE: &str = "pH_Value";
    pub const RAINFALL: &str = "Rainfall";
    pub const MOISTURE: &str = "Moisture";
    pub const SOIL_TYPE: &str = "Soil_Type";
    pub const CROP: &str = "Crop";
}

/// Crop questionnaire fields, in collection and feature order.
pub const CROP_FIELDS: [&str; 7] = [
    field::NITROGEN,
    field::PHOSPHORUS,
    field::POTASSIUM,
    field::TEMPERATURE,
    field::HUMIDITY,
    field::PH_VALUE,
    field::RAINFALL,
];

/// Fertilizer questionnaire fields, in collection and feature order.
pub const FERTILIZER_FIELDS: [&str; 8] = [
    field::TEMPERATURE,
    field::HUMIDITY,
    field::MOISTURE,
    field::SOIL_TYPE,
    field::CROP,
    field::NITROGEN,
    field::POTASSIUM,
    field::PHOSPHORUS,
];

/// Which questionnaire is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireKind {
    Crop,
    Fertilizer,
}

impl QuestionnaireKind {
    /// Maps a main-menu selection to a questionnaire. Matching is exact.
    pub fn from_menu_choice(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Crop),
            "2" => Some(Self::Fertilizer),
            _ => None,
        }
    }

    /// The static definition for this kind.
    pub fn questionnaire(&self) -> &'static Questionnaire {
        match self {
            Self::Crop => &CROP_QUESTIONNAIRE,
            Self::Fertilizer => &FERTILIZER_QUESTIONNAIRE,
        }
    }
}

/// An ordered sequence of named fields.
#[derive(Debug, PartialEq, Eq)]
pub struct Questionnaire {
    kind: QuestionnaireKind,
    title: &'static str,
    /// Checked non-empty when the static is evaluated.
    first_field: &'static str,
    fields: &'static [&'static str],
}

pub static CROP_QUESTIONNAIRE: Questionnaire = Questionnaire {
    kind: QuestionnaireKind::Crop,
    title: "Crop Prediction",
    first_field: CROP_FIELDS[0],
    fields: &CROP_FIELDS,
};

pub static FERTILIZER_QUESTIONNAIRE: Questionnaire = Questionnaire {
    kind: QuestionnaireKind::Fertilizer,
    title: "Fertilizer Recommendation",
    first_field: FERTILIZER_FIELDS[0],
    fields: &FERTILIZER_FIELDS,
};

impl Questionnaire {
    pub fn kind(&self) -> QuestionnaireKind {
        self.kind
    }

    /// Human-readable name used in the selection message.
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// The field asked for right after selection.
    pub fn first_field(&self) -> &'static str {
        self.first_field
    }

    pub fn fields(&self) -> &'static [&'static str] {
        self.fields
    }

    /// Field at `index`, if the questionnaire is that long.
    pub fn field(&self, index: usize) -> Option<&'static str> {
        self.fields.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
