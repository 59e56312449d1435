//! Typed feature vectors.
//!
//! Each model was trained on columns in a fixed order. These builders turn
//! raw answers into named fields first and flatten them into a row only at
//! the model boundary, so the column order lives in exactly one place.

use super::PredictionError;
use crate::domain::dialogue::{field, Answers};
use crate::ports::LabelEncoders;

/// Parses the raw answer for `name` as a finite float.
fn parse_number(answers: &Answers, name: &str) -> Result<f64, PredictionError> {
    let raw = answers
        .get(name)
        .ok_or_else(|| PredictionError::missing_field(name))?;
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| PredictionError::invalid_number(name, raw))?;
    if !value.is_finite() {
        return Err(PredictionError::non_finite(name, raw));
    }
    Ok(value)
}

/// Parses like [`parse_number`], then drops the fractional part.
fn parse_truncated(answers: &Answers, name: &str) -> Result<i64, PredictionError> {
    parse_number(answers, name).map(|value| value.trunc() as i64)
}

fn category<'a>(answers: &'a Answers, name: &str) -> Result<&'a str, PredictionError> {
    answers
        .get(name)
        .ok_or_else(|| PredictionError::missing_field(name))
}

/// Inputs of the crop model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropFeatures {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph_value: f64,
    pub rainfall: f64,
}

impl CropFeatures {
    /// Parses every field; the first failure aborts.
    pub fn from_answers(answers: &Answers) -> Result<Self, PredictionError> {
        Ok(Self {
            nitrogen: parse_number(answers, field::NITROGEN)?,
            phosphorus: parse_number(answers, field::PHOSPHORUS)?,
            potassium: parse_number(answers, field::POTASSIUM)?,
            temperature: parse_number(answers, field::TEMPERATURE)?,
            humidity: parse_number(answers, field::HUMIDITY)?,
            ph_value: parse_number(answers, field::PH_VALUE)?,
            rainfall: parse_number(answers, field::RAINFALL)?,
        })
    }

    /// Row in training column order.
    pub fn to_row(&self) -> Vec<f64> {
        vec![
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.temperature,
            self.humidity,
            self.ph_value,
            self.rainfall,
        ]
    }
}

/// Fertilizer answers after numeric parsing, before category encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FertilizerInputs {
    pub temperature: i64,
    pub humidity: i64,
    pub moisture: i64,
    pub soil_type: String,
    pub crop: String,
    pub nitrogen: i64,
    pub potassium: i64,
    pub phosphorus: i64,
}

impl FertilizerInputs {
    /// Parses the numeric fields and truncates them to integers.
    pub fn from_answers(answers: &Answers) -> Result<Self, PredictionError> {
        let temperature = parse_truncated(answers, field::TEMPERATURE)?;
        let humidity = parse_truncated(answers, field::HUMIDITY)?;
        let moisture = parse_truncated(answers, field::MOISTURE)?;
        let nitrogen = parse_truncated(answers, field::NITROGEN)?;
        let potassium = parse_truncated(answers, field::POTASSIUM)?;
        let phosphorus = parse_truncated(answers, field::PHOSPHORUS)?;

        Ok(Self {
            temperature,
            humidity,
            moisture,
            soil_type: category(answers, field::SOIL_TYPE)?.to_string(),
            crop: category(answers, field::CROP)?.to_string(),
            nitrogen,
            potassium,
            phosphorus,
        })
    }

    /// Replaces the category strings with their training-time codes.
    ///
    /// # Errors
    /// Fails on any category the encoders have never seen.
    pub fn encode(
        &self,
        encoders: &dyn LabelEncoders,
    ) -> Result<FertilizerFeatures, PredictionError> {
        let soil_type_code = encoders.encode(field::SOIL_TYPE, &self.soil_type)?;
        let crop_code = encoders.encode(field::CROP, &self.crop)?;

        Ok(FertilizerFeatures {
            temperature: self.temperature,
            humidity: self.humidity,
            moisture: self.moisture,
            soil_type_code,
            crop_code,
            nitrogen: self.nitrogen,
            potassium: self.potassium,
            phosphorus: self.phosphorus,
        })
    }
}

/// Inputs of the fertilizer model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FertilizerFeatures {
    pub temperature: i64,
    pub humidity: i64,
    pub moisture: i64,
    pub soil_type_code: i64,
    pub crop_code: i64,
    pub nitrogen: i64,
    pub potassium: i64,
    pub phosphorus: i64,
}

impl FertilizerFeatures {
    /// Row in training column order.
    pub fn to_row(&self) -> Vec<f64> {
        [
            self.temperature,
            self.humidity,
            self.moisture,
            self.soil_type_code,
            self.crop_code,
            self.nitrogen,
            self.potassium,
            self.phosphorus,
        ]
        .iter()
        .map(|&value| value as f64)
        .collect()
    }
}
