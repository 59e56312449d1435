//! Training plans: which columns feed which model.

use crate::domain::dialogue::{field, CROP_FIELDS, FERTILIZER_FIELDS};
use crate::domain::prediction::{FERTILIZER_NAME, VARIETY};

/// How a feature column is turned into a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    /// Label-encoded; the encoder is saved with the model.
    Categorical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureColumn {
    pub name: &'static str,
    pub kind: ColumnKind,
}

/// Feature and target layout for one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingPlan {
    pub name: &'static str,
    pub features: Vec<FeatureColumn>,
    pub targets: Vec<&'static str>,
    /// Alternative dataset headers, as `(column, header)`.
    pub aliases: Vec<(&'static str, &'static str)>,
}

impl TrainingPlan {
    /// Seven numeric soil and weather readings to crop, soil type and variety.
    pub fn crop() -> Self {
        Self {
            name: "crop",
            features: CROP_FIELDS
                .iter()
                .map(|&name| FeatureColumn {
                    name,
                    kind: ColumnKind::Numeric,
                })
                .collect(),
            targets: vec![field::CROP, field::SOIL_TYPE, VARIETY],
            aliases: Vec::new(),
        }
    }

    /// Field conditions plus soil type and crop to a fertilizer name.
    pub fn fertilizer() -> Self {
        Self {
            name: "fertilizer",
            features: FERTILIZER_FIELDS
                .iter()
                .map(|&name| FeatureColumn {
                    name,
                    kind: if name == field::SOIL_TYPE || name == field::CROP {
                        ColumnKind::Categorical
                    } else {
                        ColumnKind::Numeric
                    },
                })
                .collect(),
            targets: vec![FERTILIZER_NAME],
            aliases: vec![(field::CROP, "Crop_Type")],
        }
    }

    pub fn feature_names(&self) -> Vec<String> {
        self.features.iter().map(|c| c.name.to_string()).collect()
    }

    pub fn target_names(&self) -> Vec<String> {
        self.targets.iter().map(|t| t.to_string()).collect()
    }

    /// Headers accepted for `column`, canonical name first.
    pub fn headers_for(&self, column: &'static str) -> Vec<&'static str> {
        std::iter::once(column)
            .chain(
                self.aliases
                    .iter()
                    .filter(|(canonical, _)| *canonical == column)
                    .map(|(_, alias)| *alias),
            )
            .collect()
    }

    /// Categorical feature columns followed by every target column.
    pub fn encoded_columns(&self) -> Vec<&'static str> {
        self.features
            .iter()
            .filter(|c| c.kind == ColumnKind::Categorical)
            .map(|c| c.name)
            .chain(self.targets.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_plan_matches_crop_questionnaire() {
        let plan = TrainingPlan::crop();
        assert_eq!(plan.feature_names(), CROP_FIELDS.to_vec());
        assert!(plan.features.iter().all(|c| c.kind == ColumnKind::Numeric));
        assert_eq!(plan.target_names(), vec!["Crop", "Soil_Type", "Variety"]);
    }

    #[test]
    fn fertilizer_plan_encodes_soil_and_crop() {
        let plan = TrainingPlan::fertilizer();
        assert_eq!(plan.feature_names(), FERTILIZER_FIELDS.to_vec());
        assert_eq!(plan.encoded_columns(), vec!["Soil_Type", "Crop", "FertilizerName"]);
    }

    #[test]
    fn crop_type_header_is_an_alias_for_crop() {
        let plan = TrainingPlan::fertilizer();
        assert_eq!(plan.headers_for("Crop"), vec!["Crop", "Crop_Type"]);
        assert_eq!(plan.headers_for("Moisture"), vec!["Moisture"]);
    }
}
