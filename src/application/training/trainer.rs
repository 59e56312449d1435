//! Fits a nearest-neighbour model and its encoders from a dataset.

use ndarray::{Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::Path;
use tracing::info;

use super::{ColumnKind, Dataset, TrainingError, TrainingPlan};
use crate::adapters::models::{EncoderSet, FittedLabelEncoder, NearestNeighbors};
use crate::config::TrainingConfig;
use crate::ports::LabelEncoders;

/// Everything a training run produces.
#[derive(Debug, Clone)]
pub struct TrainedArtifacts {
    pub model: NearestNeighbors,
    pub encoders: EncoderSet,
    /// Share of held-out rows with every target predicted correctly.
    pub accuracy: f64,
    pub train_rows: usize,
    pub test_rows: usize,
}

impl TrainedArtifacts {
    /// Writes the model and its encoders as two JSON artifacts.
    pub fn save(&self, model_path: &Path, encoders_path: &Path) -> Result<(), TrainingError> {
        self.model.save(model_path)?;
        self.encoders.save(encoders_path)?;
        info!(
            model = %model_path.display(),
            encoders = %encoders_path.display(),
            "saved trained artifacts"
        );
        Ok(())
    }
}

/// Feature matrix and label matrix, one row per dataset record.
struct EncodedTable {
    features: Array2<f64>,
    labels: Array2<i64>,
}

/// Trains a model following `plan` on `dataset`.
///
/// Encoders are fitted on the whole dataset, then a seeded shuffle holds out
/// `config.test_ratio` of the rows (at least one, never all) for scoring.
pub fn train(
    plan: &TrainingPlan,
    dataset: &Dataset,
    config: &TrainingConfig,
) -> Result<TrainedArtifacts, TrainingError> {
    if dataset.len() < 2 {
        return Err(TrainingError::TooFewRows(dataset.len()));
    }

    let feature_columns = plan
        .features
        .iter()
        .map(|c| dataset.column(&plan.headers_for(c.name)))
        .collect::<Result<Vec<_>, _>>()?;
    let target_columns = plan
        .targets
        .iter()
        .map(|&t| dataset.column(&plan.headers_for(t)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut encoders = EncoderSet::new();
    for name in plan.encoded_columns() {
        let column = dataset.column(&plan.headers_for(name))?;
        encoders.insert(FittedLabelEncoder::fit(name, dataset.values(column)));
    }

    let table = encode(plan, dataset, &encoders, &feature_columns, &target_columns)?;

    let mut order: Vec<usize> = (0..dataset.len()).collect();
    order.shuffle(&mut StdRng::seed_from_u64(config.seed));
    let (test, fit) = order.split_at(test_len(dataset.len(), config.test_ratio));

    let model = NearestNeighbors::fit(
        config.neighbors,
        plan.feature_names(),
        plan.target_names(),
        &table.features.select(Axis(0), fit),
        &table.labels.select(Axis(0), fit),
    )?;
    let accuracy = model.score(
        &table.features.select(Axis(0), test),
        &table.labels.select(Axis(0), test),
    )?;

    info!(
        plan = plan.name,
        train_rows = fit.len(),
        test_rows = test.len(),
        accuracy,
        "trained model"
    );

    Ok(TrainedArtifacts {
        model,
        encoders,
        accuracy,
        train_rows: fit.len(),
        test_rows: test.len(),
    })
}

/// Held-out row count: `ceil(rows * ratio)`, at least one, never all.
fn test_len(rows: usize, ratio: f64) -> usize {
    ((rows as f64 * ratio).ceil() as usize).clamp(1, rows - 1)
}

fn encode(
    plan: &TrainingPlan,
    dataset: &Dataset,
    encoders: &EncoderSet,
    feature_columns: &[usize],
    target_columns: &[usize],
) -> Result<EncodedTable, TrainingError> {
    let mut features = Vec::with_capacity(dataset.len() * feature_columns.len());
    let mut labels = Vec::with_capacity(dataset.len() * target_columns.len());

    for record in 0..dataset.len() {
        for (feature, &column) in plan.features.iter().zip(feature_columns) {
            let value = dataset.value(record, column);
            features.push(match feature.kind {
                ColumnKind::Numeric => parse_numeric(value, feature.name, record)?,
                ColumnKind::Categorical => encoders.encode(feature.name, value)? as f64,
            });
        }
        for (&target, &column) in plan.targets.iter().zip(target_columns) {
            labels.push(encoders.encode(target, dataset.value(record, column))?);
        }
    }

    Ok(EncodedTable {
        features: Array2::from_shape_vec((dataset.len(), feature_columns.len()), features)?,
        labels: Array2::from_shape_vec((dataset.len(), target_columns.len()), labels)?,
    })
}

fn parse_numeric(value: &str, column: &str, record: usize) -> Result<f64, TrainingError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| TrainingError::InvalidNumber {
            // Header is line 1.
            line: record + 2,
            column: column.to_string(),
            value: value.to_string(),
        })
}
