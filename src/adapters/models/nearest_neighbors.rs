//! k-nearest-neighbour classifier.
//!
//! Features are standardised with the training mean and standard deviation;
//! each target is predicted by majority vote among the `k` closest training
//! rows. Vote ties go to the smaller code, distance ties to the earlier row.

use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::artifact::{read_json, write_json, ArtifactError};
use crate::ports::{Classifier, ModelError};

/// Per-feature standardisation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureStats {
    pub mean: Array1<f64>,
    pub std: Array1<f64>,
}

impl FeatureStats {
    fn fit(samples: &Array2<f64>) -> Result<Self, ModelError> {
        let mean = samples
            .mean_axis(Axis(0))
            .ok_or(ModelError::EmptyTrainingSet)?;
        // Constant columns carry no distance information; leave them unscaled.
        let std = samples
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s > 0.0 { s } else { 1.0 });

        Ok(Self { mean, std })
    }

    fn check(&self, width: usize) -> Result<(), ModelError> {
        if self.mean.len() != width || self.std.len() != width {
            return Err(ModelError::Inconsistent(format!(
                "statistics hold {} means and {} deviations for {} features",
                self.mean.len(),
                self.std.len(),
                width
            )));
        }
        if self.std.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(ModelError::Inconsistent(
                "standard deviations must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn apply(&self, x: &Array2<f64>) -> Result<Array2<f64>, ModelError> {
        if x.ncols() != self.mean.len() || x.ncols() != self.std.len() {
            return Err(ModelError::FeatureCount {
                expected: self.mean.len(),
                actual: x.ncols(),
            });
        }
        Ok((x - &self.mean) / &self.std)
    }
}

/// A fitted multi-output nearest-neighbour model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestNeighbors {
    k: usize,
    feature_names: Vec<String>,
    target_names: Vec<String>,
    stats: FeatureStats,
    /// Standardised training rows.
    samples: Array2<f64>,
    /// One row of target codes per sample.
    labels: Array2<i64>,
}

impl NearestNeighbors {
    /// Fits the model on `samples` with one label row per sample.
    ///
    /// # Errors
    /// Rejects an empty training set, `k == 0`, a sample matrix whose width
    /// differs from `feature_names` and label shapes that do not match.
    pub fn fit(
        k: usize,
        feature_names: Vec<String>,
        target_names: Vec<String>,
        samples: &Array2<f64>,
        labels: &Array2<i64>,
    ) -> Result<Self, ModelError> {
        check_shapes(k, &feature_names, &target_names, samples, labels)?;

        let stats = FeatureStats::fit(samples)?;
        let samples = stats.apply(samples)?;

        Ok(Self {
            k,
            feature_names,
            target_names,
            stats,
            samples,
            labels: labels.clone(),
        })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn sample_count(&self) -> usize {
        self.samples.nrows()
    }

    /// Fraction of rows whose every target is predicted correctly.
    pub fn score(&self, samples: &Array2<f64>, labels: &Array2<i64>) -> Result<f64, ModelError> {
        if samples.nrows() != labels.nrows() {
            return Err(ModelError::LabelCountMismatch {
                samples: samples.nrows(),
                labels: labels.nrows(),
            });
        }
        if samples.nrows() == 0 {
            return Ok(0.0);
        }

        let predicted = self.predict_codes(samples)?;
        if predicted.ncols() != labels.ncols() {
            return Err(ModelError::Inconsistent(format!(
                "scored against {} label columns, model predicts {}",
                labels.ncols(),
                predicted.ncols()
            )));
        }
        let correct = predicted
            .outer_iter()
            .zip(labels.outer_iter())
            .filter(|(got, want)| got == want)
            .count();
        Ok(correct as f64 / samples.nrows() as f64)
    }

    /// Reads a model artifact and checks it is internally consistent.
    ///
    /// # Errors
    /// Returns `ArtifactError::Invalid` for a well-formed file whose shapes
    /// disagree with each other.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let model: Self = read_json(path)?;
        model.check().map_err(|e| ArtifactError::invalid(path, e))?;
        Ok(model)
    }

    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        write_json(path, self)
    }

    fn check(&self) -> Result<(), ModelError> {
        check_shapes(
            self.k,
            &self.feature_names,
            &self.target_names,
            &self.samples,
            &self.labels,
        )?;
        self.stats.check(self.feature_names.len())
    }

    fn predict_codes(&self, x: &Array2<f64>) -> Result<Array2<i64>, ModelError> {
        let points = self.stats.apply(x)?;
        let mut codes = Array2::zeros((points.nrows(), self.target_names.len()));

        for (point, mut row) in points.outer_iter().zip(codes.outer_iter_mut()) {
            let neighbours = self.nearest(point);
            for (target, code) in row.iter_mut().enumerate() {
                *code = self.vote(&neighbours, target)?;
            }
        }
        Ok(codes)
    }

    /// Indices of the `k` closest samples, nearest first.
    fn nearest(&self, point: ArrayView1<f64>) -> Vec<usize> {
        let diff = &self.samples - &point;
        let distances = (&diff * &diff).sum_axis(Axis(1));

        let mut order: Vec<usize> = (0..distances.len()).collect();
        order.sort_by(|&a, &b| distances[a].total_cmp(&distances[b]).then(a.cmp(&b)));
        order.truncate(self.k);
        order
    }

    fn vote(&self, neighbours: &[usize], target: usize) -> Result<i64, ModelError> {
        let mut votes: BTreeMap<i64, usize> = BTreeMap::new();
        for &index in neighbours {
            let code = self.labels.get((index, target)).ok_or_else(|| {
                ModelError::Inconsistent(format!("no label for sample {} target {}", index, target))
            })?;
            *votes.entry(*code).or_default() += 1;
        }

        // Codes iterate in ascending order, so a strict `>` keeps the smaller one.
        let mut winner: Option<(i64, usize)> = None;
        for (code, count) in votes {
            if winner.map_or(true, |(_, best)| count > best) {
                winner = Some((code, count));
            }
        }
        winner.map(|(code, _)| code).ok_or(ModelError::EmptyPrediction)
    }
}

impl Classifier for NearestNeighbors {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn target_names(&self) -> &[String] {
        &self.target_names
    }

    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<Vec<i64>>, ModelError> {
        let x = to_matrix(rows, self.feature_names.len())?;
        let codes = self.predict_codes(&x)?;
        Ok(codes.outer_iter().map(|row| row.to_vec()).collect())
    }
}

fn check_shapes(
    k: usize,
    feature_names: &[String],
    target_names: &[String],
    samples: &Array2<f64>,
    labels: &Array2<i64>,
) -> Result<(), ModelError> {
    if k == 0 {
        return Err(ModelError::InvalidNeighbors);
    }
    if samples.nrows() == 0 {
        return Err(ModelError::EmptyTrainingSet);
    }
    if samples.ncols() != feature_names.len() {
        return Err(ModelError::FeatureCount {
            expected: feature_names.len(),
            actual: samples.ncols(),
        });
    }
    if labels.nrows() != samples.nrows() {
        return Err(ModelError::LabelCountMismatch {
            samples: samples.nrows(),
            labels: labels.nrows(),
        });
    }
    if labels.ncols() != target_names.len() {
        return Err(ModelError::Inconsistent(format!(
            "{} label columns for {} targets",
            labels.ncols(),
            target_names.len()
        )));
    }
    Ok(())
}

/// Packs rows into a matrix, rejecting any row of the wrong width.
fn to_matrix(rows: &[Vec<f64>], width: usize) -> Result<Array2<f64>, ModelError> {
    if let Some(row) = rows.iter().find(|row| row.len() != width) {
        return Err(ModelError::FeatureCount {
            expected: width,
            actual: row.len(),
        });
    }
    Array2::from_shape_vec((rows.len(), width), rows.concat())
        .map_err(|e| ModelError::Inconsistent(e.to_string()))
}
