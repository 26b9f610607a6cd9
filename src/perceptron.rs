//! # Perceptron
//!
//! A single-layer linear classifier trained with the perceptron learning rule.
//!
//! Each training iteration draws one sample at random, thresholds the dot product of the
//! weights and the sample's features with the unit-step function, and nudges the weights
//! by `learning_rate * (expected - predicted) * features`.
//!
//! The random source is injected, so a seeded [`rand::rngs::StdRng`] makes a run
//! reproducible.

use rand::Rng;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Learning rate used by the OR demo.
pub const DEFAULT_LEARNING_RATE: f64 = 0.2;

/// Iteration count used by the OR demo.
pub const DEFAULT_ITERATIONS: usize = 100;

/// Unit-step decision function: 0 for negative input, 1 otherwise.
pub fn unit_step(x: f64) -> u8 {
    if x < 0.0 { 0 } else { 1 }
}

/// A feature vector paired with its expected binary label.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub features: Vec<f64>,
    pub label: u8,
}

impl Sample {
    pub fn new(features: Vec<f64>, label: u8) -> Self {
        Self { features, label }
    }
}

/// The logical OR truth table.
///
/// Features are `[a, b, 1.0]`, the trailing constant being the bias input whose weight
/// moves the decision boundary.
pub fn or_truth_table() -> Vec<Sample> {
    vec![
        Sample::new(vec![0.0, 0.0, 1.0], 0),
        Sample::new(vec![0.0, 1.0, 1.0], 1),
        Sample::new(vec![1.0, 0.0, 1.0], 1),
        Sample::new(vec![1.0, 1.0, 1.0], 1),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    pub fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    /// `dim` weights drawn uniformly from [0, 1).
    pub fn random<R: Rng>(dim: usize, rng: &mut R) -> Self {
        Self((0..dim).map(|_| rng.random::<f64>()).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Dot product with `features`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FeatureLengthMismatch`] if the lengths differ.
    pub fn activation(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.0.len() {
            return Err(Error::FeatureLengthMismatch {
                expected: self.0.len(),
                found: features.len(),
            });
        }
        Ok(self.dot(features))
    }

    /// Predicted label for `features`.
    pub fn predict(&self, features: &[f64]) -> Result<u8> {
        self.activation(features).map(unit_step)
    }

    fn dot(&self, features: &[f64]) -> f64 {
        self.0.iter().zip(features).map(|(w, x)| w * x).sum()
    }

    /// `self += scale * features`, component-wise.
    fn add_scaled(&mut self, features: &[f64], scale: f64) {
        for (w, x) in self.0.iter_mut().zip(features) {
            *w += scale * x;
        }
    }
}

/// Trains `weights` in place on `samples` for `iterations` randomly drawn updates.
///
/// Inputs are validated before the first update; on error `weights` is left unchanged.
///
/// # Errors
///
/// - [`Error::EmptyTrainingSet`] if `samples` is empty
/// - [`Error::DimensionMismatch`] if any sample's length differs from the weights'
/// - [`Error::InvalidLabel`] if any sample's label is not 0 or 1
/// - [`Error::InvalidParameter`] if `learning_rate` is not a positive finite number
pub fn train<R: Rng>(
    samples: &[Sample],
    weights: &mut WeightVector,
    learning_rate: f64,
    iterations: usize,
    rng: &mut R,
) -> Result<()> {
    if samples.is_empty() {
        return Err(Error::EmptyTrainingSet);
    }
    for (index, sample) in samples.iter().enumerate() {
        if sample.features.len() != weights.len() {
            return Err(Error::DimensionMismatch {
                index,
                expected: weights.len(),
                found: sample.features.len(),
            });
        }
        if sample.label > 1 {
            return Err(Error::InvalidLabel {
                index,
                label: sample.label,
            });
        }
    }
    if !learning_rate.is_finite() || learning_rate <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "learning rate must be positive and finite, got {learning_rate}"
        )));
    }

    let mut corrections = 0usize;
    for iteration in 0..iterations {
        let sample = &samples[rng.random_range(0..samples.len())];

        let activation = weights.dot(&sample.features);
        let error = i32::from(sample.label) - i32::from(unit_step(activation));
        if error != 0 {
            weights.add_scaled(&sample.features, learning_rate * f64::from(error));
            corrections += 1;
            debug!(iteration, activation, error, weights = ?weights.as_slice(), "Updated weights");
        }
    }

    info!(iterations, corrections, weights = ?weights.as_slice(), "Training finished");
    Ok(())
}

/// Outcome of classifying one sample with trained weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub features: Vec<f64>,
    pub activation: f64,
    pub predicted: u8,
    pub expected: u8,
}

impl Prediction {
    pub fn is_correct(&self) -> bool {
        self.predicted == self.expected
    }
}

/// Classifies every sample with `weights`.
pub fn evaluate(samples: &[Sample], weights: &WeightVector) -> Result<Vec<Prediction>> {
    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let activation = weights.activation(&sample.features).map_err(|err| match err {
                Error::FeatureLengthMismatch { expected, found } => Error::DimensionMismatch {
                    index,
                    expected,
                    found,
                },
                other => other,
            })?;
            Ok(Prediction {
                features: sample.features.clone(),
                activation,
                predicted: unit_step(activation),
                expected: sample.label,
            })
        })
        .collect()
}
