use crate::models::FeatureVector;

/// Index of the survived class in the probability row
pub const SURVIVED_CLASS: usize = 1;

/// Pre-trained binary logistic-regression classifier.
///
/// Coefficients are stored in the training-time column order (see
/// [`crate::models::FEATURE_NAMES`]); the artifact loader is responsible for
/// resolving named coefficients into that order before constructing this.
#[derive(Debug, Clone)]
pub struct LogisticModel {
    coefficients: [f64; 12],
    intercept: f64,
}

impl LogisticModel {
    pub fn new(coefficients: [f64; 12], intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Per-class probability row, ordered [did-not-survive, survived]
    pub fn predict_probability(&self, features: &FeatureVector) -> [f64; 2] {
        let p = sigmoid(self.decision_value(features));
        [1.0 - p, p]
    }

    /// Class label: 1 iff the survival probability is at least 0.5
    pub fn predict(&self, features: &FeatureVector) -> u8 {
        if self.predict_probability(features)[SURVIVED_CLASS] >= 0.5 {
            1
        } else {
            0
        }
    }

    fn decision_value(&self, features: &FeatureVector) -> f64 {
        let values = features.values();
        self.coefficients
            .iter()
            .zip(values.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

#[inline]
fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
