use crate::core::features::build_features;
use crate::core::model::{LogisticModel, SURVIVED_CLASS};
use crate::core::scaler::StandardScaler;
use crate::models::{PassengerProfile, PredictionResult, FEATURE_NAMES};

/// Stateless prediction pipeline: feature building, scaling, inference.
///
/// Holds the model and scaler loaded once at startup; the pipeline itself is
/// read-only and safe to share across workers.
#[derive(Debug, Clone)]
pub struct Predictor {
    model: LogisticModel,
    scaler: StandardScaler,
}

impl Predictor {
    pub fn new(model: LogisticModel, scaler: StandardScaler) -> Self {
        Self { model, scaler }
    }

    /// Run the full pipeline for one passenger profile.
    ///
    /// Calls the model's classification and probability-scoring operations
    /// exactly once each; the reported probability is the survived-class
    /// slot of the probability row.
    pub fn predict(&self, profile: &PassengerProfile) -> PredictionResult {
        let features = build_features(profile, &self.scaler);

        let prediction = self.model.predict(&features);
        let probability = self.model.predict_probability(&features);

        PredictionResult {
            prediction,
            survival_probability: probability[SURVIVED_CLASS],
        }
    }

    /// Number of feature columns the model expects
    pub fn feature_count(&self) -> usize {
        FEATURE_NAMES.len()
    }
}
