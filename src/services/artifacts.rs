use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::core::{LogisticModel, Predictor, StandardScaler};
use crate::models::FEATURE_NAMES;

/// Errors that can occur while loading model artifacts
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to read artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse artifact {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Artifact schema mismatch: {0}")]
    Schema(String),
}

/// On-disk logistic-regression artifact.
///
/// Coefficients are keyed by feature name so the file stays readable; the
/// loader resolves them into the training-time column order and rejects any
/// missing or unexpected key.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    pub model_type: String,
    pub classes: Vec<u8>,
    pub intercept: f64,
    pub coefficients: HashMap<String, f64>,
}

/// On-disk scaler artifact with per-field mean and scale
#[derive(Debug, Clone, Deserialize)]
pub struct ScalerArtifact {
    pub fields: Vec<String>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Loads and validates the pre-trained model and scaler.
///
/// Loading happens once at process start; a failure here is fatal and the
/// process refuses to start. The resulting predictor is immutable for the
/// process lifetime.
pub struct ArtifactStore {
    model: LogisticModel,
    scaler: StandardScaler,
}

impl ArtifactStore {
    pub fn load<P: AsRef<Path>>(model_path: P, scaler_path: P) -> Result<Self, ArtifactError> {
        let model_artifact: ModelArtifact = read_json(model_path.as_ref())?;
        let scaler_artifact: ScalerArtifact = read_json(scaler_path.as_ref())?;

        let model = build_model(&model_artifact)?;
        let scaler = build_scaler(&scaler_artifact)?;

        tracing::info!(
            "Loaded {} model ({} features) and scaler",
            model_artifact.model_type,
            FEATURE_NAMES.len()
        );

        Ok(Self { model, scaler })
    }

    pub fn into_predictor(self) -> Predictor {
        Predictor::new(self.model, self.scaler)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let contents = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| ArtifactError::Parse {
        path: path.display().to_string(),
        source,
    })
}

fn build_model(artifact: &ModelArtifact) -> Result<LogisticModel, ArtifactError> {
    if artifact.model_type != "logistic_regression" {
        return Err(ArtifactError::Schema(format!(
            "unsupported model type '{}'",
            artifact.model_type
        )));
    }

    if artifact.classes != [0, 1] {
        return Err(ArtifactError::Schema(format!(
            "expected classes [0, 1], found {:?}",
            artifact.classes
        )));
    }

    if artifact.coefficients.len() != FEATURE_NAMES.len() {
        return Err(ArtifactError::Schema(format!(
            "expected {} coefficients, found {}",
            FEATURE_NAMES.len(),
            artifact.coefficients.len()
        )));
    }

    let mut coefficients = [0.0; 12];
    for (slot, name) in coefficients.iter_mut().zip(FEATURE_NAMES.iter()) {
        *slot = *artifact
            .coefficients
            .get(*name)
            .ok_or_else(|| ArtifactError::Schema(format!("missing coefficient for '{}'", name)))?;
    }

    Ok(LogisticModel::new(coefficients, artifact.intercept))
}

fn build_scaler(artifact: &ScalerArtifact) -> Result<StandardScaler, ArtifactError> {
    if artifact.fields != ["Age", "Fare"] {
        return Err(ArtifactError::Schema(format!(
            "expected scaler fields [Age, Fare], found {:?}",
            artifact.fields
        )));
    }

    if artifact.mean.len() != 2 || artifact.scale.len() != 2 {
        return Err(ArtifactError::Schema(
            "scaler mean and scale must each have exactly 2 entries".to_string(),
        ));
    }

    if artifact.scale.iter().any(|s| *s == 0.0) {
        return Err(ArtifactError::Schema(
            "scaler scale entries must be non-zero".to_string(),
        ));
    }

    Ok(StandardScaler::new(
        [artifact.mean[0], artifact.mean[1]],
        [artifact.scale[0], artifact.scale[1]],
    ))
}
