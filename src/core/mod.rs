// Core pipeline exports
pub mod features;
pub mod model;
pub mod predictor;
pub mod scaler;

pub use features::{build_features, estimate_fare};
pub use model::{LogisticModel, SURVIVED_CLASS};
pub use predictor::Predictor;
pub use scaler::StandardScaler;
