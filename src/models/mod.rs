// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    EmbarkedPort, FamilyType, FeatureVector, PassengerProfile, PredictionResult, Sex,
    FEATURE_NAMES,
};
pub use requests::PredictRequest;
pub use responses::{ErrorResponse, HealthResponse, HomeResponse, PredictionResponse};
