//! Titanic API - survival prediction service
//!
//! This library serves a pre-trained logistic-regression classifier behind a
//! small HTTP API. The core is a deterministic feature-preparation pipeline
//! that maps a passenger profile onto the exact numeric feature row the model
//! was fit on.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{build_features, estimate_fare, LogisticModel, Predictor, StandardScaler};
pub use crate::models::{
    EmbarkedPort, FamilyType, FeatureVector, PassengerProfile, PredictionResult, Sex,
    FEATURE_NAMES,
};
