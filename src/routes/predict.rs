use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::Predictor;
use crate::models::{
    ErrorResponse, HealthResponse, HomeResponse, PredictRequest, PredictionResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub predictor: Predictor,
}

/// Configure all prediction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/health", web::get().to(health_check))
        .route("/predict", web::post().to(predict));
}

/// Root endpoint, kept for compatibility with the original API
async fn home() -> impl Responder {
    HttpResponse::Ok().json(HomeResponse {
        message: "Titanic survival API is Running".to_string(),
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_features: state.predictor.feature_count(),
        timestamp: chrono::Utc::now(),
    })
}

/// Predict survival endpoint
///
/// POST /predict
///
/// Request body:
/// ```json
/// {
///   "Age": 25,
///   "Pclass": 3,
///   "Sex": "male",
///   "Embarked": "S",
///   "FamilyType": "alone"
/// }
/// ```
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for predict request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = req.into_inner().into_profile();
    let result = state.predictor.predict(&profile);

    tracing::info!(
        "Prediction: class={}, survival_probability={:.4}",
        result.prediction,
        result.survival_probability
    );

    HttpResponse::Ok().json(PredictionResponse {
        prediction: result.prediction,
        survival_probability: result.survival_probability,
    })
}
