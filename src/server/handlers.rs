//! HTTP request handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::model::{CustomerFeatures, Hyperparameters, FEATURE_COUNT};

use super::error::{Result, ServerError};
use super::state::AppState;

/// Prediction output for a single customer.
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub prediction: u8,
    pub probability_no: f64,
    pub probability_yes: f64,
    pub confidence: f64,
    pub recommendation: &'static str,
}

/// Metadata for the loaded classifier.
#[derive(Debug, Serialize)]
pub struct ModelInfoResponse {
    pub model_type: &'static str,
    #[serde(flatten)]
    pub hyperparameters: Hyperparameters,
    pub expected_features: usize,
    pub model_path: String,
}

/// Recommendation band for a (label, probability) pair.
fn recommendation(prediction: u8, probability_no: f64, probability_yes: f64) -> &'static str {
    if prediction == 1 {
        if probability_yes > 0.6 {
            "High confidence - Highly likely to subscribe. Recommend contacting."
        } else {
            "Moderate confidence - Likely to subscribe. Recommend contacting."
        }
    } else if probability_no > 0.8 {
        "High confidence - Unlikely to subscribe. Consider deprioritizing."
    } else {
        "Moderate confidence - May or may not subscribe. Use caution."
    }
}

/// Report liveness. Always 200, even when the classifier is absent; callers
/// must inspect `model_loaded`.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "model_loaded": state.model_loaded().await,
        "api_version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Predict whether a customer will subscribe to a term deposit.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CustomerFeatures>, JsonRejection>,
) -> Result<Json<PredictionResponse>> {
    let Json(customer) = payload.map_err(|e| ServerError::InvalidInput(e.body_text()))?;

    let classifier = state.classifier().await.ok_or(ServerError::ModelNotLoaded)?;

    let x = customer.to_vector();
    let prediction = classifier
        .predict(&x)
        .map_err(|e| ServerError::PredictionFailed(e.to_string()))?;
    let [probability_no, probability_yes] = classifier
        .predict_proba(&x)
        .map_err(|e| ServerError::PredictionFailed(e.to_string()))?;
    let confidence = probability_no.max(probability_yes);

    info!(prediction, confidence, "Prediction served");

    Ok(Json(PredictionResponse {
        prediction,
        probability_no,
        probability_yes,
        confidence,
        recommendation: recommendation(prediction, probability_no, probability_yes),
    }))
}

/// Describe the loaded classifier and its fit-time hyperparameters.
pub async fn model_info(State(state): State<Arc<AppState>>) -> Result<Json<ModelInfoResponse>> {
    let classifier = state.classifier().await.ok_or(ServerError::ModelNotLoaded)?;

    Ok(Json(ModelInfoResponse {
        model_type: classifier.type_name(),
        hyperparameters: classifier.hyperparameters(),
        expected_features: FEATURE_COUNT,
        model_path: state.config.model_path.clone(),
    }))
}
