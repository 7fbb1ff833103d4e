//! Classifier abstraction and artifact loading

mod features;
mod forest;

pub use features::{CustomerFeatures, FEATURE_COUNT};
pub use forest::{ForestArtifact, TreeNode};

use ndarray::Array1;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Model artifact not found at {0}")]
    ArtifactNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Artifact deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Model has no fitted trees")]
    NotFitted,

    #[error("Expected {expected} features, got {actual}")]
    FeatureMismatch { expected: usize, actual: usize },

    #[error("Tree split references feature {feature_idx}, but the model has {n_features} features")]
    InvalidSplit { feature_idx: usize, n_features: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;

/// Hyperparameters baked into the artifact by the offline training run.
#[derive(Debug, Clone, Serialize)]
pub struct Hyperparameters {
    pub n_estimators: usize,
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    pub class_weight: Option<String>,
    pub random_state: Option<u64>,
}

/// Capability set of the loaded classifier.
///
/// Object-safe so request handlers can run against the real artifact or a
/// deterministic test double.
pub trait Classifier: Send + Sync {
    /// Predicted class label: 0 = no subscription, 1 = subscription.
    fn predict(&self, x: &Array1<f64>) -> Result<u8>;

    /// Probability distribution over {no, yes}.
    fn predict_proba(&self, x: &Array1<f64>) -> Result<[f64; 2]>;

    fn hyperparameters(&self) -> Hyperparameters;

    fn type_name(&self) -> &'static str;
}
