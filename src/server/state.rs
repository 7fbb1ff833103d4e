//! Application state management

use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::{Classifier, ForestArtifact, ModelError};

use super::ServerConfig;

/// Application state shared across handlers.
///
/// The classifier slot is written once before the listener binds; request
/// handlers only ever read it.
pub struct AppState {
    pub config: ServerConfig,
    classifier: RwLock<Option<Arc<dyn Classifier>>>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            classifier: RwLock::new(None),
        }
    }

    /// Load the serialized artifact from the configured path and install it.
    pub async fn load_classifier(&self) -> Result<(), ModelError> {
        let artifact = ForestArtifact::load(Path::new(&self.config.model_path))?;
        self.install_classifier(Arc::new(artifact)).await;
        Ok(())
    }

    /// Install a classifier implementation (the real artifact, or a test
    /// double).
    pub async fn install_classifier(&self, classifier: Arc<dyn Classifier>) {
        *self.classifier.write().await = Some(classifier);
    }

    pub async fn classifier(&self) -> Option<Arc<dyn Classifier>> {
        self.classifier.read().await.clone()
    }

    pub async fn model_loaded(&self) -> bool {
        self.classifier.read().await.is_some()
    }
}
