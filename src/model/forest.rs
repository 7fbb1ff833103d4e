//! Serialized random-forest artifact

use super::{Classifier, Hyperparameters, ModelError, Result};
use ndarray::Array1;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Decision tree node. Leaves carry the class label assigned at fit time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TreeNode {
    /// Leaf node with prediction value
    Leaf { value: f64, n_samples: usize },
    /// Internal node with split
    Split {
        feature_idx: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
        n_samples: usize,
    },
}

impl TreeNode {
    fn decide(&self, x: &Array1<f64>) -> Result<f64> {
        match self {
            TreeNode::Leaf { value, .. } => Ok(*value),
            TreeNode::Split {
                feature_idx,
                threshold,
                left,
                right,
                ..
            } => {
                let value = x.get(*feature_idx).copied().ok_or(ModelError::InvalidSplit {
                    feature_idx: *feature_idx,
                    n_features: x.len(),
                })?;
                if value <= *threshold {
                    left.decide(x)
                } else {
                    right.decide(x)
                }
            }
        }
    }

    /// Highest feature index referenced by any split under this node.
    fn max_split_feature(&self) -> Option<usize> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Split {
                feature_idx,
                left,
                right,
                ..
            } => {
                let mut max = *feature_idx;
                if let Some(m) = left.max_split_feature() {
                    max = max.max(m);
                }
                if let Some(m) = right.max_split_feature() {
                    max = max.max(m);
                }
                Some(max)
            }
        }
    }
}

/// Random-forest classifier loaded from a serde_json artifact produced by the
/// offline training pipeline. Never refitted in-process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestArtifact {
    /// Individual tree roots
    trees: Vec<TreeNode>,
    /// Number of trees
    pub n_estimators: usize,
    /// Maximum depth per tree
    pub max_depth: Option<usize>,
    /// Minimum samples to split
    pub min_samples_split: usize,
    /// Minimum samples in leaf
    pub min_samples_leaf: usize,
    /// Class weighting strategy used at fit time
    pub class_weight: Option<String>,
    /// Random state
    pub random_state: Option<u64>,
    /// Number of features the forest was fitted on
    pub n_features: usize,
}

impl ForestArtifact {
    pub fn from_trees(trees: Vec<TreeNode>, n_features: usize) -> Self {
        let n_estimators = trees.len();
        Self {
            trees,
            n_estimators,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            class_weight: None,
            random_state: None,
            n_features,
        }
    }

    /// Set maximum depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set minimum samples to split
    pub fn with_min_samples_split(mut self, min_samples: usize) -> Self {
        self.min_samples_split = min_samples;
        self
    }

    /// Set minimum samples in leaf
    pub fn with_min_samples_leaf(mut self, min_samples: usize) -> Self {
        self.min_samples_leaf = min_samples;
        self
    }

    /// Set class weighting strategy
    pub fn with_class_weight(mut self, class_weight: &str) -> Self {
        self.class_weight = Some(class_weight.to_string());
        self
    }

    /// Set random state
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    /// Load an artifact from a file. A missing path and a corrupt artifact
    /// are distinct failures.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ModelError::ArtifactNotFound(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path)?;
        let artifact: Self = serde_json::from_str(&json)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Reject artifacts whose splits reference features beyond the fitted
    /// feature count. Such a tree deserializes cleanly but can never be
    /// evaluated against a valid input row.
    pub fn validate(&self) -> Result<()> {
        for tree in &self.trees {
            if let Some(feature_idx) = tree.max_split_feature() {
                if feature_idx >= self.n_features {
                    return Err(ModelError::InvalidSplit {
                        feature_idx,
                        n_features: self.n_features,
                    });
                }
            }
        }
        Ok(())
    }

    /// Save the artifact to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn check_input(&self, x: &Array1<f64>) -> Result<()> {
        if self.trees.is_empty() {
            return Err(ModelError::NotFitted);
        }
        if x.len() != self.n_features {
            return Err(ModelError::FeatureMismatch {
                expected: self.n_features,
                actual: x.len(),
            });
        }
        Ok(())
    }
}

impl Classifier for ForestArtifact {
    fn predict(&self, x: &Array1<f64>) -> Result<u8> {
        let [p_no, p_yes] = self.predict_proba(x)?;
        Ok(if p_yes > p_no { 1 } else { 0 })
    }

    fn predict_proba(&self, x: &Array1<f64>) -> Result<[f64; 2]> {
        self.check_input(x)?;

        // Vote fractions over the binary classes
        let votes: Vec<f64> = self
            .trees
            .par_iter()
            .map(|tree| tree.decide(x))
            .collect::<Result<_>>()?;
        let yes_votes = votes.iter().filter(|vote| **vote >= 0.5).count();
        let p_yes = yes_votes as f64 / self.trees.len() as f64;

        Ok([1.0 - p_yes, p_yes])
    }

    fn hyperparameters(&self) -> Hyperparameters {
        Hyperparameters {
            n_estimators: self.n_estimators,
            max_depth: self.max_depth,
            min_samples_split: self.min_samples_split,
            min_samples_leaf: self.min_samples_leaf,
            class_weight: self.class_weight.clone(),
            random_state: self.random_state,
        }
    }

    fn type_name(&self) -> &'static str {
        "RandomForestClassifier"
    }
}
