//! Decision-tree classifier stored as a flat node array.

use serde::{Deserialize, Serialize};

use super::{Classifier, InferenceError};

/// One node of the tree.
///
/// Split nodes reference children by index; leaves carry the predicted
/// class code and set `feature_index` to `-1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    /// Feature index used for the split; `-1` marks a leaf.
    pub feature_index: i32,
    /// Split threshold in feature units; `feature <= threshold` goes left.
    pub threshold: f32,
    /// Index of the left child, or `-1` on leaves.
    pub left: i32,
    /// Index of the right child, or `-1` on leaves.
    pub right: i32,
    /// Class code emitted when this node is a leaf; unused on split nodes.
    pub value: u32,
}

impl TreeNode {
    /// Whether this node terminates evaluation.
    pub fn is_leaf(&self) -> bool {
        self.feature_index < 0
    }
}

/// Binary decision-tree model over a fixed-width feature vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeModel {
    /// Model format version.
    pub model_version: i64,
    /// Number of `f32` values per feature vector.
    pub n_features: usize,
    /// Class codes this model may emit.
    pub classes: Vec<u32>,
    /// Flat node array; index 0 is the root, children always follow parents.
    pub nodes: Vec<TreeNode>,
}

impl TreeModel {
    /// Validate structural invariants of the model.
    ///
    /// Children must come after their parent in the node array, which also
    /// guarantees that evaluation terminates.
    pub fn validate(&self) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("model has no nodes".to_string());
        }
        if self.n_features == 0 {
            return Err("model expects zero features".to_string());
        }
        if self.classes.len() < 2 {
            return Err("model must declare at least 2 classes".to_string());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            if node.is_leaf() {
                if !self.classes.contains(&node.value) {
                    return Err(format!(
                        "leaf {idx} emits undeclared class code {}",
                        node.value
                    ));
                }
                continue;
            }
            if node.feature_index as usize >= self.n_features {
                return Err(format!(
                    "node {idx} splits on feature {} but the model has {} features",
                    node.feature_index, self.n_features
                ));
            }
            for (side, child) in [("left", node.left), ("right", node.right)] {
                if child <= idx as i32 || child as usize >= self.nodes.len() {
                    return Err(format!(
                        "node {idx} has out-of-order {side} child {child}"
                    ));
                }
            }
        }
        Ok(())
    }

    fn predict_code(&self, features: &[f32]) -> Result<u32, InferenceError> {
        let mut idx = 0usize;
        // validate() guarantees forward-only child links, so the walk is
        // bounded by the node count.
        for _ in 0..self.nodes.len() {
            let node = &self.nodes[idx];
            if node.is_leaf() {
                return Ok(node.value);
            }
            let value = features
                .get(node.feature_index as usize)
                .copied()
                .unwrap_or(0.0);
            idx = if value <= node.threshold {
                node.left as usize
            } else {
                node.right as usize
            };
        }
        Err(InferenceError::NoLeaf)
    }
}

impl Classifier for TreeModel {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[f32]) -> Result<u32, InferenceError> {
        if features.len() != self.n_features {
            return Err(InferenceError::BadShape {
                expected: self.n_features,
                actual: features.len(),
            });
        }
        self.predict_code(features)
    }
}
