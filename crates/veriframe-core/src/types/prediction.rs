use serde::{Deserialize, Serialize};

/// Verdict returned by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// The image shows no sign of manipulation
    Authentic,
    /// The image appears to have been manipulated
    Tampered,
}

impl Label {
    /// Class index the model uses for this label
    #[must_use]
    pub const fn class_index(self) -> u8 {
        match self {
            Self::Authentic => 0,
            Self::Tampered => 1,
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authentic => write!(f, "Authentic"),
            Self::Tampered => write!(f, "Tampered"),
        }
    }
}

/// Response from POST /predict
///
/// Numeric ranges are taken as declared by the service; nothing here renormalizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted label
    #[serde(rename = "prediction")]
    pub label: Label,

    /// Class index as reported by the service
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    pub class_index: Option<u8>,

    /// Confidence of the predicted label, 0.0 to 1.0
    pub confidence: f64,

    /// Per-class probabilities
    pub probabilities: Probabilities,

    /// Raw model outputs before softmax
    #[serde(rename = "raw_logits")]
    pub raw_scores: RawScores,
}

impl PredictionResult {
    /// Returns true if the image was judged authentic
    #[must_use]
    pub fn is_authentic(&self) -> bool {
        self.label == Label::Authentic
    }

    /// Confidence as a percentage
    #[must_use]
    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }
}

/// Class probabilities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    /// Probability the image is authentic
    pub authentic: f64,
    /// Probability the image is tampered
    pub tampered: f64,
}

/// Raw per-class scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawScores {
    /// Score for class 0 (authentic)
    #[serde(rename = "class_0")]
    pub class0: f64,
    /// Score for class 1 (tampered)
    #[serde(rename = "class_1")]
    pub class1: f64,
}
