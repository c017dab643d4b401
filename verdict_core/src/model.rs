//! # Wire Model
//!
//! Request and response bodies of the `/predict` endpoint, plus the
//! [`RiskLevel`] the free-form `prediction` string resolves to.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /predict`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub message: String,
}

impl ClassifyRequest {
    pub fn new(message: impl Into<String>) -> Self {
        ClassifyRequest {
            message: message.into(),
        }
    }
}

/// Successful answer from the classifier.
///
/// The list fields may be missing or `null`; both deserialize as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Verdict text exactly as the backend sent it (e.g. "Suspicious")
    pub prediction: String,
    /// Certainty of the verdict, 0.0 to 1.0
    pub confidence: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reasons: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub highlighted_words: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub safe_signals: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ClassificationResult {
    /// Risk level for styling, or `None` when the prediction is not one we know
    pub fn risk_level(&self) -> Option<RiskLevel> {
        RiskLevel::parse(&self.prediction)
    }
}

/// Categorical verdict used to pick the panel style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RiskLevel {
    #[default]
    Safe,
    Suspicious,
    Dangerous,
}

impl RiskLevel {
    const ALL: &'static [RiskLevel] = &[
        RiskLevel::Safe,
        RiskLevel::Suspicious,
        RiskLevel::Dangerous,
    ];

    /// Case-insensitive match against the three known predictions
    pub fn parse(prediction: &str) -> Option<RiskLevel> {
        let normalized = prediction.to_lowercase();
        RiskLevel::ALL
            .iter()
            .copied()
            .find(|level| level.style_key() == normalized)
    }

    /// Lowercase key naming the panel style
    pub fn style_key(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Suspicious => "suspicious",
            RiskLevel::Dangerous => "dangerous",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "🛡️",
            RiskLevel::Suspicious => "⚠️",
            RiskLevel::Dangerous => "🚨",
        }
    }

    /// Accent color (RGB, 0.0-1.0) for the verdict card
    pub fn accent_rgb(&self) -> [f32; 3] {
        match self {
            RiskLevel::Safe => [0.13, 0.65, 0.42],
            RiskLevel::Suspicious => [0.93, 0.62, 0.11],
            RiskLevel::Dangerous => [0.86, 0.2, 0.24],
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Safe => write!(f, "Safe"),
            RiskLevel::Suspicious => write!(f, "Suspicious"),
            RiskLevel::Dangerous => write!(f, "Dangerous"),
        }
    }
}
