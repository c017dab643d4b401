//! # Verdict Rendering Rules
//!
//! Turns a [`ClassificationResult`] into a [`VerdictView`]: everything a
//! front-end needs to draw the result panel, fully populated before the panel
//! is made visible.

use std::time::Duration;

use crate::animation;
use crate::model::{ClassificationResult, RiskLevel};

/// One line in the reasons list
#[derive(Debug, Clone, PartialEq)]
pub struct ReasonLine {
    pub text: String,
    /// Delay after the panel appears before this line fades in
    pub appear_after: Duration,
}

/// Fully resolved content of the result panel
#[derive(Debug, Clone, PartialEq)]
pub struct VerdictView {
    /// Style applied to the panel (unknown predictions resolve to `Safe`)
    pub level: RiskLevel,
    /// Prediction text exactly as returned by the backend
    pub label: String,
    /// False when `label` did not match a known prediction
    pub recognized: bool,
    /// round(confidence * 100)
    pub confidence_pct: i64,
    pub reasons: Vec<ReasonLine>,
    pub highlighted_words: Vec<String>,
    pub safe_signals: Vec<String>,
}

impl VerdictView {
    /// Apply the render rules to a classifier result
    pub fn from_result(result: &ClassificationResult) -> Self {
        let parsed = result.risk_level();
        if parsed.is_none() {
            tracing::warn!(
                prediction = %result.prediction,
                "unrecognized prediction, using safe style"
            );
        }

        let reasons = result
            .reasons
            .iter()
            .enumerate()
            .map(|(index, reason)| ReasonLine {
                text: reason.clone(),
                appear_after: animation::reason_delay(index),
            })
            .collect();

        VerdictView {
            level: parsed.unwrap_or_default(),
            label: result.prediction.clone(),
            recognized: parsed.is_some(),
            confidence_pct: confidence_percent(result.confidence),
            reasons,
            highlighted_words: result.highlighted_words.clone(),
            safe_signals: result.safe_signals.clone(),
        }
    }

    pub fn style_key(&self) -> &'static str {
        self.level.style_key()
    }

    pub fn icon(&self) -> &'static str {
        self.level.icon()
    }

    /// Percentage as displayed, e.g. "87%"
    pub fn confidence_text(&self) -> String {
        format!("{}%", self.confidence_pct)
    }

    /// Width the confidence bar animates to, 0.0-1.0
    pub fn bar_target(&self) -> f32 {
        (self.confidence_pct as f32 / 100.0).clamp(0.0, 1.0)
    }

    /// The highlight region is hidden when there is nothing to tag
    pub fn highlights_visible(&self) -> bool {
        !self.highlighted_words.is_empty()
    }

    pub fn safe_signals_visible(&self) -> bool {
        !self.safe_signals.is_empty()
    }
}

/// round(confidence * 100), halves rounding toward positive infinity
pub fn confidence_percent(confidence: f64) -> i64 {
    (confidence * 100.0 + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(prediction: &str, confidence: f64) -> ClassificationResult {
        ClassificationResult {
            prediction: prediction.to_string(),
            confidence,
            reasons: vec![],
            highlighted_words: vec![],
            safe_signals: vec![],
        }
    }

    #[test]
    fn test_confidence_percent_rounds() {
        assert_eq!(confidence_percent(0.873), 87);
        assert_eq!(confidence_percent(0.62), 62);
        assert_eq!(confidence_percent(0.875), 88);
        assert_eq!(confidence_percent(0.0), 0);
        assert_eq!(confidence_percent(1.0), 100);
        assert_eq!(confidence_percent(0.99), 99);
    }

    #[test]
    fn test_confidence_percent_negative_halves_round_up() {
        assert_eq!(confidence_percent(-0.125), -12);
        assert_eq!(confidence_percent(-0.126), -13);
        assert_eq!(confidence_percent(0.625), 63);
    }

    #[test]
    fn test_confidence_text() {
        let view = VerdictView::from_result(&result("safe", 0.873));
        assert_eq!(view.confidence_text(), "87%");
        assert!((view.bar_target() - 0.87).abs() < 1e-6);
    }

    #[test]
    fn test_dangerous_any_case() {
        for prediction in ["DANGEROUS", "dangerous", "Dangerous", "dAnGeRoUs"] {
            let view = VerdictView::from_result(&result(prediction, 0.9));
            assert_eq!(view.style_key(), "dangerous");
            assert_eq!(view.icon(), "🚨");
            assert!(view.recognized);
            assert_eq!(view.label, prediction);
        }
    }

    #[test]
    fn test_unknown_prediction_defaults_to_safe() {
        let view = VerdictView::from_result(&result("unknown", 0.5));
        assert_eq!(view.style_key(), "safe");
        assert_eq!(view.icon(), "🛡️");
        assert!(!view.recognized);
        assert_eq!(view.label, "unknown");
    }

    #[test]
    fn test_highlight_region_visibility() {
        let empty = VerdictView::from_result(&result("safe", 0.9));
        assert!(!empty.highlights_visible());

        let mut tagged = result("dangerous", 0.9);
        tagged.highlighted_words = vec!["wire transfer".to_string(), "urgent".to_string()];
        let view = VerdictView::from_result(&tagged);
        assert!(view.highlights_visible());
        assert_eq!(view.highlighted_words, vec!["wire transfer", "urgent"]);
    }

    #[test]
    fn test_reasons_keep_order_and_duplicates() {
        let mut input = result("suspicious", 0.7);
        input.reasons = vec![
            "Contains a link".to_string(),
            "Urgency language".to_string(),
            "Contains a link".to_string(),
        ];
        let view = VerdictView::from_result(&input);
        let texts: Vec<&str> = view.reasons.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Contains a link", "Urgency language", "Contains a link"]);
        let delays: Vec<u128> = view.reasons.iter().map(|r| r.appear_after.as_millis()).collect();
        assert_eq!(delays, vec![100, 250, 400]);
    }

    #[test]
    fn test_safe_signals_visibility() {
        let mut input = result("Safe", 0.95);
        assert!(!VerdictView::from_result(&input).safe_signals_visible());
        input.safe_signals = vec!["Message appears to be normal and safe.".to_string()];
        assert!(VerdictView::from_result(&input).safe_signals_visible());
    }
}
