//! Async driver that plays one submission to completion.
//!
//! Front-ends without a frame loop (the CLI) use this instead of feeding the
//! controller step by step. Timers run on tokio.

use crate::client::Classifier;
use crate::controller::{Effect, PanelController};

/// Submit `input` and carry out effects until the controller goes idle.
///
/// Returns the terminal effect: [`Effect::Render`], [`Effect::Notify`],
/// [`Effect::Shake`] or [`Effect::None`].
pub async fn analyze<C>(controller: &mut PanelController, classifier: &C, input: &str) -> Effect
where
    C: Classifier + ?Sized,
{
    let mut effect = controller.submit(input);
    loop {
        effect = match effect {
            Effect::Hide { ticket, duration } => {
                tokio::time::sleep(duration).await;
                controller.exit_finished(ticket)
            }
            Effect::Request { ticket, message } => {
                let outcome = classifier.classify(&message).await;
                controller.response(ticket, outcome)
            }
            Effect::Settle { ticket, duration } => {
                tokio::time::sleep(duration).await;
                controller.settled(ticket)
            }
            terminal => return terminal,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::animation::{EXIT_TRANSITION, SETTLE_DELAY};
    use crate::errors::{ScanError, ScanResult, CONNECTION_NOTICE};
    use crate::model::ClassificationResult;

    /// Replays canned outcomes and records every message it was asked about
    struct FakeClassifier {
        outcomes: Mutex<Vec<ScanResult<ClassificationResult>>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeClassifier {
        fn new(outcomes: Vec<ScanResult<ClassificationResult>>) -> Self {
            FakeClassifier {
                outcomes: Mutex::new(outcomes),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Classifier for FakeClassifier {
        async fn classify(&self, message: &str) -> ScanResult<ClassificationResult> {
            self.calls.lock().unwrap().push(message.to_string());
            self.outcomes.lock().unwrap().remove(0)
        }
    }

    fn suspicious() -> ClassificationResult {
        serde_json::from_str(
            r#"{"prediction":"Suspicious","confidence":0.62,"reasons":["Urgency language"],"highlighted_words":["now"]}"#,
        )
        .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_scenario_send_me_500() {
        let classifier = FakeClassifier::new(vec![Ok(suspicious())]);
        let mut controller = PanelController::new();

        let started = tokio::time::Instant::now();
        let effect = analyze(&mut controller, &classifier, "Send me $500 now").await;

        assert_eq!(effect, Effect::Render);
        assert_eq!(classifier.calls(), vec!["Send me $500 now"]);
        // No panel was visible, so only the settle delay applies
        assert_eq!(started.elapsed(), SETTLE_DELAY);

        let view = controller.panel().view().unwrap();
        assert_eq!(view.style_key(), "suspicious");
        assert_eq!(view.label, "Suspicious");
        assert_eq!(view.confidence_text(), "62%");
        assert_eq!(view.reasons.len(), 1);
        assert_eq!(view.highlighted_words, vec!["now"]);
        assert!(controller.trigger_enabled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_inputs_never_call_classifier() {
        let classifier = FakeClassifier::new(vec![]);
        let mut controller = PanelController::new();

        for input in ["", " ", "\t\n", "     \r\n  "] {
            let effect = analyze(&mut controller, &classifier, input).await;
            assert_eq!(effect, Effect::Shake);
        }
        assert!(classifier.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_exactly_one_call_per_submission() {
        let classifier = FakeClassifier::new(vec![Ok(suspicious()), Ok(suspicious())]);
        let mut controller = PanelController::new();

        analyze(&mut controller, &classifier, "  first  ").await;
        assert_eq!(classifier.calls(), vec!["first"]);

        let started = tokio::time::Instant::now();
        analyze(&mut controller, &classifier, "second").await;
        assert_eq!(classifier.calls(), vec!["first", "second"]);
        // Second run had to hide the first panel
        assert_eq!(started.elapsed(), EXIT_TRANSITION + SETTLE_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_restore_trigger_without_panel() {
        let failures = vec![
            ScanError::Server { status: 400 },
            ScanError::Server { status: 404 },
            ScanError::Server { status: 500 },
            ScanError::Server { status: 503 },
            ScanError::transport("connection refused"),
        ];

        for failure in failures {
            let classifier = FakeClassifier::new(vec![Ok(suspicious()), Err(failure)]);
            let mut controller = PanelController::new();
            analyze(&mut controller, &classifier, "first").await;

            let started = tokio::time::Instant::now();
            let effect = analyze(&mut controller, &classifier, "second").await;

            assert_eq!(effect, Effect::Notify(CONNECTION_NOTICE.to_string()));
            assert!(controller.trigger_enabled());
            assert!(!controller.panel().is_visible());
            // No settle delay on failure
            assert_eq!(started.elapsed(), EXIT_TRANSITION);
            assert_eq!(classifier.calls().len(), 2);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_retry_after_failure() {
        let classifier = FakeClassifier::new(vec![Err(ScanError::transport("timed out"))]);
        let mut controller = PanelController::new();

        analyze(&mut controller, &classifier, "hello").await;
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(classifier.calls().len(), 1);
    }
}
