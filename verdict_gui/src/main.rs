//! # Verdict GUI Application
//!
//! Desktop front-end for the message risk checker. Built with Iced; the
//! submit/render rules live in `verdict_core::controller` and this crate only
//! carries out the effects it asks for and draws the result.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use iced::time::Instant;
use iced::widget::{column, container, scrollable, stack, text_editor};
use iced::{Element, Length, Subscription, Task, Theme};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use verdict_core::animation;
use verdict_core::{
    ClassificationResult, Classifier, ClientConfig, Effect, HttpClassifier, PanelController,
    ScanResult, Ticket,
};

mod ui;

/// Frame interval while something is animating
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Timer future; the tokio sleep is only created once polled on the executor
async fn wait(duration: Duration) {
    tokio::time::sleep(duration).await;
}

pub fn main() -> iced::Result {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "verdict_core=info,verdict_gui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Verdict GUI");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size((760.0, 860.0))
        .run()
}

#[derive(Debug, Clone)]
pub enum Message {
    EditorAction(text_editor::Action),
    Analyze,
    ExitFinished(Ticket),
    Classified(Ticket, ScanResult<ClassificationResult>),
    Settled(Ticket),
    DismissNotice,
    ToggleDarkMode,
    Tick(Instant),
}

pub struct App {
    controller: PanelController,
    classifier: ScanResult<Arc<dyn Classifier>>,
    endpoint: String,
    editor: text_editor::Content,
    dark_mode: bool,
    booted_at: Instant,
    now: Instant,
    shake_started: Option<Instant>,
    exit_started: Option<Instant>,
    shown_at: Option<Instant>,
    last_verdict_at: Option<DateTime<Local>>,
    status: String,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let config = ClientConfig::from_env();
        let endpoint = config.endpoint();

        let classifier = HttpClassifier::new(&config).map(|c| Arc::new(c) as Arc<dyn Classifier>);
        let status = match &classifier {
            Ok(_) => "Ready".to_string(),
            Err(e) => {
                tracing::error!(error = %e, "classifier unavailable");
                e.to_string()
            }
        };

        let now = Instant::now();
        let app = App {
            controller: PanelController::new(),
            classifier,
            endpoint,
            editor: text_editor::Content::new(),
            dark_mode: false,
            booted_at: now,
            now,
            shake_started: None,
            exit_started: None,
            shown_at: None,
            last_verdict_at: None,
            status,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        "Verdict - Message Risk Checker".to_string()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EditorAction(action) => {
                self.editor.perform(action);
                Task::none()
            }
            Message::Analyze => {
                let input = self.editor.text();
                let effect = self.controller.submit(&input);
                self.run(effect)
            }
            Message::ExitFinished(ticket) => {
                let effect = self.controller.exit_finished(ticket);
                self.run(effect)
            }
            Message::Classified(ticket, outcome) => {
                let effect = self.controller.response(ticket, outcome);
                self.run(effect)
            }
            Message::Settled(ticket) => {
                let effect = self.controller.settled(ticket);
                self.run(effect)
            }
            Message::DismissNotice => {
                self.controller.dismiss_notice();
                Task::none()
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                if self
                    .shake_elapsed()
                    .is_some_and(|e| e >= animation::SHAKE_DURATION)
                {
                    self.shake_started = None;
                }
                Task::none()
            }
        }
    }

    /// Carry out one controller effect
    fn run(&mut self, effect: Effect) -> Task<Message> {
        let now = Instant::now();
        self.now = now;

        match effect {
            Effect::None => Task::none(),
            Effect::Shake => {
                self.shake_started = Some(now);
                Task::none()
            }
            Effect::Hide { ticket, duration } => {
                self.exit_started = Some(now);
                Task::perform(wait(duration), move |_| {
                    Message::ExitFinished(ticket)
                })
            }
            Effect::Request { ticket, message } => {
                self.exit_started = None;
                self.shown_at = None;
                self.status = "Analyzing...".to_string();
                match &self.classifier {
                    Ok(classifier) => {
                        let classifier = Arc::clone(classifier);
                        Task::perform(
                            async move { classifier.classify(&message).await },
                            move |outcome| Message::Classified(ticket, outcome),
                        )
                    }
                    Err(e) => Task::done(Message::Classified(ticket, Err(e.clone()))),
                }
            }
            Effect::Settle { ticket, duration } => {
                Task::perform(wait(duration), move |_| Message::Settled(ticket))
            }
            Effect::Render => {
                self.shown_at = Some(now);
                self.last_verdict_at = Some(Local::now());
                self.status = "Analysis complete".to_string();
                Task::none()
            }
            Effect::Notify(_) => {
                self.shown_at = None;
                self.status = "Analysis failed".to_string();
                Task::none()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            iced::time::every(FRAME_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn is_animating(&self) -> bool {
        let shaking = self.shake_started.is_some();
        let entering = match (self.controller.panel().view(), self.entrance_elapsed()) {
            (Some(view), Some(elapsed)) => !animation::entrance_finished(view, elapsed),
            _ => false,
        };
        shaking || entering || self.controller.is_busy()
    }

    fn elapsed_since(&self, start: Option<Instant>) -> Option<Duration> {
        start.map(|s| self.now.saturating_duration_since(s))
    }

    fn shake_elapsed(&self) -> Option<Duration> {
        self.elapsed_since(self.shake_started)
    }

    fn exit_elapsed(&self) -> Option<Duration> {
        self.elapsed_since(self.exit_started)
    }

    fn entrance_elapsed(&self) -> Option<Duration> {
        self.elapsed_since(self.shown_at)
    }

    fn view(&self) -> Element<'_, Message> {
        let body = column![
            ui::input_panel::view_input_panel(self),
            ui::results_panel::view_results_panel(self),
        ]
        .spacing(16);

        let content = column![
            ui::toolbar::view_header(self.dark_mode),
            scrollable(body).height(Length::Fill),
            ui::status_bar::view_status_bar(&self.endpoint, self.last_verdict_at, &self.status),
        ]
        .spacing(12)
        .padding(16);

        let base = container(content).width(Length::Fill).height(Length::Fill);

        match self.controller.notice() {
            Some(notice) => stack![
                base,
                ui::modal::view_backdrop(),
                ui::modal::view_notice(notice),
            ]
            .into(),
            None => base.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use verdict_core::errors::CONNECTION_NOTICE;
    use verdict_core::ScanError;

    fn app_with_text(input: &str) -> App {
        let (mut app, _) = App::new();
        app.editor = text_editor::Content::with_text(input);
        app
    }

    fn scenario() -> ClassificationResult {
        ClassificationResult {
            prediction: "Suspicious".to_string(),
            confidence: 0.62,
            reasons: vec!["Urgency language".to_string()],
            highlighted_words: vec!["now".to_string()],
            safe_signals: vec![],
        }
    }

    /// Drive one successful submission through the messages the runtime would send
    fn complete(app: &mut App, result: ClassificationResult) {
        let _ = app.update(Message::Analyze);
        let ticket = app.controller.active_ticket().unwrap();
        let _ = app.update(Message::Classified(ticket, Ok(result)));
        let _ = app.update(Message::Settled(ticket));
    }

    #[test]
    fn test_empty_input_shakes_without_request() {
        let mut app = app_with_text("   ");
        let _ = app.update(Message::Analyze);
        assert!(app.shake_started.is_some());
        assert!(!app.controller.is_busy());
        assert!(app.is_animating());
    }

    #[test]
    fn test_successful_submission_shows_verdict() {
        let mut app = app_with_text("Send me $500 now");
        complete(&mut app, scenario());

        assert!(app.controller.trigger_enabled());
        assert!(app.shown_at.is_some());
        assert!(app.last_verdict_at.is_some());
        let view = app.controller.panel().view().unwrap();
        assert_eq!(view.confidence_text(), "62%");
        assert_eq!(app.status, "Analysis complete");
    }

    #[test]
    fn test_failed_submission_opens_notice() {
        let mut app = app_with_text("hello");
        let _ = app.update(Message::Analyze);
        assert!(app.controller.is_busy());
        assert_eq!(app.status, "Analyzing...");

        let ticket = app.controller.active_ticket().unwrap();
        let _ = app.update(Message::Classified(ticket, Err(ScanError::Server { status: 502 })));

        assert_eq!(app.controller.notice(), Some(CONNECTION_NOTICE));
        assert!(app.controller.trigger_enabled());
        assert!(app.controller.panel().view().is_none());

        let _ = app.update(Message::DismissNotice);
        assert!(app.controller.notice().is_none());
    }

    #[test]
    fn test_resubmit_starts_exit_transition() {
        let mut app = app_with_text("first");
        complete(&mut app, scenario());

        let _ = app.update(Message::Analyze);
        assert!(app.exit_started.is_some());
        assert!(app.controller.panel().is_visible());

        let ticket = app.controller.active_ticket().unwrap();
        let _ = app.update(Message::ExitFinished(ticket));
        assert!(app.exit_started.is_none());
        assert!(!app.controller.panel().is_visible());
    }

    #[test]
    fn test_toggle_dark_mode() {
        let (mut app, _) = App::new();
        assert_eq!(app.theme(), Theme::Light);
        let _ = app.update(Message::ToggleDarkMode);
        assert_eq!(app.theme(), Theme::Dark);
    }
}
