//! # Panel Controller
//!
//! Explicit state machine behind the input box, the trigger button and the
//! result panel:
//!
//! ```text
//!          submit (panel visible)        exit_finished
//!   Idle ─────────────────────────► Hiding ─────────────► Requesting
//!    ▲  └─────────────────────────────────────────────────────▲ │
//!    │            submit (no panel)                            │ │ response(Ok)
//!    │                                                           ▼
//!    ├──────────── response(Err) ◄──────────────────────── Settling
//!    └──────────────────── settled ◄────────────────────────────┘
//! ```
//!
//! Every operation returns an [`Effect`] for the shell to carry out. Effects
//! that complete later (timers, the network call) are reported back with the
//! [`Ticket`] they were issued under; a ticket that does not match the active
//! submission is ignored, so nothing can be rendered twice or out of order.

use std::time::Duration;

use uuid::Uuid;

use crate::animation::{EXIT_TRANSITION, SETTLE_DELAY};
use crate::errors::{ScanError, ScanResult, CONNECTION_NOTICE};
use crate::model::ClassificationResult;
use crate::verdict::VerdictView;

/// Trigger label while idle
pub const IDLE_LABEL: &str = "Analyze Risk Level";
/// Trigger label while a submission is running
pub const BUSY_LABEL: &str = "Analyzing...";

/// Identifies one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(Uuid);

impl Ticket {
    fn new() -> Self {
        Ticket(Uuid::new_v4())
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the controller is in the submit cycle
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    /// Previous panel playing its exit transition
    Hiding { ticket: Ticket, message: String },
    /// Waiting on the classifier
    Requesting { ticket: Ticket },
    /// Result in hand, waiting out the settle delay
    Settling {
        ticket: Ticket,
        result: ClassificationResult,
    },
}

/// Work the shell must perform after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing to do (rejected or stale transition)
    None,
    /// Play the attention cue on the input box
    Shake,
    /// Play the exit transition, then call [`PanelController::exit_finished`]
    Hide { ticket: Ticket, duration: Duration },
    /// Classify `message`, then call [`PanelController::response`]
    Request { ticket: Ticket, message: String },
    /// Wait, then call [`PanelController::settled`]
    Settle { ticket: Ticket, duration: Duration },
    /// The panel now holds a fresh verdict; start its entrance animations
    Render,
    /// Show a blocking notice with this text
    Notify(String),
}

/// Result panel contents
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Panel {
    #[default]
    Hidden,
    Visible(VerdictView),
}

impl Panel {
    pub fn is_visible(&self) -> bool {
        matches!(self, Panel::Visible(_))
    }

    pub fn view(&self) -> Option<&VerdictView> {
        match self {
            Panel::Visible(view) => Some(view),
            Panel::Hidden => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PanelController {
    phase: Phase,
    panel: Panel,
    notice: Option<String>,
}

impl Default for PanelController {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelController {
    pub fn new() -> Self {
        PanelController {
            phase: Phase::Idle,
            panel: Panel::Hidden,
            notice: None,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Pending blocking notice, if any
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn trigger_enabled(&self) -> bool {
        !self.is_busy()
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.is_busy() {
            BUSY_LABEL
        } else {
            IDLE_LABEL
        }
    }

    /// Ticket of the submission in flight
    pub fn active_ticket(&self) -> Option<Ticket> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Hiding { ticket, .. }
            | Phase::Requesting { ticket }
            | Phase::Settling { ticket, .. } => Some(*ticket),
        }
    }

    /// Validate `input` and start a submission
    pub fn submit(&mut self, input: &str) -> Effect {
        match self.try_submit(input) {
            Ok(effect) => effect,
            Err(ScanError::EmptyMessage) => {
                tracing::debug!("empty message, shaking input");
                Effect::Shake
            }
            Err(e) => {
                tracing::debug!(error = %e, "submit ignored");
                Effect::None
            }
        }
    }

    fn try_submit(&mut self, input: &str) -> ScanResult<Effect> {
        if self.is_busy() {
            return Err(ScanError::Busy);
        }

        let message = input.trim();
        if message.is_empty() {
            return Err(ScanError::EmptyMessage);
        }

        let ticket = Ticket::new();
        let message = message.to_string();
        tracing::info!(%ticket, "submitting message");

        if self.panel.is_visible() {
            self.phase = Phase::Hiding { ticket, message };
            Ok(Effect::Hide {
                ticket,
                duration: EXIT_TRANSITION,
            })
        } else {
            self.phase = Phase::Requesting { ticket };
            Ok(Effect::Request { ticket, message })
        }
    }

    /// The old panel finished its exit transition
    pub fn exit_finished(&mut self, ticket: Ticket) -> Effect {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Hiding { ticket: active, message } if active == ticket => {
                self.panel = Panel::Hidden;
                self.phase = Phase::Requesting { ticket };
                Effect::Request { ticket, message }
            }
            other => self.stale(other, ticket),
        }
    }

    /// The classifier call completed
    pub fn response(&mut self, ticket: Ticket, outcome: ScanResult<ClassificationResult>) -> Effect {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Requesting { ticket: active } if active == ticket => match outcome {
                Ok(result) => {
                    self.phase = Phase::Settling { ticket, result };
                    Effect::Settle {
                        ticket,
                        duration: SETTLE_DELAY,
                    }
                }
                Err(e) => {
                    tracing::warn!(%ticket, code = e.error_code(), error = %e, "error analyzing message");
                    self.panel = Panel::Hidden;
                    self.notice = Some(CONNECTION_NOTICE.to_string());
                    Effect::Notify(CONNECTION_NOTICE.to_string())
                }
            },
            other => self.stale(other, ticket),
        }
    }

    /// The settle delay elapsed: render and go idle
    pub fn settled(&mut self, ticket: Ticket) -> Effect {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Settling { ticket: active, result } if active == ticket => {
                let view = VerdictView::from_result(&result);
                tracing::info!(
                    %ticket,
                    style = view.style_key(),
                    confidence = %view.confidence_text(),
                    "verdict rendered"
                );
                self.panel = Panel::Visible(view);
                Effect::Render
            }
            other => self.stale(other, ticket),
        }
    }

    /// Close the blocking notice
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn stale(&mut self, phase: Phase, ticket: Ticket) -> Effect {
        tracing::debug!(%ticket, ?phase, "ignoring stale transition");
        self.phase = phase;
        Effect::None
    }
}
