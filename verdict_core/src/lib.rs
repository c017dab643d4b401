//! # verdict_core - Message Risk Checker Engine
//!
//! `verdict_core` is the headless half of Verdict. It talks to a remote
//! classification service, turns its answer into a renderable verdict, and
//! tracks the submit/render cycle as an explicit state machine so that any
//! front-end (Iced GUI, terminal) drives the same rules.
//!
//! ## Design Philosophy
//!
//! - **Pure controller**: state transitions return [`controller::Effect`]s; the shell runs them
//! - **JSON-First**: wire types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No hidden timers**: every delay is a named constant in [`animation`]
//!
//! ## Quick Start
//!
//! ```rust
//! use verdict_core::controller::{Effect, PanelController};
//!
//! let mut controller = PanelController::new();
//!
//! // Whitespace never reaches the network
//! assert!(matches!(controller.submit("   "), Effect::Shake));
//!
//! // A real message starts a request
//! assert!(matches!(controller.submit("Send me $500 now"), Effect::Request { .. }));
//! assert!(controller.is_busy());
//! ```
//!
//! ## Modules
//!
//! - [`model`] - Wire types and the risk level enum
//! - [`verdict`] - Render rules (style, percentage, reasons, tags)
//! - [`animation`] - Transition timings and frame functions
//! - [`controller`] - Explicit panel state machine
//! - [`client`] - Classifier trait and the HTTP implementation
//! - [`session`] - Async driver running one submission end to end
//! - [`config`] - Client configuration
//! - [`errors`] - Structured error types

pub mod animation;
pub mod client;
pub mod config;
pub mod controller;
pub mod errors;
pub mod model;
pub mod session;
pub mod verdict;

// Re-export commonly used types at crate root for convenience
pub use client::{Classifier, HttpClassifier};
pub use config::ClientConfig;
pub use controller::{Effect, PanelController, Phase, Ticket};
pub use errors::{ScanError, ScanResult};
pub use model::{ClassificationResult, ClassifyRequest, RiskLevel};
pub use verdict::VerdictView;
