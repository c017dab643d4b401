//! UI module for Verdict GUI
//!
//! # Panel Structure
//! - `toolbar` - Title and theme toggle
//! - `input_panel` - Message editor and the analyze trigger
//! - `results_panel` - Dispatches to `result_verdict` while a verdict is visible
//! - `modal` - Blocking notice overlay
//! - `status_bar` - Endpoint, last verdict time and status messages
//!
//! # Results Panel Children
//! - `result_verdict` - Icon, label, confidence bar, reasons, signals, tags

// Top-level panels
pub mod toolbar;
pub mod input_panel;
pub mod results_panel;
pub mod modal;
pub mod status_bar;

// Results panel children
pub mod result_verdict;
