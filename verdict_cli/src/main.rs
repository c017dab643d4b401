//! # Verdict CLI Application
//!
//! Terminal front-end for the message risk checker. Classifies one message
//! given on the command line, or prompts for messages until end of input.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use verdict_core::session::analyze;
use verdict_core::{Classifier, ClientConfig, Effect, HttpClassifier, PanelController, VerdictView};

/// Cells in the text confidence bar
const BAR_WIDTH: usize = 20;

#[derive(Parser, Debug)]
#[command(author, version, about = "Check a message for scam and fraud risk", long_about = None)]
struct Cli {
    /// Classifier server, e.g. http://127.0.0.1:8000 (overrides VERDICT_SERVER_URL)
    #[arg(long)]
    server: Option<String>,

    /// Print the verdict as JSON instead of the formatted block
    #[arg(long)]
    json: bool,

    /// Message to classify; prompts interactively when omitted
    message: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "verdict_core=warn,verdict_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli
        .server
        .as_deref()
        .map(ClientConfig::new)
        .unwrap_or_else(ClientConfig::from_env);

    let classifier = match HttpClassifier::new(&config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut controller = PanelController::new();

    match cli.message {
        Some(message) => {
            if check(&mut controller, &classifier, &message, cli.json).await {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        None => {
            interactive(&mut controller, &classifier, cli.json).await;
            ExitCode::SUCCESS
        }
    }
}

/// Prompt for messages until end of input
async fn interactive<C: Classifier + ?Sized>(controller: &mut PanelController, classifier: &C, json: bool) {
    println!("Verdict - Message Risk Checker");
    println!("==============================");
    println!("Type a message and press Enter. Ctrl+D to quit.");
    println!();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return;
        }

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            Ok(0) | Err(_) => {
                println!();
                return;
            }
            Ok(_) => {}
        }

        check(controller, classifier, &input, json).await;
        println!();
    }
}

/// Classify one message and print the outcome. Returns false on failure.
async fn check<C: Classifier + ?Sized>(
    controller: &mut PanelController,
    classifier: &C,
    message: &str,
    json: bool,
) -> bool {
    match analyze(controller, classifier, message).await {
        Effect::Render => {
            if let Some(view) = controller.panel().view() {
                if json {
                    println!("{}", verdict_json(view));
                } else {
                    print!("{}", format_verdict(view));
                }
            }
            true
        }
        Effect::Shake => {
            eprintln!("Message is empty, nothing was sent.");
            false
        }
        Effect::Notify(notice) => {
            eprintln!("Error: {}", notice);
            controller.dismiss_notice();
            false
        }
        other => {
            tracing::debug!(?other, "submission ended without a verdict");
            false
        }
    }
}

/// Text bar with `BAR_WIDTH` cells
fn confidence_bar(target: f32) -> String {
    let filled = ((target.clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Render a verdict as a text block
fn format_verdict(view: &VerdictView) -> String {
    let mut out = String::new();
    out.push_str("═══════════════════════════════════════\n");
    out.push_str(&format!("  {}  {}\n", view.icon(), view.label));
    out.push_str(&format!(
        "  Confidence: {} {}\n",
        view.confidence_text(),
        confidence_bar(view.bar_target())
    ));
    out.push_str("═══════════════════════════════════════\n");

    if !view.reasons.is_empty() {
        out.push_str("Why this verdict:\n");
        for reason in &view.reasons {
            out.push_str(&format!("  - {}\n", reason.text));
        }
    }

    if view.safe_signals_visible() {
        out.push_str("Reassuring signals:\n");
        for signal in &view.safe_signals {
            out.push_str(&format!("  + {}\n", signal));
        }
    }

    if view.highlights_visible() {
        let tags: Vec<String> = view
            .highlighted_words
            .iter()
            .map(|w| format!("[{}]", w))
            .collect();
        out.push_str(&format!("Flagged words: {}\n", tags.join(" ")));
    }

    out
}

/// Render a verdict as a JSON object
fn verdict_json(view: &VerdictView) -> String {
    let reasons: Vec<&str> = view.reasons.iter().map(|r| r.text.as_str()).collect();
    let value = serde_json::json!({
        "prediction": view.label,
        "style": view.style_key(),
        "recognized": view.recognized,
        "confidence_pct": view.confidence_pct,
        "reasons": reasons,
        "safe_signals": view.safe_signals,
        "highlighted_words": view.highlighted_words,
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}
