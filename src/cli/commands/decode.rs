//! Decode command implementation
//!
//! Runs the full decrypt, parse, aggregate pipeline over the supplied
//! ciphertext and renders the timeline in the requested format. All pipeline
//! failures surface as the single generic message; the internal distinction
//! between bad Base64, a wrong key, and an empty result is logged but never
//! shown.

use anyhow::Result;
use colored::*;
use tracing::debug;

use super::shared;
use crate::app::services::presentation::TimelineView;
use crate::cli::args::{DecodeArgs, OutputFormat};
use crate::config::CryptoConfig;
use crate::constants::{DECRYPT_FAILED_MESSAGE, EMPTY_FIELD_PLACEHOLDER};
use crate::{Error, Pipeline, ProcessOutcome};

/// Run the decode command
pub fn run_decode(args: DecodeArgs) -> Result<()> {
    args.validate()?;
    shared::setup_logging(args.get_log_level())?;

    let config = CryptoConfig::with_overrides(args.key.as_deref(), args.iv.as_deref())?;
    let ciphertext = shared::read_input_text(args.ciphertext.as_deref(), args.input.as_deref())?;

    let pipeline = Pipeline::new(config);
    match pipeline.process(&ciphertext) {
        Ok(outcome) => {
            render_outcome(&args, &outcome);
            Ok(())
        }
        Err(Error::EmptyInput) => {
            // Nothing was pasted: clear the output, don't complain
            render_cleared(&args);
            Ok(())
        }
        Err(err) => {
            debug!("Decode failed: {}", err);
            anyhow::bail!("{}", DECRYPT_FAILED_MESSAGE);
        }
    }
}

fn render_outcome(args: &DecodeArgs, outcome: &ProcessOutcome) {
    let view = TimelineView::build(&outcome.records, outcome.stats.as_ref());
    let plaintext = args.show_plaintext.then_some(outcome.plaintext.as_str());

    match args.format {
        OutputFormat::Human => print_human(&view, plaintext),
        OutputFormat::Json => print_json(&view, plaintext),
    }
}

fn render_cleared(args: &DecodeArgs) {
    match args.format {
        // Cleared state prints nothing for humans
        OutputFormat::Human => {}
        OutputFormat::Json => print_json(&TimelineView::empty(), None),
    }
}

fn print_human(view: &TimelineView, plaintext: Option<&str>) {
    if let Some(text) = plaintext {
        println!("{}", "Decrypted plaintext".bright_green().bold());
        println!("  {}", text);
        println!();
    }

    if view.entries.is_empty() {
        println!("{}", "No records decoded".dimmed());
        return;
    }

    println!("{}", "Timeline".bright_green().bold());
    for entry in &view.entries {
        let marker = if entry.is_latest {
            entry.marker.bright_yellow().bold()
        } else {
            entry.marker.bright_white().bold()
        };
        println!(
            "  {} {}  {} {}",
            marker,
            entry.place,
            placeholder(&entry.date).bright_cyan(),
            placeholder(&entry.time).bright_cyan()
        );
    }

    if let Some(stats) = &view.stats {
        println!();
        println!("{}", "Summary".bright_green().bold());
        println!("  {} {}", "Records:".bright_cyan(), stats.total);
        println!("  {} {}", "Start:".bright_cyan(), placeholder(&stats.start));
        println!("  {} {}", "End:".bright_cyan(), placeholder(&stats.end));
        println!(
            "  {} {}",
            "Duration:".bright_cyan(),
            placeholder(&stats.duration)
        );
    }
}

fn print_json(view: &TimelineView, plaintext: Option<&str>) {
    let payload = match plaintext {
        Some(text) => serde_json::json!({ "plaintext": text, "timeline": view }),
        None => serde_json::json!({ "timeline": view }),
    };

    println!("{}", serde_json::to_string_pretty(&payload).unwrap());
}

fn placeholder(text: &str) -> &str {
    if text.is_empty() {
        EMPTY_FIELD_PLACEHOLDER
    } else {
        text
    }
}
