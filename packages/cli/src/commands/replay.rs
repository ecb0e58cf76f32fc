use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pagetree_editor::{Action, EditSession};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// JSON array of actions to apply in order
    pub input: PathBuf,

    /// Write the final application state here
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn replay(args: ReplayArgs, config: &Config) -> Result<()> {
    println!("🔁 {} Pagetree replay", "Starting".green().bold());
    println!("   Input: {}", args.input.display());
    println!();

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let actions: Vec<serde_json::Value> = serde_json::from_str(&source)
        .with_context(|| format!("Expected a JSON array of actions in {}", args.input.display()))?;

    let mut session = EditSession::with_options(&config.editor_options());

    for (index, value) in actions.into_iter().enumerate() {
        let action = Action::from_value(value)
            .with_context(|| format!("Action #{} could not be decoded", index))?;
        let name = action.name();

        session
            .dispatch(action)
            .with_context(|| format!("Action #{} ({}) failed", index, name))?;
        println!("   {} {}", "✓".green(), name);
    }

    let state = session.state();
    let history = state.history();
    info!(snapshots = history.len(), "Replay finished");

    println!();
    println!("✨ {} Replay complete!", "Done".green().bold());
    println!("   Documents: {}", state.app.documents.len());
    for doc in &state.app.documents {
        let items = doc.tree().map_or(0, |tree| tree.len());
        println!("     {} ({} items)", doc.filename, items);
    }
    println!(
        "   Snapshots: {} (undo {}, redo {})",
        history.len(),
        history.undo_levels(),
        history.redo_levels()
    );

    if let Some(output) = args.output {
        let json = serde_json::to_string_pretty(&state.app)?;
        fs::write(&output, json)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        println!("   Output: {}", output.display());
    }

    Ok(())
}
