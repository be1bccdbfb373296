//! Command-line surface and interactive selection.
//!
//! Every input can be given as a flag; whatever is missing is collected
//! interactively (model menus once per speaker, then a free-text motion
//! prompt).

use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::config::catalog;
use crate::console::{theme, DebateView};
use crate::error::{AppError, AppResult};

/// Stage a structured debate between two LLM speakers
#[derive(Debug, Parser)]
#[command(name = "podium", version, about)]
pub struct Args {
    /// Model for speaker 1 (proposition); selected interactively when omitted
    #[arg(long, value_name = "MODEL")]
    pub proposition: Option<String>,

    /// Model for speaker 2 (opposition); selected interactively when omitted
    #[arg(long, value_name = "MODEL")]
    pub opposition: Option<String>,

    /// Motion to debate; prompted for when omitted
    #[arg(long, value_name = "TEXT")]
    pub motion: Option<String>,

    /// Cap on total speaker turns; overrides DEBATE_MAX_TURNS (0 = unbounded)
    #[arg(long, value_name = "N")]
    pub max_turns: Option<u32>,

    /// List selectable models and exit
    #[arg(long)]
    pub list_models: bool,
}

/// Resolved debate inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebateSetup {
    /// Vendor model identifier for speaker 1
    pub speaker_one_model: String,
    /// Vendor model identifier for speaker 2
    pub speaker_two_model: String,
    /// The motion both speakers argue
    pub motion: String,
}

/// Resolve flags plus interactive prompts into a full debate setup
pub fn resolve<V: DebateView>(args: &Args, view: &mut V) -> AppResult<DebateSetup> {
    let speaker_one_model = match &args.proposition {
        Some(name) => model_id(name)?,
        None => select_model(theme::SPEAKER1_CONFIG, view)?,
    };

    let speaker_two_model = match &args.opposition {
        Some(name) => model_id(name)?,
        None => select_model(theme::SPEAKER2_CONFIG, view)?,
    };

    let motion = match &args.motion {
        Some(text) => text.clone(),
        None => {
            view.line("");
            view.line(theme::DEBATE_SETUP);
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter the debate motion")
                .interact_text()
                .map_err(selection_error)?
        }
    };

    Ok(DebateSetup {
        speaker_one_model,
        speaker_two_model,
        motion,
    })
}

/// Print the model catalog
pub fn print_models<V: DebateView>(view: &mut V) {
    view.line(theme::MODELS_HEADER);
    for entry in catalog::AVAILABLE_MODELS {
        view.line(&format!("  {} ({})", entry.name, entry.id));
    }
}

/// Map a display name given on the command line to its vendor identifier
fn model_id(name: &str) -> AppResult<String> {
    catalog::find(name)
        .map(|entry| entry.id.to_string())
        .ok_or_else(|| AppError::Selection {
            message: format!(
                "unknown model '{}'; run with --list-models to see the catalog",
                name
            ),
        })
}

fn select_model<V: DebateView>(header: &str, view: &mut V) -> AppResult<String> {
    view.line("");
    view.line(header);

    let names = catalog::names();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select model")
        .items(&names)
        .default(0)
        .interact()
        .map_err(selection_error)?;

    let entry = &catalog::AVAILABLE_MODELS[index];
    view.line(&format!("Selected: {}", entry.name));
    Ok(entry.id.to_string())
}

fn selection_error(e: dialoguer::Error) -> AppError {
    AppError::Selection {
        message: e.to_string(),
    }
}
