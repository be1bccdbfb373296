//! # Podium
//!
//! A CLI that stages a formal debate between two independently configured
//! language-model speakers. Speaker 1 argues the proposition, speaker 2
//! the opposition; turns alternate strictly, each reply must satisfy a
//! structured schema (plan, response text or forfeit reason, forfeit
//! flag), and the debate ends when either side voluntarily forfeits.
//!
//! ## Architecture
//!
//! ```text
//! CLI (clap/dialoguer) → Debate driver (state machine)
//!                              ↓                ↓
//!            Completion service (HTTP)   Console view (panels)
//! ```
//!
//! The driver is synchronous in shape: exactly one completion request is
//! outstanding at any time, and each speaker's conversation history is
//! owned by the driver alone.
//!
//! ## Example
//!
//! ```ignore
//! use podium::{Config, Debate, OpenAiClient, TermView};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = OpenAiClient::new(&config.api, config.request.clone())?;
//!     let mut view = TermView::new();
//!     let mut debate = Debate::new("This house believes in remote work.", "gpt-4o", "x-ai/grok-2-1212");
//!     let outcome = debate.run(&client, &mut view).await?;
//!     println!("{}", outcome.announcement());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Command-line arguments and interactive model/motion selection.
pub mod cli;
/// Completion service collaborator (OpenAI-compatible HTTP client).
pub mod completion;
/// Configuration management and the static model catalog.
pub mod config;
/// Console rendering collaborator and styling theme.
pub mod console;
/// Debate core: reply contract, speakers, turn-taking state machine.
pub mod debate;
/// Error types and result aliases for the application.
pub mod error;
/// System and opening prompts for the speakers.
pub mod prompts;

pub use completion::{CompletionService, OpenAiClient};
pub use config::Config;
pub use console::{DebateView, TermView};
pub use debate::{Debate, DebateOutcome, Reply, TurnOutcome};
pub use error::{AppError, AppResult};
