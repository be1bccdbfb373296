use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use podium::{
    cli::{self, Args},
    config::Config,
    console::{DebateView, TermView},
    debate::Debate,
    OpenAiClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut view = TermView::new();

    if args.list_models {
        cli::print_models(&mut view);
        return Ok(());
    }

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "Podium starting...");

    // Initialize completion client
    let client = match OpenAiClient::new(&config.api, config.request.clone()) {
        Ok(c) => {
            info!(base_url = %config.api.base_url, "Completion client initialized");
            c
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize completion client");
            return Err(e.into());
        }
    };

    // Resolve speakers and motion (flags, then interactive prompts)
    let setup = cli::resolve(&args, &mut view)?;

    // --max-turns beats the environment; 0 disables the cap
    let max_turns = match args.max_turns {
        Some(n) => Some(n).filter(|n| *n > 0),
        None => config.debate.max_turns,
    };

    let mut debate = Debate::new(
        setup.motion,
        setup.speaker_one_model,
        setup.speaker_two_model,
    )
    .with_max_turns(max_turns);

    let outcome = match debate.run(&client, &mut view).await {
        Ok(o) => o,
        Err(e) => {
            error!(error = %e, "Debate aborted");
            return Err(e.into());
        }
    };

    view.line("");
    view.line(&outcome.announcement());

    info!(turns = outcome.turns(), "Debate complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        podium::config::LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        podium::config::LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
