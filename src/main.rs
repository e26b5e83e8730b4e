use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use stepform::app::{AppState, RunOutcome, Runtime, TerminalAcknowledgement};
use stepform::config::{Config, OutputFormat};
use stepform::logging::init_logging;
use stepform::terminal::Terminal;
use stepform::ui::{Renderer, RendererConfig};
use stepform::{FieldId, FormController, FormError, StepCatalog};

#[derive(Debug, Parser)]
#[command(name = "stepform", version, about = "Fill in a three-step form in the terminal")]
struct Cli {
    /// YAML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Prefill a field, e.g. --set name=Ann (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    set: Vec<String>,

    /// Print the submitted values as a single JSON line
    #[arg(long)]
    json: bool,

    /// Hide the key hint line
    #[arg(long)]
    no_hints: bool,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if cli.json {
        config.output.format = OutputFormat::Json;
    }
    if cli.no_hints {
        config.display.hints = false;
    }

    let logging =
        init_logging(&config.logging, true, cli.debug).context("failed to initialize logging")?;
    if let Some(path) = &logging.log_file_path {
        tracing::debug!(path = %path.display(), "logging to file");
    }
    tracing::debug!(?config, "configuration loaded");

    let prefill = cli
        .set
        .iter()
        .map(|raw| parse_assignment(raw))
        .collect::<Result<Vec<_>, FormError>>()?;

    let controller = FormController::new(StepCatalog::standard()).with_values(prefill);
    let state = AppState::new(controller);
    let terminal = Terminal::new().context("failed to open terminal")?;
    let renderer = Renderer::new(RendererConfig {
        show_hints: config.display.hints,
    });

    let mut runtime = Runtime::new(state, terminal, TerminalAcknowledgement::new(config.output.format))
        .with_renderer(renderer);
    let outcome = runtime.run().context("terminal session failed")?;

    if outcome == RunOutcome::Submitted {
        let mut acknowledgement = runtime.into_sink();
        acknowledgement.emit(&mut io::stdout().lock())?;
    }

    Ok(())
}

fn parse_assignment(raw: &str) -> Result<(FieldId, String), FormError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| FormError::InvalidAssignment(raw.to_string()))?;
    Ok((name.parse()?, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_assignment;
    use stepform::{FieldId, FormError};

    #[test]
    fn assignment_splits_on_first_equals() {
        let (field, value) = parse_assignment("email=a=b@x.com").expect("assignment");
        assert_eq!(field, FieldId::Email);
        assert_eq!(value, "a=b@x.com");
    }

    #[test]
    fn assignment_errors() {
        assert!(matches!(parse_assignment("name"), Err(FormError::InvalidAssignment(_))));
        assert!(matches!(parse_assignment("phone=1"), Err(FormError::UnknownField(_))));
    }
}
