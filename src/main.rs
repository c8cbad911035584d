//! LexDZ TUI - Terminal forms for Algerian legal texts and administrative procedures
//!
//! A Ratatui-based TUI for entering legal texts and procedures, by hand or
//! from OCR text run through an external structured extractor.

mod app;
mod config;
mod events;
mod extract;
mod platform;
mod state;
mod submit;
mod templates;
mod ui;

use anyhow::{anyhow, Context, Result};
use app::{App, AppOptions};
use clap::Parser;
use config::LexConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use extract::{CommandExtractor, Extractor};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::{FormKind, InputMethod};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use submit::JsonFileSink;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments; each one overrides the config file
#[derive(Parser, Debug)]
#[command(name = "lexdz-tui")]
#[command(about = "Saisie de textes juridiques et de procédures administratives")]
#[command(version)]
struct Cli {
    /// Form opened at startup (legal-text, procedure, procedure-wizard)
    #[arg(short, long, env = "LEXDZ_FORM")]
    form: Option<String>,

    /// Input method of new forms (manual, ocr)
    #[arg(short, long, env = "LEXDZ_INPUT_METHOD")]
    input_method: Option<String>,

    /// OCR text file to extract into a legal text form at startup
    #[arg(long)]
    ocr_text_file: Option<PathBuf>,

    /// Directory receiving submitted forms
    #[arg(short, long, env = "LEXDZ_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Command line of the structured extractor
    #[arg(short, long, env = "LEXDZ_EXTRACTOR")]
    extractor: Option<String>,

    /// Write the resulting configuration to the user config file and exit
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    fn apply_to(&self, config: &mut LexConfig) {
        if let Some(form) = &self.form {
            config.default_form = Some(form.clone());
        }
        if let Some(method) = &self.input_method {
            config.default_input_method = Some(method.clone());
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = Some(dir.clone());
        }
        if let Some(command) = &self.extractor {
            config.extractor_command = Some(command.clone());
        }
    }
}

fn build_options(config: &LexConfig, initial_ocr_text: Option<String>) -> Result<AppOptions> {
    let start_form = config
        .default_form
        .as_deref()
        .map(|slug| FormKind::from_slug(slug).ok_or_else(|| anyhow!("unknown form: {slug}")))
        .transpose()?;

    let input_method = config
        .default_input_method
        .as_deref()
        .map(|m| InputMethod::parse(m).ok_or_else(|| anyhow!("unknown input method: {m}")))
        .transpose()?
        .unwrap_or_default();

    let extractor = config
        .extractor_command
        .as_deref()
        .and_then(CommandExtractor::from_command_line)
        .map(|e| match config.extractor_timeout_secs {
            Some(secs) => e.with_timeout(Duration::from_secs(secs)),
            None => e,
        })
        .map(|e| Arc::new(e) as Arc<dyn Extractor>);
    if extractor.is_none() {
        tracing::info!("No extractor configured, OCR text is kept unstructured");
    }

    let output_dir = config.resolved_output_dir();
    tracing::info!("Submissions are written to {}", output_dir.display());

    Ok(AppOptions {
        extractor,
        sink: Arc::new(JsonFileSink::new(output_dir)),
        start_form,
        input_method,
        initial_ocr_text,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lexdz_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = LexConfig::load().context("Failed to load configuration")?;
    cli.apply_to(&mut config);

    if cli.save_config {
        config.save().context("Failed to save configuration")?;
        if let Some(path) = LexConfig::config_path() {
            println!("Configuration enregistrée dans {}", path.display());
        }
        return Ok(());
    }

    let initial_ocr_text = cli
        .ocr_text_file
        .as_ref()
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))
        })
        .transpose()?;
    let options = build_options(&config, initial_ocr_text)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(options);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll faster while an extraction may complete
        let poll_duration = if app.extraction_pending() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key).await?;
                }
            }
        }

        // Let spawned extractions make progress and collect their results
        tokio::task::yield_now().await;
        app.drain_background();

        if app.should_quit() {
            return Ok(());
        }
    }
}
