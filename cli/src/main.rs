//! `panelctl`: headless host for the panel editor core.

mod script;

use std::fs;
use std::io::{self, Read};

use clap::{Parser, Subcommand};
use panelboard::catalog::Catalog;
use panelboard::config::EditorConfig;
use panelboard::engine::EngineCore;
use panelboard::error::EditorError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("io failed for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid script: {0}")]
    Script(#[from] serde_json::Error),
    #[error(transparent)]
    Editor(#[from] EditorError),
}

#[derive(Parser, Debug)]
#[command(name = "panelctl", about = "Electrical panel layout editor CLI")]
struct Cli {
    #[arg(long, help = "Overrides PANEL_CANVAS_WIDTH")]
    canvas_width: Option<String>,

    #[arg(long, help = "Overrides PANEL_CANVAS_HEIGHT")]
    canvas_height: Option<String>,

    #[arg(long, help = "Overrides PANEL_EXPORT_FILE")]
    export_file: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the component templates available for placement.
    Catalog {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Run a JSON array of input events and export the resulting layout.
    Replay {
        #[arg(help = "Script file path, or - for stdin")]
        script: String,

        #[arg(long, help = "Output file path, or - for stdout")]
        out: Option<String>,
    },
}

impl Cli {
    fn editor_config(&self) -> Result<EditorConfig, EditorError> {
        EditorConfig::from_env()?.with_overrides(|key| match key {
            "PANEL_CANVAS_WIDTH" => self.canvas_width.clone(),
            "PANEL_CANVAS_HEIGHT" => self.canvas_height.clone(),
            "PANEL_EXPORT_FILE" => self.export_file.clone(),
            _ => None,
        })
    }
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.editor_config()?;

    match cli.command {
        Command::Catalog { json } => print_catalog(&Catalog::default(), json),
        Command::Replay { script, out } => {
            let text = read_input(&script)?;
            let events = script::parse_script(&text)?;
            let mut core = EngineCore::with_config(config, Catalog::default());
            let out = out.unwrap_or_else(|| core.export_file_name().to_string());

            let summary = script::replay(&mut core, events);
            tracing::info!(events = summary.events, actions = summary.actions, "script replayed");

            let rendered = core.export_json()?;
            write_output(&out, &rendered)?;
            if out != "-" {
                eprintln!(
                    "wrote {} components and {} wires to {out}",
                    core.doc.len(),
                    core.doc.wires().len()
                );
            }
            Ok(())
        }
    }
}

fn print_catalog(catalog: &Catalog, json: bool) -> Result<(), CliError> {
    if json {
        let rendered = serde_json::to_string_pretty(catalog.templates())?;
        println!("{rendered}");
        return Ok(());
    }
    for t in catalog.templates() {
        println!("{:<16} {:<18} {:>4}x{:<4} {}", t.type_id, t.name, t.width, t.height, t.color);
    }
    Ok(())
}

fn read_input(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| CliError::Io { path: "<stdin>".to_string(), source })?;
        return Ok(text);
    }
    fs::read_to_string(path).map_err(|source| CliError::Io { path: path.to_string(), source })
}

fn write_output(path: &str, rendered: &str) -> Result<(), CliError> {
    if path == "-" {
        println!("{rendered}");
        return Ok(());
    }
    fs::write(path, rendered).map_err(|source| CliError::Io { path: path.to_string(), source })
}
