//! # aegis
//!
//! Command-line front end for the landing page's static export.
//!
//! ```bash
//! aegis render --out dist/index.html
//! aegis check
//! aegis content --pretty
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use aegis_export::config::{AegisConfig, CONFIG_FILE};
use aegis_export::error::ExportError;
use aegis_export::{export_page, render_checked};
use aegis_site::content::site_content;

#[derive(Parser, Debug)]
#[command(name = "aegis")]
#[command(about = "Render and check the Aegis Applied Computing landing page")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page to a standalone HTML file
    Render {
        /// Output file (default: from config, else dist/index.html)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Config file (default: ./aegis.toml)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the document title
        #[arg(long)]
        title: Option<String>,
    },
    /// Render in memory and verify anchors and section order
    Check {
        /// Config file (default: ./aegis.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the page content as JSON
    Content {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[aegis] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout carries command output.
fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

fn load_config(path: Option<PathBuf>) -> AegisConfig {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            AegisConfig::load_explicit(&path)
        }
        None => AegisConfig::load_from_path(Path::new(CONFIG_FILE)),
    }
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Render { out, config, title } => {
            let config = load_config(config);
            let mut meta = config.page_meta();
            if let Some(title) = title {
                meta.title = title;
            }
            let out = out.unwrap_or(config.export.output);

            info!("Rendering aegis-site v{}", env!("CARGO_PKG_VERSION"));
            let report = export_page(&meta, &out)
                .with_context(|| format!("failed to export page to {}", out.display()))?;
            println!("{} ({} bytes)", report.path.display(), report.bytes);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { config } => {
            let config = load_config(config);
            match render_checked(&config.page_meta()) {
                Ok(_) => {
                    println!("ok: anchors resolve, sections in order");
                    Ok(ExitCode::SUCCESS)
                }
                Err(ExportError::BrokenPage { problems }) => {
                    for problem in &problems {
                        println!("{}", problem);
                    }
                    eprintln!("[aegis] {} problem(s) found", problems.len());
                    Ok(ExitCode::FAILURE)
                }
                Err(e) => Err(e).context("failed to check page"),
            }
        }
        Command::Content { pretty } => {
            let content = site_content();
            let json = if pretty {
                serde_json::to_string_pretty(&content)
            } else {
                serde_json::to_string(&content)
            }
            .context("failed to serialize page content")?;
            println!("{}", json);
            Ok(ExitCode::SUCCESS)
        }
    }
}
