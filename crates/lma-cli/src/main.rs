mod serve;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use lma_core::config::{self, CONFIG_FILE_NAME, LmaConfig};
use lma_core::descriptor;
use lma_core::validate;
use lma_core::{Generator, SpecVersion};

use serve::AppState;

#[derive(Parser)]
#[command(
    name = "lma",
    about = "OpenAPI document for the library management API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the documents and the documentation viewer
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory holding the viewer's static assets
        #[arg(long)]
        ui_dir: Option<PathBuf>,
    },

    /// Write the OpenAPI document as JSON
    Generate {
        /// OpenAPI version to render (3.0 or 3.1)
        #[arg(short, long)]
        spec_version: Option<SpecVersion>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a document for dangling references
    Validate {
        /// Previously generated document (JSON); checks both built-in
        /// versions if omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Initialize a new lma configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, ui_dir } => cmd_serve(port, ui_dir),

        Commands::Generate {
            spec_version,
            output,
        } => cmd_generate(spec_version, output),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "lma", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<LmaConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn cmd_serve(port: Option<u16>, ui_dir: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let state = AppState {
        generator: Generator::new(cfg.document),
        default_version: cfg.default_version,
        port: port.unwrap_or(cfg.server.port),
        ui_dir: ui_dir.unwrap_or(cfg.server.ui_dir),
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;
    runtime.block_on(serve::run(state))
}

fn cmd_generate(spec_version: Option<SpecVersion>, output: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let version = spec_version.unwrap_or(cfg.default_version);
    let generator = Generator::new(cfg.document);
    let json = generator
        .generate(version)
        .with_context(|| format!("failed to render OpenAPI {version} document"))?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {}", parent.display()))?;
            }
            fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Wrote OpenAPI {} document to {}", version.openapi(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_validate(input: Option<PathBuf>) -> Result<()> {
    let documents = match input {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let document = descriptor::from_json(&content)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            vec![(path.display().to_string(), document)]
        }
        None => {
            let cfg = try_load_config()?.unwrap_or_default();
            let generator = Generator::new(cfg.document);
            SpecVersion::ALL
                .iter()
                .map(|&v| generator.document(v).map(|d| (format!("built-in {v}"), d)))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    let mut failures = 0;
    for (label, document) in &documents {
        let report = validate::check_document(document)?;
        eprintln!(
            "{label}: OpenAPI {} document: {}",
            document.openapi, document.info.title
        );
        eprintln!("  Paths: {}", document.paths.len());
        eprintln!("  Schemas: {}", document.components.schemas.len());
        eprintln!("  References: {}", report.references);
        for reference in &report.dangling {
            eprintln!("  dangling {} at {}", reference.target, reference.location);
        }
        failures += report.dangling.len();
    }

    if failures > 0 {
        anyhow::bail!("{failures} dangling reference(s) found");
    }
    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
