use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use luagen_core::CodeGenerator;
use luagen_core::config::{self, CONFIG_FILE_NAME, LuagenConfig};
use luagen_core::ir::SdkContext;
use luagen_core::{parse, transform};
use luagen_lua::LuaClientGenerator;

#[derive(Parser)]
#[command(name = "luagen", about = "OpenAPI to Lua client generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the Lua client from an API document
    Generate {
        /// Path to the API document (YAML or JSON); overrides the config file
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Validate an API document by running the full pipeline
    Validate {
        /// Path to the API document
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Inspect the normalized render-context of an API document
    Inspect {
        /// Path to the API document
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new luagen configuration
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input } => cmd_generate(input),

        Commands::Validate { input } => cmd_validate(&input),

        Commands::Inspect { input, format } => cmd_inspect(&input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "luagen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<LuagenConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn load_context(path: &Path) -> Result<SdkContext> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let parsed = match ext {
        "json" => parse::from_json(&content)?,
        _ => parse::from_yaml(&content)?,
    };

    Ok(transform::transform(&parsed)?)
}

fn cmd_generate(input: Option<PathBuf>) -> Result<()> {
    let config = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&config.input));

    let ctx = load_context(&input)?;
    let files = LuaClientGenerator.generate(&ctx, &config)?;

    let output = PathBuf::from(&config.output);
    let out_dir = output.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = out_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    // A single output path is configured; the generator emits one module.
    for file in &files {
        fs::write(&output, &file.content)
            .with_context(|| format!("failed to write {}", output.display()))?;
        log::info!("wrote {} ({} bytes)", output.display(), file.content.len());
        println!("generated {}", output.display());
    }

    Ok(())
}

fn cmd_validate(input: &Path) -> Result<()> {
    let ctx = load_context(input)?;
    println!(
        "{} is valid: {} operations, {} request bodies",
        input.display(),
        ctx.operations.len(),
        ctx.request_bodies.len()
    );
    Ok(())
}

fn cmd_inspect(input: &Path, format: InspectFormat) -> Result<()> {
    let ctx = load_context(input)?;
    let rendered = match format {
        InspectFormat::Yaml => serde_yaml_ng::to_string(&ctx)?,
        InspectFormat::Json => serde_json::to_string_pretty(&ctx)?,
    };
    println!("{rendered}");
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }
    fs::write(&config_path, config::default_config_content())
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    println!("created {}", config_path.display());
    Ok(())
}
