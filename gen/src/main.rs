//! Command-line entry point for the chainapi generator.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use chainapi_define::ContractSchema;
use chainapi_definitions::define_asset_schema;
use chainapi_gen::cargo_gen::write_cargo_toml;
use chainapi_gen::errors::GeneratorError;
use chainapi_gen::output::generate;

/// Generates contract-side or client-side source from a contract schema.
#[derive(Debug, Parser)]
#[command(name = "chainapi-gen", version, about)]
struct Cli {
    /// Generation target: "contract" (server skeleton) or "client" (proxy
    /// library).
    #[arg(long, default_value = "client")]
    backend: String,

    /// Package directory to generate into; sources land under `<out>/src`.
    #[arg(long, default_value = "generated")]
    out: PathBuf,

    /// Name of the generated crate/module.
    #[arg(long, default_value = "contract_api")]
    namespace: String,

    /// JSON schema file to generate from. Defaults to the built-in asset
    /// ledger schema.
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Also write a Cargo.toml into the package directory.
    #[arg(long)]
    emit_manifest: bool,

    /// Path to the chainapi-runtime crate, relative to the package
    /// directory. Only used with --emit-manifest.
    #[arg(long, default_value = "../runtime")]
    runtime_path: String,

    /// Build and validate everything without touching the filesystem.
    #[arg(long)]
    dry_run: bool,

    /// Print each generated file name.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_schema(path: &PathBuf) -> Result<ContractSchema, GeneratorError> {
    let contents = std::fs::read_to_string(path).map_err(|e| GeneratorError::SchemaFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&contents).map_err(|e| GeneratorError::SchemaFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn run(cli: &Cli) -> Result<(), GeneratorError> {
    let schema = match &cli.schema {
        Some(path) => load_schema(path)?,
        None => define_asset_schema(),
    };

    let src_dir = cli.out.join("src");
    let files = generate(&schema, &src_dir, &cli.namespace, &cli.backend, cli.dry_run)?;
    if cli.emit_manifest {
        write_cargo_toml(&cli.out, &cli.namespace, &cli.runtime_path, cli.dry_run)?;
    }

    if cli.verbose > 0 {
        for file in &files {
            println!("  {} {}", "generated".dimmed(), file);
        }
    }

    let action = if cli.dry_run { "validated" } else { "generated" };
    println!(
        "{} {} {} unit(s) for schema '{}' into {}",
        "✓".green().bold(),
        action,
        files.len(),
        schema.name,
        src_dir.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
