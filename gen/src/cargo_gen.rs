//! Cargo manifest emission for crate-shaped output.
//!
//! Generated source trees are meant to be consumed as a standalone crate
//! next to the application or contract that uses them. This module writes
//! the `Cargo.toml` that turns an output directory into that crate.

use std::path::Path;

use crate::errors::GeneratorError;
use crate::output::write_atomic;
use crate::validation::validate_namespace;

/// Renders the manifest for a generated crate.
///
/// The package depends on exactly what generated code references: `serde`
/// for the derive attributes on records and the envelope, `serde_json` as
/// the codec's wire format, and `chainapi-runtime` (by path) for the
/// transport, codec, context, and error types.
pub fn render_cargo_toml(namespace: &str, runtime_path: &str) -> Result<String, GeneratorError> {
    validate_namespace(namespace)?;
    Ok(format!(
        r#"# Generated by chainapi-gen. Do not edit manually.

[package]
name = "{namespace}"
version = "0.1.0"
edition = "2024"

[dependencies]
serde = {{ version = "1.0", features = ["derive"] }}
serde_json = "1.0"
chainapi-runtime = {{ path = "{runtime_path}" }}
"#
    ))
}

/// Writes the manifest into `package_dir` (the directory holding the
/// generated `src/`). With `dry_run` the manifest is rendered and validated
/// but not written.
pub fn write_cargo_toml(
    package_dir: &Path,
    namespace: &str,
    runtime_path: &str,
    dry_run: bool,
) -> Result<(), GeneratorError> {
    let manifest = render_cargo_toml(namespace, runtime_path)?;
    if dry_run {
        return Ok(());
    }
    write_atomic(&package_dir.join("Cargo.toml"), &manifest)
}
