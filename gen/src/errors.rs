//! Error types for the chainapi generator.

use thiserror::Error;

/// Errors that can occur during code generation.
///
/// Every variant is fatal: generation is all-or-nothing, and a failure after
/// the output directory has been cleaned leaves an empty or partially
/// populated tree that callers must treat as build-invalidating.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Two records share a name.
    #[error("duplicate record '{name}' in schema")]
    DuplicateRecord { name: String },

    /// Two API groups share a name.
    #[error("duplicate API group '{name}' in schema")]
    DuplicateGroup { name: String },

    /// Two methods share a name within one group.
    #[error("duplicate method '{method}' in API group '{group}'")]
    DuplicateMethod { group: String, method: String },

    /// A method name appears in more than one group.
    ///
    /// Method names are the remote dispatch keys, so a cross-group collision
    /// would make two generated default bodies race for one remote method.
    /// This is a hard schema error, never a silent overwrite.
    #[error(
        "method '{method}' is declared in both '{first_group}' and '{second_group}': method names are remote dispatch keys and must be unique across groups"
    )]
    MethodCollision {
        method: String,
        first_group: String,
        second_group: String,
    },

    /// A schema name collides with a type the backend synthesizes.
    #[error("schema name '{name}' collides with the generated {shape} type")]
    ReservedName { name: String, shape: String },

    /// Two generated units would be written to the same file.
    ///
    /// Unit files are named by snake_casing the type name, so distinct type
    /// names can still collide on disk (`AssetApi` and `AssetAPI` both map
    /// to `asset_api.rs`). A collision would silently overwrite one unit
    /// and duplicate its module declaration, so it is a hard schema error.
    #[error(
        "'{second}' maps to generated file '{file}', which is already taken by {first}: rename one so their snake_case forms differ"
    )]
    UnitFileCollision {
        first: String,
        second: String,
        file: String,
    },

    /// A name that must become a Rust identifier is empty or malformed.
    #[error("invalid identifier '{name}' for {context}")]
    InvalidIdentifier { name: String, context: String },

    /// A type-name string does not parse as a Rust type.
    #[error("cannot resolve type name '{name}': {reason}")]
    InvalidTypeName { name: String, reason: String },

    /// The requested output namespace is not usable as a module/crate name.
    #[error("invalid namespace '{namespace}': {reason}")]
    InvalidNamespace { namespace: String, reason: String },

    /// A generated unit failed `syn` validation.
    ///
    /// This is an internal invariant violation, not a schema-author error:
    /// every unit is parsed as a complete Rust file before being written.
    #[error("generated code for '{unit}' is invalid: {reason}")]
    CodeGen { unit: String, reason: String },

    /// Failed to clean the output directory before regeneration.
    #[error("failed to clean output directory '{path}': {source}")]
    Clean {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to persist a generated unit.
    #[error("failed to write generated unit '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The requested backend kind is not recognized.
    #[error("unrecognized backend kind '{0}' (expected \"contract\" or \"client\")")]
    UnknownBackend(String),

    /// An external schema file could not be read or parsed.
    #[error("failed to load schema from '{path}': {reason}")]
    SchemaFile { path: String, reason: String },
}
