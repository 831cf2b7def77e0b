//! Chainapi code generator library.
//!
//! This crate turns a [`chainapi_define::ContractSchema`] into one of two
//! ready-to-compile Rust source trees that must stay behaviorally consistent
//! with each other:
//!
//! - the **contract** backend emits the server-side skeleton: ledger-tagged
//!   record structs, abstract per-group handler traits taking an execution
//!   context, a composite contract trait, and the `Response<T>` envelope;
//! - the **client** backend emits the application-side proxy: wire-tagged
//!   record structs, per-group traits with default bodies that invoke the
//!   remote transport and decode results, the `ProposedSubmit<T>` deferred
//!   result, the injectable-capability trait, and a concrete aggregator.
//!
//! Both backends share one orchestrator and one memoizing type resolver;
//! they differ only in the shapes they emit for the same input.
//!
//! ## Modules
//!
//! - [`backend`] - The `Backend` strategy trait and both implementations
//! - [`output`] - Orchestration, validation, formatting, and file writing
//! - [`resolver`] - Memoized type-name resolution
//! - [`validation`] - Pre-generation schema checks
//! - [`naming`] - Accessor and module-file naming rules
//! - [`cargo_gen`] - Cargo.toml emission for crate-shaped output
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use chainapi_definitions::define_asset_schema;
//! use chainapi_gen::output::generate;
//!
//! let schema = define_asset_schema();
//! generate(&schema, Path::new("generated/src"), "asset_api", "client", false).unwrap();
//! ```
//!
//! ## Regeneration policy
//!
//! Generation is a one-shot batch transform: the output directory is deleted
//! recursively and rebuilt from scratch on every run, so no stale unit from a
//! previous schema can linger. Two runs over the same schema produce
//! byte-identical trees.

pub mod backend;
pub mod cargo_gen;
pub mod errors;
pub mod naming;
pub mod output;
pub mod resolver;
pub mod validation;
