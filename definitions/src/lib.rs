//! Schema definitions built from `chainapi-define` primitives.
//!
//! This crate holds concrete, hand-authored schemas. The `chainapi-gen` CLI
//! falls back to [`asset::define_asset_schema`] when no external schema file
//! is supplied, which makes the asset ledger double as the end-to-end test
//! fixture for both backends.

pub mod asset;

pub use asset::define_asset_schema;
