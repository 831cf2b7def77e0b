//! Chainapi Definition Library
//!
//! This crate provides types (primitives) for describing ledger contract APIs
//! in a declarative way. A schema names the data records stored on the ledger
//! and the remote-callable API groups that operate on them. These definitions
//! are consumed by the `chainapi-gen` binary to generate two consistent code
//! trees: a contract-side implementation skeleton and a client-side proxy
//! library.
//!
//! ## Core Types
//!
//! - [`ContractSchema`] - A complete schema: records, API groups, and the
//!   aggregator name used for the composite contract surface
//! - [`RecordDef`] - A named data-record type with ordered fields
//! - [`FieldDef`] - A single record field (name plus type-name string)
//! - [`ApiGroupDef`] - A named group of methods sharing a call mode
//! - [`MethodDef`] - A method with return type and ordered parameters
//! - [`CallMode`] - Submit (write) or Evaluate (read-only)
//!
//! ## Examples
//!
//! Define a minimal asset schema:
//!
//! ```
//! use chainapi_define::{ApiGroupDef, CallMode, ContractSchema, MethodDef, RecordDef};
//!
//! let schema = ContractSchema::new("asset-ledger", "ContractApi")
//!     .record(
//!         RecordDef::new("Asset")
//!             .field("id", "String")
//!             .field("value", "String"),
//!     )
//!     .api_group(
//!         ApiGroupDef::new("AssetQueryApi", CallMode::Evaluate)
//!             .method(MethodDef::new("findAsset", "Asset").param("assetId", "String")),
//!     );
//!
//! assert_eq!(schema.records.len(), 1);
//! assert_eq!(schema.api_groups[0].mode, CallMode::Evaluate);
//! ```
//!
//! Type names are carried as strings and are not checked against any real
//! type system here; an unresolvable name surfaces when the generated
//! artifacts compile, not at definition time. Name uniqueness inside the
//! schema container is the author's responsibility and is enforced by the
//! generator's validation pass before any code is emitted.
//!
//! Actual schema definitions (like the asset ledger example) live in the
//! separate `chainapi-definitions` crate.

pub mod api;
pub mod prelude;
pub mod record;
pub mod schema;

// Re-export main types at crate root
pub use api::{ApiGroupDef, CallMode, MethodDef};
pub use record::{FieldDef, RecordDef};
pub use schema::ContractSchema;
