//! Convenient re-exports for authoring schemas.
//!
//! ## Examples
//!
//! ```
//! use chainapi_define::prelude::*;
//!
//! let schema = ContractSchema::new("demo", "ContractApi")
//!     .record(RecordDef::new("Asset").field("id", "String"));
//! assert_eq!(schema.records.len(), 1);
//! ```

pub use crate::api::{ApiGroupDef, CallMode, MethodDef};
pub use crate::record::{FieldDef, RecordDef};
pub use crate::schema::ContractSchema;
