//! The schema container consumed by the generator.

use serde::{Deserialize, Serialize};

use crate::api::ApiGroupDef;
use crate::record::RecordDef;

/// A complete contract API schema.
///
/// Holds the records and API groups to generate code for, plus the single
/// designated aggregator name used to name the composite contract surface
/// (a trait aggregating every group on the contract side, a concrete struct
/// implementing every group on the client side).
///
/// The schema is fully populated before generation starts and is never
/// mutated by the generator. Serde derives allow a schema to be authored as
/// a JSON document and loaded by the `chainapi-gen` CLI.
///
/// ## Examples
///
/// ```
/// use chainapi_define::{ApiGroupDef, CallMode, ContractSchema, MethodDef, RecordDef};
///
/// let schema = ContractSchema::new("asset-ledger", "ContractApi")
///     .record(RecordDef::new("Asset").field("id", "String"))
///     .api_group(
///         ApiGroupDef::new("AssetQueryApi", CallMode::Evaluate)
///             .method(MethodDef::new("findAsset", "Asset").param("assetId", "String")),
///     );
///
/// assert_eq!(schema.aggregator_name, "ContractApi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSchema {
    /// Human-readable schema name, used in diagnostics only.
    pub name: String,
    /// Name of the composite aggregator trait/struct.
    pub aggregator_name: String,
    /// Record definitions, in declaration order.
    pub records: Vec<RecordDef>,
    /// API group definitions, in declaration order.
    pub api_groups: Vec<ApiGroupDef>,
}

impl ContractSchema {
    /// Creates an empty schema.
    pub fn new(name: impl Into<String>, aggregator_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aggregator_name: aggregator_name.into(),
            records: Vec::new(),
            api_groups: Vec::new(),
        }
    }

    /// Registers a record definition.
    pub fn record(mut self, record: RecordDef) -> Self {
        self.records.push(record);
        self
    }

    /// Registers an API group definition.
    pub fn api_group(mut self, group: ApiGroupDef) -> Self {
        self.api_groups.push(group);
        self
    }
}
