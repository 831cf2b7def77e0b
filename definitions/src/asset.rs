//! Asset ledger schema definition.
//!
//! A small asset-tracking contract: assets are created, updated, deleted and
//! queried by id, with ownership and timestamp bookkeeping stored on the
//! ledger.

use chainapi_define::{ApiGroupDef, CallMode, ContractSchema, MethodDef, RecordDef};

/// Creates the asset ledger schema.
///
/// ## Shape
///
/// - Record `Asset` with identity, ownership and timestamp fields
/// - Submit group `AssetSubmitApi`: `createAsset`, `updateAsset`,
///   `deleteAsset`
/// - Evaluate group `AssetQueryApi`: `findAsset`, `findAllAsset`
/// - Aggregator `ContractApi` naming the composite contract surface
///
/// ## Examples
///
/// ```
/// use chainapi_definitions::define_asset_schema;
///
/// let schema = define_asset_schema();
/// assert_eq!(schema.aggregator_name, "ContractApi");
/// assert_eq!(schema.api_groups.len(), 2);
/// ```
pub fn define_asset_schema() -> ContractSchema {
    ContractSchema::new("asset-ledger", "ContractApi")
        .record(
            RecordDef::new("Asset")
                .field("id", "String")
                .field("creatorId", "String")
                .field("ownerId", "String")
                .field("createTime", "i64")
                .field("lastTransferTime", "i64")
                .field("lastUpdateTime", "i64")
                .field("value", "String"),
        )
        .api_group(
            ApiGroupDef::new("AssetSubmitApi", CallMode::Submit)
                .method(MethodDef::new("createAsset", "Asset").param("value", "String"))
                .method(
                    MethodDef::new("updateAsset", "Asset")
                        .param("assetId", "String")
                        .param("value", "String"),
                )
                .method(MethodDef::new("deleteAsset", "Asset").param("assetId", "String")),
        )
        .api_group(
            ApiGroupDef::new("AssetQueryApi", CallMode::Evaluate)
                .method(MethodDef::new("findAsset", "Asset").param("assetId", "String"))
                .method(MethodDef::new("findAllAsset", "Vec<Asset>")),
        )
}
