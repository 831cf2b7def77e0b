//! API group and method definitions.
//!
//! An [`ApiGroupDef`] names a set of remote-callable methods sharing one
//! [`CallMode`]. The generator emits a trait per group: abstract handler
//! declarations on the contract side, default proxy bodies on the client
//! side.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Call mode of an API group.
///
/// Submit methods mutate remote state and resolve through a pending commit;
/// Evaluate methods are read-only and return synchronously.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use chainapi_define::CallMode;
///
/// assert_eq!(CallMode::from_str("submit").unwrap(), CallMode::Submit);
/// assert_eq!(CallMode::Evaluate.to_string(), "evaluate");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CallMode {
    /// Write-style call yielding a pending, eventually-resolvable result.
    Submit,
    /// Read-only call returning a result synchronously.
    Evaluate,
}

/// A single API method: name, return type, and ordered parameters.
///
/// Parameter order is semantically significant: it becomes positional
/// call-argument order in generated client invocation code.
///
/// ## Examples
///
/// ```
/// use chainapi_define::MethodDef;
///
/// let method = MethodDef::new("updateAsset", "Asset")
///     .param("assetId", "String")
///     .param("value", "String");
///
/// assert_eq!(method.parameters[0].0, "assetId");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDef {
    /// Method name. Unique within its group, and across groups, since
    /// method names are the remote dispatch keys.
    pub name: String,
    /// Type name of the envelope body the method resolves to.
    pub return_type: String,
    /// Ordered `(name, type_name)` parameter pairs.
    pub parameters: Vec<(String, String)>,
}

impl MethodDef {
    /// Creates a parameterless method definition.
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            parameters: Vec::new(),
        }
    }

    /// Appends a parameter, preserving declaration order.
    pub fn param(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.parameters.push((name.into(), type_name.into()));
        self
    }
}

/// A named group of methods sharing a call mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiGroupDef {
    /// Group name. Becomes the generated trait name.
    pub name: String,
    /// Call mode shared by every method in the group.
    pub mode: CallMode,
    /// Methods keyed by name (unique within the group).
    pub methods: Vec<MethodDef>,
}

impl ApiGroupDef {
    /// Creates an empty group with the given name and mode.
    pub fn new(name: impl Into<String>, mode: CallMode) -> Self {
        Self {
            name: name.into(),
            mode,
            methods: Vec::new(),
        }
    }

    /// Appends a method, preserving declaration order.
    pub fn method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }
}
