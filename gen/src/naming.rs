//! Naming rules for generated accessors and output files.
//!
//! The accessor rule is a compatibility contract: hand-written contract
//! bodies and application code reference the generated `getX`/`setX` names,
//! so the mapping from field name to accessor name must never drift.

/// Derives the getter name for a field.
///
/// Rules, applied in order:
/// - an empty name is returned unchanged;
/// - a name whose first character is not a lowercase letter is returned
///   unchanged (the escape hatch for fields that do not follow the
///   convention);
/// - otherwise the result is `"get"` + uppercased first character + rest.
///
/// ## Examples
///
/// ```
/// use chainapi_gen::naming::field_to_getter;
///
/// assert_eq!(field_to_getter("id"), "getId");
/// assert_eq!(field_to_getter("ownerId"), "getOwnerId");
/// assert_eq!(field_to_getter("ID"), "ID");
/// assert_eq!(field_to_getter(""), "");
/// ```
pub fn field_to_getter(field_name: &str) -> String {
    cast_accessor("get", field_name)
}

/// Derives the setter name for a field. Same rules as [`field_to_getter`],
/// with a `"set"` prefix.
pub fn field_to_setter(field_name: &str) -> String {
    cast_accessor("set", field_name)
}

fn cast_accessor(prefix: &str, field_name: &str) -> String {
    let mut chars = field_name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) if !first.is_lowercase() => field_name.to_string(),
        Some(first) => {
            let mut out = String::with_capacity(field_name.len() + prefix.len() + 1);
            out.push_str(prefix);
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
    }
}

/// Maps a generated type name to the module file it is written to.
///
/// CamelCase becomes snake_case, with acronym runs kept together:
/// `AssetSubmitApi` -> `asset_submit_api`, `AssetAPI` -> `asset_api`.
///
/// ## Examples
///
/// ```
/// use chainapi_gen::naming::type_to_module_name;
///
/// assert_eq!(type_to_module_name("ProposedSubmit"), "proposed_submit");
/// assert_eq!(type_to_module_name("ContractApiInjectable"), "contract_api_injectable");
/// ```
pub fn type_to_module_name(type_name: &str) -> String {
    let chars: Vec<char> = type_name.chars().collect();
    let mut out = String::with_capacity(type_name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev_is_lower = i > 0 && chars[i - 1].is_lowercase();
            let next_is_lower = i + 1 < chars.len() && chars[i + 1].is_lowercase();
            if i > 0 && (prev_is_lower || next_is_lower) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
