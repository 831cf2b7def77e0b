//! Pre-generation schema checks.
//!
//! Validation runs before the output directory is touched, so a rejected
//! schema never destroys the previous generation. Every check maps to a
//! `GeneratorError` variant with enough context to fix the schema without
//! reading generator internals.

use std::collections::HashMap;
use std::collections::HashSet;

use chainapi_define::ContractSchema;

use crate::backend::{INJECTABLE_TYPE_NAME, PROPOSED_SUBMIT_TYPE_NAME, RESPONSE_TYPE_NAME};
use crate::errors::GeneratorError;
use crate::naming::type_to_module_name;

/// Type names the backends synthesize themselves. A schema-declared record
/// or group reusing one of these would silently overwrite a generated unit.
const RESERVED_TYPE_NAMES: &[&str] = &[
    RESPONSE_TYPE_NAME,
    PROPOSED_SUBMIT_TYPE_NAME,
    INJECTABLE_TYPE_NAME,
];

/// Validates a schema against every structural rule the backends assume.
///
/// Checks, in order: identifier well-formedness for every name, type-name
/// parseability, duplicate records and groups, reserved-name collisions,
/// unit-file collisions (distinct names sharing one snake_case file, or
/// shadowing a synthesized unit's file or the library root), duplicate
/// methods within a group, and method-name collisions across groups
/// (method names are remote dispatch keys, so they must be globally
/// unique).
///
/// ## Errors
///
/// Returns the first violation found. Validation is fail-fast rather than
/// accumulating: schemas are small and hand-written, one actionable error at
/// a time is the useful shape.
pub fn validate_schema(schema: &ContractSchema) -> Result<(), GeneratorError> {
    check_identifier(&schema.aggregator_name, "aggregator name")?;
    check_reserved(&schema.aggregator_name)?;

    // Unit files are claimed as names are checked: synthesized units and the
    // library root first, then the aggregator, then schema names. Distinct
    // type names can share a snake_case form, and file collisions would
    // silently overwrite a unit.
    let mut unit_files: HashMap<String, String> = HashMap::new();
    unit_files.insert("lib".to_string(), "the generated library root".to_string());
    for reserved in RESERVED_TYPE_NAMES {
        unit_files.insert(
            type_to_module_name(reserved),
            format!("the generated `{reserved}` unit"),
        );
    }
    claim_unit_file(&mut unit_files, &schema.aggregator_name)?;

    let mut type_names: HashSet<&str> = HashSet::new();

    for record in &schema.records {
        check_identifier(&record.name, "record name")?;
        check_reserved(&record.name)?;
        if record.name == schema.aggregator_name {
            return Err(GeneratorError::ReservedName {
                name: record.name.clone(),
                shape: "aggregator".to_string(),
            });
        }
        if !type_names.insert(&record.name) {
            return Err(GeneratorError::DuplicateRecord {
                name: record.name.clone(),
            });
        }
        claim_unit_file(&mut unit_files, &record.name)?;
        let mut field_names: HashSet<&str> = HashSet::new();
        for field in &record.fields {
            check_identifier(&field.name, "record field")?;
            check_type_name(&field.type_name)?;
            if !field_names.insert(&field.name) {
                return Err(GeneratorError::InvalidIdentifier {
                    name: field.name.clone(),
                    context: format!("duplicate field in record '{}'", record.name),
                });
            }
        }
    }

    // Method name -> owning group, for the cross-group collision check.
    let mut method_owners: HashMap<&str, &str> = HashMap::new();

    for group in &schema.api_groups {
        check_identifier(&group.name, "API group name")?;
        check_reserved(&group.name)?;
        if group.name == schema.aggregator_name {
            return Err(GeneratorError::ReservedName {
                name: group.name.clone(),
                shape: "aggregator".to_string(),
            });
        }
        if !type_names.insert(&group.name) {
            return Err(GeneratorError::DuplicateGroup {
                name: group.name.clone(),
            });
        }
        claim_unit_file(&mut unit_files, &group.name)?;

        let mut local: HashSet<&str> = HashSet::new();
        for method in &group.methods {
            check_identifier(&method.name, "method name")?;
            check_type_name(&method.return_type)?;
            for (pname, ptype) in &method.parameters {
                check_identifier(pname, "method parameter")?;
                check_type_name(ptype)?;
            }
            if !local.insert(&method.name) {
                return Err(GeneratorError::DuplicateMethod {
                    group: group.name.clone(),
                    method: method.name.clone(),
                });
            }
            if let Some(first_group) = method_owners.insert(&method.name, &group.name) {
                return Err(GeneratorError::MethodCollision {
                    method: method.name.clone(),
                    first_group: first_group.to_string(),
                    second_group: group.name.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Validates the output namespace (the generated crate/module name).
///
/// Namespaces must be usable both as a Cargo package name and as a Rust
/// module path segment: nonempty, ASCII, starting with a lowercase letter or
/// underscore, containing only lowercase letters, digits, and underscores.
pub fn validate_namespace(namespace: &str) -> Result<(), GeneratorError> {
    let invalid = |reason: &str| GeneratorError::InvalidNamespace {
        namespace: namespace.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = namespace.chars();
    match chars.next() {
        None => return Err(invalid("namespace is empty")),
        Some(first) if !(first.is_ascii_lowercase() || first == '_') => {
            return Err(invalid(
                "must start with a lowercase ASCII letter or underscore",
            ));
        }
        Some(_) => {}
    }
    for c in chars {
        if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
            return Err(invalid(
                "may only contain lowercase ASCII letters, digits, and underscores",
            ));
        }
    }
    Ok(())
}

fn claim_unit_file(
    unit_files: &mut HashMap<String, String>,
    name: &str,
) -> Result<(), GeneratorError> {
    let file = type_to_module_name(name);
    if let Some(first) = unit_files.get(&file) {
        return Err(GeneratorError::UnitFileCollision {
            first: first.clone(),
            second: name.to_string(),
            file: format!("{file}.rs"),
        });
    }
    unit_files.insert(file, format!("'{name}'"));
    Ok(())
}

fn check_identifier(name: &str, context: &str) -> Result<(), GeneratorError> {
    if syn::parse_str::<syn::Ident>(name).is_err() {
        return Err(GeneratorError::InvalidIdentifier {
            name: name.to_string(),
            context: context.to_string(),
        });
    }
    Ok(())
}

fn check_type_name(name: &str) -> Result<(), GeneratorError> {
    syn::parse_str::<syn::Type>(name)
        .map(|_| ())
        .map_err(|e| GeneratorError::InvalidTypeName {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn check_reserved(name: &str) -> Result<(), GeneratorError> {
    if RESERVED_TYPE_NAMES.contains(&name) {
        return Err(GeneratorError::ReservedName {
            name: name.to_string(),
            shape: name.to_string(),
        });
    }
    Ok(())
}
