//! Generation orchestration: validation, formatting, and file writing.
//!
//! The pipeline is the same for both backends: validate the schema, build
//! every shape in declaration order (records, then API groups, then the
//! backend's auxiliaries), render each shape to a formatted unit, then clean
//! the output directory and write `lib.rs` plus one file per unit. Nothing
//! touches the filesystem until every unit has rendered successfully.

use std::fs;
use std::path::Path;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use chainapi_define::ContractSchema;

use crate::backend::{backend_for, Backend, Shape};
use crate::errors::GeneratorError;
use crate::resolver::TypeResolver;
use crate::validation::{validate_namespace, validate_schema};

/// Header prepended to every generated file.
pub const GENERATED_HEADER: &str = "// Generated by chainapi-gen. Do not edit manually.\n\n";

/// Parses a shape's tokens as a complete Rust file.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGen` when the tokens do not form valid
/// items. This guards an internal invariant; it should never fire for a
/// schema that passed validation.
pub fn validate_unit(unit: &str, tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone()).map_err(|e| GeneratorError::CodeGen {
        unit: unit.to_string(),
        reason: e.to_string(),
    })
}

/// Pretty-prints a parsed file.
pub fn format_code(file: &syn::File) -> String {
    prettyplease::unparse(file)
}

/// Renders one shape to its full file contents: header, unit preamble, then
/// the shape's items.
///
/// Every unit imports its siblings through `use super::*;` so shapes can
/// reference each other (records in envelopes, envelopes in traits) without
/// the backends tracking imports per unit.
pub fn assemble_unit(shape: &Shape) -> Result<String, GeneratorError> {
    let doc = format!(" Generated `{}` unit.", shape.name);
    let body = &shape.tokens;
    let tokens = quote! {
        #![doc = #doc]

        #[allow(unused_imports)]
        use super::*;

        #body
    };
    let file = validate_unit(&shape.name, &tokens)?;
    Ok(format!("{GENERATED_HEADER}{}", format_code(&file)))
}

/// Renders the generated `lib.rs`: one `pub mod` plus glob re-export per
/// unit, in emission order.
pub fn assemble_lib_rs(namespace: &str, shapes: &[Shape]) -> Result<String, GeneratorError> {
    let doc = format!(" Generated `{namespace}` library.");
    let mut decls = Vec::new();
    for shape in shapes {
        let module = format_ident!("{}", shape.module_name());
        decls.push(quote! {
            pub mod #module;
            pub use #module::*;
        });
    }
    let tokens = quote! {
        #![doc = #doc]

        #(#decls)*
    };
    let file = validate_unit("lib", &tokens)?;
    Ok(format!("{GENERATED_HEADER}{}", format_code(&file)))
}

/// Deletes and recreates the output directory.
///
/// Regeneration is a full rebuild: removing the tree first guarantees no
/// unit from a previous schema survives a rename or deletion.
// TODO: incremental generation (hash units, rewrite only changed files) to
// play better with watch-mode build tools.
pub fn clean_output_dir(output_dir: &Path) -> Result<(), GeneratorError> {
    let clean_err = |source: std::io::Error| GeneratorError::Clean {
        path: output_dir.display().to_string(),
        source,
    };
    if output_dir.exists() {
        fs::remove_dir_all(output_dir).map_err(clean_err)?;
    }
    fs::create_dir_all(output_dir).map_err(clean_err)
}

/// Writes a file atomically: a temp file in the same directory, then a
/// rename over the final path.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), GeneratorError> {
    let write_err = |source: std::io::Error| GeneratorError::Write {
        path: path.display().to_string(),
        source,
    };
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);
    fs::write(tmp, contents).map_err(write_err)?;
    fs::rename(tmp, path).map_err(write_err)
}

/// Runs the full pipeline with an explicit backend.
///
/// Returns the names of the files the run produced (or would produce, when
/// `dry_run` is set), `lib.rs` first and then one entry per unit in emission
/// order. With `dry_run` every shape is still built, validated, and
/// rendered, but the filesystem is left untouched.
pub fn generate_with_backend(
    schema: &ContractSchema,
    backend: &dyn Backend,
    output_dir: &Path,
    namespace: &str,
    dry_run: bool,
) -> Result<Vec<String>, GeneratorError> {
    validate_schema(schema)?;
    validate_namespace(namespace)?;

    let resolver = TypeResolver::new();
    let mut shapes: Vec<Shape> = Vec::new();
    for record in &schema.records {
        if let Some(shape) = backend.record_shape(&resolver, record)? {
            shapes.push(shape);
        }
    }
    for group in &schema.api_groups {
        if let Some(shape) = backend.api_group_shape(&resolver, group)? {
            shapes.push(shape);
        }
    }
    shapes.extend(backend.auxiliary_shapes(&resolver, schema)?);

    // Render everything before touching the output tree.
    let lib_rs = assemble_lib_rs(namespace, &shapes)?;
    let mut units = Vec::with_capacity(shapes.len());
    for shape in &shapes {
        units.push((shape.file_name(), assemble_unit(shape)?));
    }

    let mut file_names = Vec::with_capacity(units.len() + 1);
    file_names.push("lib.rs".to_string());
    file_names.extend(units.iter().map(|(name, _)| name.clone()));

    if dry_run {
        return Ok(file_names);
    }

    clean_output_dir(output_dir)?;
    write_atomic(&output_dir.join("lib.rs"), &lib_rs)?;
    for (name, contents) in &units {
        write_atomic(&output_dir.join(name), contents)?;
    }
    Ok(file_names)
}

/// Runs the full pipeline, selecting the backend by kind string.
///
/// ## Examples
///
/// ```no_run
/// use std::path::Path;
/// use chainapi_definitions::define_asset_schema;
/// use chainapi_gen::output::generate;
///
/// let schema = define_asset_schema();
/// let files = generate(&schema, Path::new("generated/src"), "asset_api", "client", false).unwrap();
/// assert_eq!(files[0], "lib.rs");
/// ```
pub fn generate(
    schema: &ContractSchema,
    output_dir: &Path,
    namespace: &str,
    backend_kind: &str,
    dry_run: bool,
) -> Result<Vec<String>, GeneratorError> {
    let backend = backend_for(backend_kind)?;
    generate_with_backend(schema, backend.as_ref(), output_dir, namespace, dry_run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainapi_define::{ApiGroupDef, CallMode, ContractSchema, MethodDef, RecordDef};
    use chainapi_definitions::define_asset_schema;
    use tempfile::tempdir;

    #[test]
    fn client_generation_writes_expected_files() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("src");
        let schema = define_asset_schema();

        let files = generate(&schema, &out, "contract_api", "client", false).unwrap();
        assert_eq!(
            files,
            vec![
                "lib.rs",
                "asset.rs",
                "asset_submit_api.rs",
                "asset_query_api.rs",
                "contract_api_injectable.rs",
                "proposed_submit.rs",
                "contract_api.rs",
                "response.rs",
            ]
        );
        for name in &files {
            assert!(out.join(name).exists(), "missing {name}");
        }
    }

    #[test]
    fn contract_generation_writes_expected_files() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("src");
        let schema = define_asset_schema();

        let files = generate(&schema, &out, "contract_api", "contract", false).unwrap();
        assert_eq!(
            files,
            vec![
                "lib.rs",
                "asset.rs",
                "asset_submit_api.rs",
                "asset_query_api.rs",
                "contract_api.rs",
                "response.rs",
            ]
        );
    }

    #[test]
    fn every_generated_file_carries_the_header() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("src");
        let schema = define_asset_schema();

        let files = generate(&schema, &out, "contract_api", "contract", false).unwrap();
        for name in &files {
            let contents = fs::read_to_string(out.join(name)).unwrap();
            assert!(
                contents.starts_with(GENERATED_HEADER),
                "{name} missing header"
            );
        }
    }

    #[test]
    fn lib_rs_declares_and_reexports_every_unit() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("src");
        let schema = define_asset_schema();

        generate(&schema, &out, "contract_api", "client", false).unwrap();
        let lib = fs::read_to_string(out.join("lib.rs")).unwrap();
        for module in [
            "asset",
            "asset_submit_api",
            "asset_query_api",
            "contract_api_injectable",
            "proposed_submit",
            "contract_api",
            "response",
        ] {
            assert!(lib.contains(&format!("pub mod {module};")), "{module}");
            assert!(lib.contains(&format!("pub use {module}::*;")), "{module}");
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("src");
        let schema = define_asset_schema();

        generate(&schema, &out, "contract_api", "client", false).unwrap();
        let first = fs::read_to_string(out.join("asset_submit_api.rs")).unwrap();
        let first_lib = fs::read_to_string(out.join("lib.rs")).unwrap();

        generate(&schema, &out, "contract_api", "client", false).unwrap();
        let second = fs::read_to_string(out.join("asset_submit_api.rs")).unwrap();
        let second_lib = fs::read_to_string(out.join("lib.rs")).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_lib, second_lib);
    }

    #[test]
    fn regeneration_removes_stale_units() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("src");

        let wide = ContractSchema::new("t", "Api")
            .record(RecordDef::new("Asset").field("id", "String"))
            .record(RecordDef::new("Owner").field("id", "String"));
        generate(&wide, &out, "contract_api", "contract", false).unwrap();
        assert!(out.join("owner.rs").exists());

        let narrow = ContractSchema::new("t", "Api")
            .record(RecordDef::new("Asset").field("id", "String"));
        generate(&narrow, &out, "contract_api", "contract", false).unwrap();
        assert!(!out.join("owner.rs").exists());
        assert!(out.join("asset.rs").exists());
    }

    #[test]
    fn dry_run_touches_nothing() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("src");
        let schema = define_asset_schema();

        let files = generate(&schema, &out, "contract_api", "client", true).unwrap();
        assert!(!files.is_empty());
        assert!(!out.exists());
    }

    #[test]
    fn invalid_schema_leaves_existing_output_intact() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("src");
        let schema = define_asset_schema();
        generate(&schema, &out, "contract_api", "client", false).unwrap();

        let bad = define_asset_schema().api_group(
            ApiGroupDef::new("ExtraApi", CallMode::Evaluate)
                .method(MethodDef::new("findAsset", "Asset")),
        );
        let err = generate(&bad, &out, "contract_api", "client", false).unwrap_err();
        assert!(matches!(err, GeneratorError::MethodCollision { .. }));
        // The previous generation survives a rejected schema.
        assert!(out.join("lib.rs").exists());
        assert!(out.join("asset.rs").exists());
    }

    #[test]
    fn invalid_namespace_is_rejected_before_writing() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("src");
        let schema = define_asset_schema();
        let err = generate(&schema, &out, "Not-A-Namespace", "client", false).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidNamespace { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let dir = tempdir().unwrap();
        let schema = define_asset_schema();
        let err = generate(&schema, dir.path(), "contract_api", "server", false).unwrap_err();
        assert!(matches!(err, GeneratorError::UnknownBackend(_)));
    }

    #[test]
    fn generated_units_parse_as_rust() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("src");
        let schema = define_asset_schema();

        let files = generate(&schema, &out, "contract_api", "client", false).unwrap();
        for name in &files {
            let contents = fs::read_to_string(out.join(name)).unwrap();
            syn::parse_file(&contents).unwrap_or_else(|e| panic!("{name}: {e}"));
        }
    }
}
