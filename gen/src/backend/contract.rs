//! Contract-side (server) generation backend.
//!
//! Emits the skeleton a contract author fills in: ledger record structs with
//! constructors and getters, one abstract handler trait per API group, and a
//! composite trait unifying the groups under the schema's aggregator name.
//! Handler bodies are the author's job; everything here is declarations.

use quote::quote;

use chainapi_define::{ApiGroupDef, ContractSchema, RecordDef};

use crate::errors::GeneratorError;
use crate::naming::field_to_getter;
use crate::resolver::TypeResolver;

use super::{make_ident, response_envelope_shape, Backend, Shape, RESPONSE_TYPE_NAME, RUNTIME_CRATE};

/// Generation strategy for the server-side contract skeleton.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContractBackend;

impl Backend for ContractBackend {
    /// Emits a ledger record: serde-tagged struct, positional constructor in
    /// declared field order, and a getter per field.
    fn record_shape(
        &self,
        resolver: &TypeResolver,
        def: &RecordDef,
    ) -> Result<Option<Shape>, GeneratorError> {
        let record_ident = make_ident(&def.name, "record name")?;
        resolver.resolve(&def.name)?;

        let mut field_decls = Vec::new();
        let mut ctor_params = Vec::new();
        let mut ctor_inits = Vec::new();
        let mut getters = Vec::new();

        for field in &def.fields {
            let name = field.name.as_str();
            let field_ident = make_ident(name, "record field")?;
            let ty = resolver.resolve(&field.type_name)?;
            let getter = make_ident(&field_to_getter(name), "record getter")?;

            field_decls.push(quote! {
                #[serde(rename = #name)]
                #field_ident: #ty
            });
            ctor_params.push(quote! { #field_ident: #ty });
            ctor_inits.push(quote! { #field_ident });
            getters.push(quote! {
                pub fn #getter(&self) -> &#ty {
                    &self.#field_ident
                }
            });
        }

        let doc = format!("Ledger record `{}`.", def.name);
        let tokens = quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
            #[serde(deny_unknown_fields)]
            #[allow(non_snake_case)]
            pub struct #record_ident {
                #(#field_decls,)*
            }

            #[allow(non_snake_case)]
            impl #record_ident {
                /// Constructs the record with every field, in declaration
                /// order.
                pub fn new(#(#ctor_params),*) -> Self {
                    Self {
                        #(#ctor_inits,)*
                    }
                }

                #(#getters)*
            }
        };

        Ok(Some(Shape::new(&def.name, tokens)))
    }

    /// Emits the abstract handler trait for one group. Every method takes
    /// the execution context first, then the schema parameters, and returns
    /// the response envelope around its declared body type. Call mode does
    /// not change the server-side signature; the host distinguishes submit
    /// from evaluate at dispatch time.
    fn api_group_shape(
        &self,
        resolver: &TypeResolver,
        def: &ApiGroupDef,
    ) -> Result<Option<Shape>, GeneratorError> {
        let trait_ident = make_ident(&def.name, "API group name")?;
        let response = resolver.resolve(RESPONSE_TYPE_NAME)?;
        let context = resolver.resolve_in(RUNTIME_CRATE, "ContractContext")?;

        let mut methods = Vec::new();
        for method in &def.methods {
            let method_ident = make_ident(&method.name, "method name")?;
            let ret_body = resolver.resolve(&method.return_type)?;
            let ret = resolver.parameterized(&response, &ret_body)?;

            let mut params = Vec::new();
            for (pname, ptype) in &method.parameters {
                let pident = make_ident(pname, "method parameter")?;
                let pty = resolver.resolve(ptype)?;
                params.push(quote! { #pident: #pty });
            }

            methods.push(quote! {
                fn #method_ident(&self, context: &mut dyn #context #(, #params)*) -> #ret;
            });
        }

        let doc = format!(
            "Handler declarations for the `{}` group ({} mode).",
            def.name, def.mode
        );
        let tokens = quote! {
            #[doc = #doc]
            #[allow(non_snake_case)]
            pub trait #trait_ident {
                #(#methods)*
            }
        };

        Ok(Some(Shape::new(&def.name, tokens)))
    }

    /// Emits the composite contract trait and the read-only response
    /// envelope. The composite carries a blanket impl so any type
    /// implementing every group trait is the full contract automatically.
    fn auxiliary_shapes(
        &self,
        resolver: &TypeResolver,
        schema: &ContractSchema,
    ) -> Result<Vec<Shape>, GeneratorError> {
        let mut shapes = Vec::new();

        let aggregator = make_ident(&schema.aggregator_name, "aggregator name")?;
        let mut group_idents = Vec::new();
        for group in &schema.api_groups {
            group_idents.push(make_ident(&group.name, "API group name")?);
        }

        let doc = format!(
            "Composite contract surface: every group trait of `{}` in one bound.",
            schema.name
        );
        let composite = if group_idents.is_empty() {
            quote! {
                #[doc = #doc]
                pub trait #aggregator {}

                impl<C> #aggregator for C {}
            }
        } else {
            quote! {
                #[doc = #doc]
                pub trait #aggregator: #(#group_idents)+* {}

                impl<C: #(#group_idents)+*> #aggregator for C {}
            }
        };
        shapes.push(Shape::new(&schema.aggregator_name, composite));

        shapes.push(response_envelope_shape(resolver, false)?);
        Ok(shapes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainapi_define::{CallMode, MethodDef};
    use chainapi_definitions::define_asset_schema;

    use crate::output::{format_code, validate_unit};

    fn render(shape: &Shape) -> String {
        let file = validate_unit(&shape.name, &shape.tokens).unwrap();
        format_code(&file)
    }

    /// Collapses whitespace so assertions do not depend on line wrapping.
    fn flat(code: &str) -> String {
        code.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn record_constructor_takes_fields_in_declared_order() {
        let resolver = TypeResolver::new();
        let def = RecordDef::new("Asset")
            .field("id", "String")
            .field("value", "String");

        let shape = ContractBackend
            .record_shape(&resolver, &def)
            .unwrap()
            .unwrap();
        let code = render(&shape);

        assert!(code.contains("pub struct Asset"));
        assert!(code.contains("pub fn new(id: String, value: String) -> Self"));
    }

    #[test]
    fn record_emits_a_getter_per_field() {
        let resolver = TypeResolver::new();
        let schema = define_asset_schema();
        let shape = ContractBackend
            .record_shape(&resolver, &schema.records[0])
            .unwrap()
            .unwrap();
        let code = render(&shape);

        assert!(code.contains("pub fn getId(&self) -> &String"));
        assert!(code.contains("pub fn getCreateTime(&self) -> &i64"));
        assert!(code.contains("pub fn getLastTransferTime(&self) -> &i64"));
        // No setters on the contract side.
        assert!(!code.contains("setId"));
    }

    #[test]
    fn record_fields_are_private_and_wire_tagged() {
        let resolver = TypeResolver::new();
        let def = RecordDef::new("Asset").field("ownerId", "String");
        let shape = ContractBackend
            .record_shape(&resolver, &def)
            .unwrap()
            .unwrap();
        let code = render(&shape);

        assert!(code.contains("#[serde(rename = \"ownerId\")]"));
        assert!(code.contains("#[serde(deny_unknown_fields)]"));
        assert!(!code.contains("pub ownerId"));
    }

    #[test]
    fn group_methods_are_abstract_and_context_first() {
        let resolver = TypeResolver::new();
        let schema = define_asset_schema();
        let shape = ContractBackend
            .api_group_shape(&resolver, &schema.api_groups[0])
            .unwrap()
            .unwrap();
        let code = render(&shape);

        assert!(code.contains("pub trait AssetSubmitApi"));
        let flattened = flat(&code);
        assert!(flattened.contains(
            "fn createAsset( &self, context: &mut dyn chainapi_runtime::ContractContext, value: String, ) -> Response<Asset>;"
        ) || flattened.contains(
            "fn createAsset(&self, context: &mut dyn chainapi_runtime::ContractContext, value: String) -> Response<Asset>;"
        ));
        assert!(code.contains("fn deleteAsset("));
        // Abstract declarations only, no default bodies.
        assert!(!code.contains("self.contract()"));
    }

    #[test]
    fn evaluate_group_returns_enveloped_collections() {
        let resolver = TypeResolver::new();
        let schema = define_asset_schema();
        let shape = ContractBackend
            .api_group_shape(&resolver, &schema.api_groups[1])
            .unwrap()
            .unwrap();
        let code = render(&shape);

        let flattened = flat(&code);
        assert!(flattened.contains("-> Response<Vec<Asset>>;"));
        assert!(flattened.contains("fn findAllAsset("));
        assert!(flattened.contains("fn findAsset("));
    }

    #[test]
    fn composite_trait_bounds_every_group() {
        let resolver = TypeResolver::new();
        let schema = define_asset_schema();
        let shapes = ContractBackend
            .auxiliary_shapes(&resolver, &schema)
            .unwrap();

        assert_eq!(shapes.len(), 2);
        let composite = render(&shapes[0]);
        assert!(composite.contains("pub trait ContractApi: AssetSubmitApi + AssetQueryApi {}"));
        assert!(composite.contains("impl<C: AssetSubmitApi + AssetQueryApi> ContractApi for C {}"));

        assert_eq!(shapes[1].name, "Response");
    }

    #[test]
    fn invalid_method_name_is_reported_with_context() {
        let resolver = TypeResolver::new();
        let def = ApiGroupDef::new("BrokenApi", CallMode::Evaluate)
            .method(MethodDef::new("not a name", "Asset"));
        let err = ContractBackend
            .api_group_shape(&resolver, &def)
            .unwrap_err();
        match err {
            GeneratorError::InvalidIdentifier { name, context } => {
                assert_eq!(name, "not a name");
                assert_eq!(context, "method name");
            }
            other => panic!("expected InvalidIdentifier, got: {other:?}"),
        }
    }
}
