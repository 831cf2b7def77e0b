//! Client-side (application) generation backend.
//!
//! Emits a ready-to-use proxy library: wire-tagged record structs with
//! getters and setters, one trait per API group whose default bodies call
//! through the injected transport, the `ContractApiInjectable` capability
//! trait, the `ProposedSubmit<T>` deferred result, and a concrete aggregator
//! struct that implements every group trait at once.

use proc_macro2::TokenStream;
use quote::quote;

use chainapi_define::{ApiGroupDef, CallMode, ContractSchema, MethodDef, RecordDef};

use crate::errors::GeneratorError;
use crate::naming::{field_to_getter, field_to_setter};
use crate::resolver::TypeResolver;

use super::{
    make_ident, response_envelope_shape, Backend, Shape, INJECTABLE_TYPE_NAME,
    PROPOSED_SUBMIT_TYPE_NAME, RESPONSE_TYPE_NAME, RUNTIME_CRATE,
};

/// Generation strategy for the application-side proxy library.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientBackend;

impl ClientBackend {
    /// Builds one proxy method with its default body.
    ///
    /// Evaluate methods call the transport synchronously and decode the
    /// envelope; submit methods hand the pending commit to a
    /// `ProposedSubmit` without blocking. Either way the positional argument
    /// vector is built from the parameters in declared order.
    fn proxy_method(
        &self,
        resolver: &TypeResolver,
        mode: CallMode,
        method: &MethodDef,
    ) -> Result<TokenStream, GeneratorError> {
        let method_ident = make_ident(&method.name, "method name")?;
        let method_name = method.name.as_str();
        let ret_body = resolver.resolve(&method.return_type)?;
        let client_error = resolver.resolve_in(RUNTIME_CRATE, "ClientError")?;

        let mut params = Vec::new();
        let mut arg_exprs = Vec::new();
        for (pname, ptype) in &method.parameters {
            let pident = make_ident(pname, "method parameter")?;
            let pty = resolver.resolve(ptype)?;
            params.push(quote! { #pident: #pty });
            arg_exprs.push(quote! { #pident.to_string() });
        }
        let args_init = if arg_exprs.is_empty() {
            quote! { Vec::new() }
        } else {
            quote! { vec![#(#arg_exprs),*] }
        };

        let tokens = match mode {
            CallMode::Evaluate => {
                let response = resolver.resolve(RESPONSE_TYPE_NAME)?;
                let ret = resolver.parameterized(&response, &ret_body)?;
                quote! {
                    fn #method_ident(&self #(, #params)*) -> Result<#ret, #client_error> {
                        let args: Vec<String> = #args_init;
                        let raw = self.contract().evaluate(#method_name, &args)?;
                        let response: #ret = self.codec().decode(&raw)?;
                        Ok(response)
                    }
                }
            }
            CallMode::Submit => {
                let proposed = resolver.resolve(PROPOSED_SUBMIT_TYPE_NAME)?;
                let ret = resolver.parameterized(&proposed, &ret_body)?;
                quote! {
                    fn #method_ident(&self #(, #params)*) -> Result<#ret, #client_error> {
                        let args: Vec<String> = #args_init;
                        let commit = self.contract().submit(#method_name, &args)?;
                        Ok(<#ret>::new(commit, self.codec().clone()))
                    }
                }
            }
        };
        Ok(tokens)
    }

    fn injectable_shape(&self, resolver: &TypeResolver) -> Result<Shape, GeneratorError> {
        resolver.resolve(INJECTABLE_TYPE_NAME)?;
        let transport = resolver.resolve_in(RUNTIME_CRATE, "Transport")?;
        let codec = resolver.resolve_in(RUNTIME_CRATE, "JsonCodec")?;

        let tokens = quote! {
            /// Capabilities every generated proxy trait needs from its
            /// implementor: the remote transport and the payload codec.
            pub trait ContractApiInjectable {
                /// The transport generated default bodies call through.
                fn contract(&self) -> &dyn #transport;

                /// The codec used to decode response payloads.
                fn codec(&self) -> &#codec;
            }
        };
        Ok(Shape::new(INJECTABLE_TYPE_NAME, tokens))
    }

    fn proposed_submit_shape(&self, resolver: &TypeResolver) -> Result<Shape, GeneratorError> {
        resolver.resolve(PROPOSED_SUBMIT_TYPE_NAME)?;
        let pending = resolver.resolve_in(RUNTIME_CRATE, "PendingCommit")?;
        let codec = resolver.resolve_in(RUNTIME_CRATE, "JsonCodec")?;
        let status_ty = resolver.resolve_in(RUNTIME_CRATE, "CommitStatus")?;
        let client_error = resolver.resolve_in(RUNTIME_CRATE, "ClientError")?;

        let tokens = quote! {
            /// A submit call that has been proposed but not yet resolved.
            ///
            /// Status and result are fetched lazily on first access and
            /// cached; subsequent calls return the cached value without
            /// touching the transport. A fetch that fails leaves the cache
            /// empty so the call can be retried.
            pub struct ProposedSubmit<T> {
                commit: Box<dyn #pending>,
                codec: #codec,
                status: std::sync::OnceLock<#status_ty>,
                response: std::sync::OnceLock<Response<T>>,
                fill_lock: std::sync::Mutex<()>,
            }

            #[allow(non_snake_case)]
            impl<T: serde::de::DeserializeOwned> ProposedSubmit<T> {
                /// Wraps a pending commit and the codec used to decode its
                /// eventual result.
                pub fn new(commit: Box<dyn #pending>, codec: #codec) -> Self {
                    Self {
                        commit,
                        codec,
                        status: std::sync::OnceLock::new(),
                        response: std::sync::OnceLock::new(),
                        fill_lock: std::sync::Mutex::new(()),
                    }
                }

                /// Blocks until the commit status is known, caching it.
                pub fn blockingGetStatus(&self) -> Result<&#status_ty, #client_error> {
                    if let Some(status) = self.status.get() {
                        return Ok(status);
                    }
                    let _guard = self
                        .fill_lock
                        .lock()
                        .unwrap_or_else(|poisoned| poisoned.into_inner());
                    if let Some(status) = self.status.get() {
                        return Ok(status);
                    }
                    let fetched = self.commit.status()?;
                    Ok(self.status.get_or_init(|| fetched))
                }

                /// Blocks until the decoded response envelope is available,
                /// caching it.
                pub fn blockingGetResult(&self) -> Result<&Response<T>, #client_error> {
                    if let Some(response) = self.response.get() {
                        return Ok(response);
                    }
                    let _guard = self
                        .fill_lock
                        .lock()
                        .unwrap_or_else(|poisoned| poisoned.into_inner());
                    if let Some(response) = self.response.get() {
                        return Ok(response);
                    }
                    let raw = self.commit.result()?;
                    let decoded: Response<T> = self.codec.decode(&raw)?;
                    Ok(self.response.get_or_init(|| decoded))
                }
            }
        };
        Ok(Shape::new(PROPOSED_SUBMIT_TYPE_NAME, tokens))
    }

    fn aggregator_shape(
        &self,
        resolver: &TypeResolver,
        schema: &ContractSchema,
    ) -> Result<Shape, GeneratorError> {
        let aggregator = make_ident(&schema.aggregator_name, "aggregator name")?;
        let transport = resolver.resolve_in(RUNTIME_CRATE, "Transport")?;
        let codec = resolver.resolve_in(RUNTIME_CRATE, "JsonCodec")?;

        let mut group_impls = Vec::new();
        for group in &schema.api_groups {
            let group_ident = make_ident(&group.name, "API group name")?;
            group_impls.push(quote! {
                impl #group_ident for #aggregator {}
            });
        }

        let doc = format!(
            "Concrete client for `{}`: implements every generated API group over one transport.",
            schema.name
        );
        let tokens = quote! {
            #[doc = #doc]
            pub struct #aggregator {
                contract: Box<dyn #transport>,
                codec: #codec,
            }

            impl #aggregator {
                /// Builds the client over a transport and the codec used
                /// for its payloads.
                pub fn new(contract: Box<dyn #transport>, codec: #codec) -> Self {
                    Self { contract, codec }
                }
            }

            impl ContractApiInjectable for #aggregator {
                fn contract(&self) -> &dyn #transport {
                    self.contract.as_ref()
                }

                fn codec(&self) -> &#codec {
                    &self.codec
                }
            }

            #(#group_impls)*
        };
        Ok(Shape::new(&schema.aggregator_name, tokens))
    }
}

impl Backend for ClientBackend {
    /// Emits a wire record: serde-tagged struct with a positional
    /// constructor, getters, and setters. Unlike the contract side the
    /// client record also derives `Default`, so partially known instances
    /// can be built up via setters.
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
        let mut accessors = Vec::new();

        for field in &def.fields {
            let name = field.name.as_str();
            let field_ident = make_ident(name, "record field")?;
            let ty = resolver.resolve(&field.type_name)?;
            let getter = make_ident(&field_to_getter(name), "record getter")?;
            let setter = make_ident(&field_to_setter(name), "record setter")?;

            field_decls.push(quote! {
                #[serde(rename = #name)]
                #field_ident: #ty
            });
            ctor_params.push(quote! { #field_ident: #ty });
            ctor_inits.push(quote! { #field_ident });
            accessors.push(quote! {
                pub fn #getter(&self) -> &#ty {
                    &self.#field_ident
                }

                pub fn #setter(&mut self, #field_ident: #ty) {
                    self.#field_ident = #field_ident;
                }
            });
        }

        let doc = format!("Wire record `{}`.", def.name);
        let tokens = quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
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

                #(#accessors)*
            }
        };

        Ok(Some(Shape::new(&def.name, tokens)))
    }

    /// Emits the proxy trait for one group. Every method has a default body
    /// that builds the positional argument vector and calls through the
    /// injected transport, so an implementor only supplies the injectable
    /// capabilities.
    fn api_group_shape(
        &self,
        resolver: &TypeResolver,
        def: &ApiGroupDef,
    ) -> Result<Option<Shape>, GeneratorError> {
        let trait_ident = make_ident(&def.name, "API group name")?;

        let mut methods = Vec::new();
        for method in &def.methods {
            methods.push(self.proxy_method(resolver, def.mode, method)?);
        }

        let doc = format!(
            "Proxy methods for the `{}` group ({} mode).",
            def.name, def.mode
        );
        let tokens = quote! {
            #[doc = #doc]
            #[allow(non_snake_case)]
            pub trait #trait_ident: ContractApiInjectable {
                #(#methods)*
            }
        };

        Ok(Some(Shape::new(&def.name, tokens)))
    }

    /// Emits, in order: the injectable capability trait, the deferred
    /// submit result, the concrete aggregator, and the response envelope
    /// with setters.
    fn auxiliary_shapes(
        &self,
        resolver: &TypeResolver,
        schema: &ContractSchema,
    ) -> Result<Vec<Shape>, GeneratorError> {
        Ok(vec![
            self.injectable_shape(resolver)?,
            self.proposed_submit_shape(resolver)?,
            self.aggregator_shape(resolver, schema)?,
            response_envelope_shape(resolver, true)?,
        ])
    }
}
