//! Backend strategies for the two generation targets.
//!
//! Both backends consume the same schema through the same resolver and are
//! driven by the same orchestrator; they differ only in the shapes they emit.
//! The shared iteration over records and groups lives in [`crate::output`],
//! not here; a backend only knows how to turn one definition into one shape.

pub mod client;
pub mod contract;

pub use client::ClientBackend;
pub use contract::ContractBackend;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use chainapi_define::{ApiGroupDef, ContractSchema, RecordDef};

use crate::errors::GeneratorError;
use crate::naming::{field_to_getter, type_to_module_name};
use crate::resolver::TypeResolver;

/// Name of the generated response envelope type.
pub const RESPONSE_TYPE_NAME: &str = "Response";
/// Name of the generated injectable-capability trait (client backend).
pub const INJECTABLE_TYPE_NAME: &str = "ContractApiInjectable";
/// Name of the generated deferred submit result type (client backend).
pub const PROPOSED_SUBMIT_TYPE_NAME: &str = "ProposedSubmit";
/// Crate the generated code resolves its runtime collaborators in.
pub const RUNTIME_CRATE: &str = "chainapi_runtime";

/// One generated source unit: a type name plus its token stream.
///
/// The orchestrator writes each shape to its own file, named by
/// [`type_to_module_name`].
#[derive(Debug)]
pub struct Shape {
    /// Name of the primary type the unit declares.
    pub name: String,
    /// The unit's code, without file-level preamble.
    pub tokens: TokenStream,
}

impl Shape {
    /// Creates a shape.
    pub fn new(name: impl Into<String>, tokens: TokenStream) -> Self {
        Self {
            name: name.into(),
            tokens,
        }
    }

    /// Module name the unit is declared under in the generated `lib.rs`.
    pub fn module_name(&self) -> String {
        type_to_module_name(&self.name)
    }

    /// File the unit is written to, relative to the output directory.
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.module_name())
    }
}

/// Generation strategy for one output target.
///
/// `record_shape` and `api_group_shape` may decline a definition by
/// returning `Ok(None)`; the orchestrator skips it without error.
/// `auxiliary_shapes` runs strictly after all records and groups, so it may
/// rely on their names being registered with the resolver already.
pub trait Backend {
    /// Builds the generated-record shape for one record definition.
    fn record_shape(
        &self,
        resolver: &TypeResolver,
        def: &RecordDef,
    ) -> Result<Option<Shape>, GeneratorError>;

    /// Builds the generated-interface shape for one API group.
    fn api_group_shape(
        &self,
        resolver: &TypeResolver,
        def: &ApiGroupDef,
    ) -> Result<Option<Shape>, GeneratorError>;

    /// Builds the backend-specific auxiliary shapes, in emission order.
    fn auxiliary_shapes(
        &self,
        resolver: &TypeResolver,
        schema: &ContractSchema,
    ) -> Result<Vec<Shape>, GeneratorError>;
}

/// Selects a backend by kind string.
///
/// ## Errors
///
/// Returns `GeneratorError::UnknownBackend` for anything other than
/// `"contract"` or `"client"`.
pub fn backend_for(kind: &str) -> Result<Box<dyn Backend>, GeneratorError> {
    match kind {
        "contract" => Ok(Box::new(ContractBackend)),
        "client" => Ok(Box::new(ClientBackend)),
        other => Err(GeneratorError::UnknownBackend(other.to_string())),
    }
}

/// Parses a name into an identifier, attributing failures to `context`.
///
/// Validation rejects malformed names up front, but backends are also used
/// directly in tests, so identifier construction stays fallible here instead
/// of panicking inside `format_ident!`.
pub(crate) fn make_ident(
    name: &str,
    context: &str,
) -> Result<proc_macro2::Ident, GeneratorError> {
    syn::parse_str(name).map_err(|_| GeneratorError::InvalidIdentifier {
        name: name.to_string(),
        context: context.to_string(),
    })
}

/// Builds the `Response<T>` envelope shape shared by both backends.
///
/// The envelope has exactly three blessed constructors:
/// - `new(body)`: success carrying a body, code 0, message `"Success"`;
/// - `error(code, msg)`: failure carrying a nonzero code and message;
/// - `empty()`: success with no body, code 0, message `"Success"`.
///
/// The contract backend emits it read-only; the client backend additionally
/// emits setters (`with_setters`) so handwritten application code can adapt
/// decoded envelopes.
pub(crate) fn response_envelope_shape(
    resolver: &TypeResolver,
    with_setters: bool,
) -> Result<Shape, GeneratorError> {
    // Registering the name keeps later parameterized compositions identical.
    resolver.resolve(RESPONSE_TYPE_NAME)?;

    let get_body = format_ident!("{}", field_to_getter("body"));
    let get_code = format_ident!("{}", field_to_getter("code"));
    let get_msg = format_ident!("{}", field_to_getter("msg"));

    let setters = if with_setters {
        let set_body = format_ident!("{}", crate::naming::field_to_setter("body"));
        let set_code = format_ident!("{}", crate::naming::field_to_setter("code"));
        let set_msg = format_ident!("{}", crate::naming::field_to_setter("msg"));
        quote! {
            pub fn #set_body(&mut self, body: Option<T>) {
                self.body = body;
            }
            pub fn #set_code(&mut self, code: i32) {
                self.code = code;
            }
            pub fn #set_msg(&mut self, msg: String) {
                self.msg = msg;
            }
        }
    } else {
        TokenStream::new()
    };

    let tokens = quote! {
        /// Response envelope carrying a decoded body plus a status code and
        /// message. A code of 0 means success; exactly one of `body` or a
        /// nonzero `code` is meaningful per instance.
        #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
        pub struct Response<T> {
            #[serde(rename = "body")]
            body: Option<T>,
            #[serde(rename = "code")]
            code: i32,
            #[serde(rename = "msg")]
            msg: String,
        }

        #[allow(non_snake_case)]
        impl<T> Response<T> {
            /// Success envelope wrapping `body`.
            pub fn new(body: T) -> Self {
                Self {
                    body: Some(body),
                    code: 0,
                    msg: "Success".to_string(),
                }
            }

            /// Failure envelope carrying a nonzero `code` and a message.
            pub fn error(code: i32, msg: impl Into<String>) -> Self {
                Self {
                    body: None,
                    code,
                    msg: msg.into(),
                }
            }

            /// Empty success envelope: no body, code 0, message `"Success"`.
            pub fn empty() -> Self {
                Self {
                    body: None,
                    code: 0,
                    msg: "Success".to_string(),
                }
            }

            pub fn #get_body(&self) -> &Option<T> {
                &self.body
            }

            pub fn #get_code(&self) -> i32 {
                self.code
            }

            pub fn #get_msg(&self) -> &String {
                &self.msg
            }

            #setters
        }

        impl<T> Default for Response<T> {
            fn default() -> Self {
                Self::empty()
            }
        }
    };

    Ok(Shape::new(RESPONSE_TYPE_NAME, tokens))
}
