//! Memoized type-name resolution.
//!
//! Backends never parse type-name strings themselves; they ask the resolver,
//! which canonicalizes each name to a single reference for the lifetime of
//! one generation run. Downstream code composing parameterized shapes (the
//! envelope-of-T pattern) relies on that identity to reuse references
//! instead of comparing structurally.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use proc_macro2::TokenStream;
use quote::ToTokens;

use crate::errors::GeneratorError;

/// A resolved type reference: the original name string plus its parsed form.
///
/// References are handed out as `Rc`s by [`TypeResolver`]; two resolutions
/// of the same name within one run yield pointer-identical values.
#[derive(Debug)]
pub struct TypeRef {
    name: String,
    ty: syn::Type,
}

impl TypeRef {
    /// The name string this reference was resolved from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parsed type, for callers that need to inspect it.
    pub fn ty(&self) -> &syn::Type {
        &self.ty
    }
}

impl ToTokens for TypeRef {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.ty.to_tokens(tokens);
    }
}

/// Resolves type-name strings to canonical [`TypeRef`]s.
///
/// The cache is populated lazily and never evicted; it is arena-scoped to a
/// single generation run (the orchestrator creates one resolver per run and
/// drops it afterwards).
///
/// ## Examples
///
/// ```
/// use std::rc::Rc;
/// use chainapi_gen::resolver::TypeResolver;
///
/// let resolver = TypeResolver::new();
/// let first = resolver.resolve("Asset").unwrap();
/// let second = resolver.resolve("Asset").unwrap();
/// assert!(Rc::ptr_eq(&first, &second));
/// ```
#[derive(Debug, Default)]
pub struct TypeResolver {
    cache: RefCell<HashMap<String, Rc<TypeRef>>>,
}

impl TypeResolver {
    /// Creates an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a type-name string to its canonical reference.
    ///
    /// The first resolution of a name fixes the reference for the remainder
    /// of the run; later calls return the identical `Rc`.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::InvalidTypeName` if the string does not
    /// parse as a Rust type. A name that parses but refers to nothing is
    /// *not* an error here: it appears verbatim in generated code and fails
    /// when the generated artifacts compile.
    pub fn resolve(&self, name: &str) -> Result<Rc<TypeRef>, GeneratorError> {
        if let Some(existing) = self.cache.borrow().get(name) {
            return Ok(Rc::clone(existing));
        }
        let ty: syn::Type =
            syn::parse_str(name).map_err(|e| GeneratorError::InvalidTypeName {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        let reference = Rc::new(TypeRef {
            name: name.to_string(),
            ty,
        });
        self.cache
            .borrow_mut()
            .insert(name.to_string(), Rc::clone(&reference));
        Ok(reference)
    }

    /// Resolves a name qualified by an external module path, e.g.
    /// `resolve_in("chainapi_runtime", "JsonCodec")`.
    pub fn resolve_in(&self, module: &str, name: &str) -> Result<Rc<TypeRef>, GeneratorError> {
        self.resolve(&format!("{module}::{name}"))
    }

    /// Composes a parameterized reference `Outer<Inner>`, memoized like any
    /// other resolution so repeated compositions reuse one reference.
    pub fn parameterized(
        &self,
        outer: &Rc<TypeRef>,
        inner: &Rc<TypeRef>,
    ) -> Result<Rc<TypeRef>, GeneratorError> {
        self.resolve(&format!("{}<{}>", outer.name, inner.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn repeated_resolution_is_pointer_identical() {
        let resolver = TypeResolver::new();
        let a = resolver.resolve("Asset").unwrap();
        let b = resolver.resolve("Asset").unwrap();
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn type_refs_are_debuggable() {
        // Requires syn's extra-traits feature for the inner syn::Type.
        let resolver = TypeResolver::new();
        let asset = resolver.resolve("Asset").unwrap();
        assert!(format!("{asset:?}").contains("Asset"));
        assert!(format!("{resolver:?}").contains("cache"));
    }

    #[test]
    fn distinct_names_are_distinct_references() {
        let resolver = TypeResolver::new();
        let a = resolver.resolve("Asset").unwrap();
        let b = resolver.resolve("Owner").unwrap();
        assert!(!Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn generic_type_names_resolve() {
        let resolver = TypeResolver::new();
        let list = resolver.resolve("Vec<Asset>").unwrap();
        assert_eq!(quote!(#list).to_string(), "Vec < Asset >");
    }

    #[test]
    fn malformed_type_name_is_rejected() {
        let resolver = TypeResolver::new();
        let err = resolver.resolve("not a type!").unwrap_err();
        match err {
            GeneratorError::InvalidTypeName { name, .. } => assert_eq!(name, "not a type!"),
            other => panic!("expected InvalidTypeName, got: {other:?}"),
        }
    }

    #[test]
    fn resolve_in_renders_qualified_path() {
        let resolver = TypeResolver::new();
        let codec = resolver.resolve_in("chainapi_runtime", "JsonCodec").unwrap();
        assert_eq!(quote!(#codec).to_string(), "chainapi_runtime :: JsonCodec");
    }

    #[test]
    fn parameterized_composition_is_memoized() {
        let resolver = TypeResolver::new();
        let response = resolver.resolve("Response").unwrap();
        let asset = resolver.resolve("Asset").unwrap();

        let first = resolver.parameterized(&response, &asset).unwrap();
        let second = resolver.parameterized(&response, &asset).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        // And the composed name is itself resolvable directly.
        let direct = resolver.resolve("Response<Asset>").unwrap();
        assert!(Rc::ptr_eq(&first, &direct));
    }
}
