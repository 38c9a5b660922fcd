//! Method model handed from the declaration walker to the renderer.
//!
//! The model is built once per run, never mutated after the walk
//! completes, and consumed exactly once by the template renderer.
//!
//! # Examples
//!
//! ```
//! use rpcgen_core::{Field, GenerationContext, Method};
//!
//! let add = Method {
//!     name: "Add".to_string(),
//!     parameters: vec![Field {
//!         names: vec!["A".to_string(), "B".to_string()],
//!         lower_names: vec!["a".to_string(), "b".to_string()],
//!         type_expr: "int".to_string(),
//!     }],
//!     results: vec![],
//! };
//!
//! let context = GenerationContext::new("Arith", "arith", vec![add], Vec::new(), "*rpc.Client");
//! assert_eq!(context.method_count(), 1);
//! assert_eq!(context.imports, vec!["net/rpc".to_string()]);
//! ```

use crate::DEFAULT_IMPORT;
use serde::{Deserialize, Serialize};

/// One named parameter or result group.
///
/// `names` and `lower_names` are one-to-one and in declaration order:
/// the order fixes both generated struct field order and positional
/// argument order. A field always carries at least one name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Public (first letter upper-cased) names
    pub names: Vec<String>,
    /// Names exactly as declared
    pub lower_names: Vec<String>,
    /// Type expression text as written in source
    #[serde(rename = "type")]
    pub type_expr: String,
}

impl Field {
    /// Number of names sharing this field's type.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the field declares no names.
    ///
    /// Such a field never leaves model building; the check exists for
    /// callers constructing fields by hand.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One interface method.
///
/// `results` excludes the trailing `error` result: its presence is
/// validated while building the model but it carries no data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    /// Method identifier
    pub name: String,
    /// Parameter groups in declaration order
    pub parameters: Vec<Field>,
    /// Result groups in declaration order, without the error result
    pub results: Vec<Field>,
}

impl Method {
    /// Returns `true` if the method returns nothing besides its error.
    #[inline]
    #[must_use]
    pub const fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// Returns `true` if the method name is exported (upper-case first letter).
    ///
    /// `net/rpc` only dispatches exported methods.
    #[must_use]
    pub fn is_exported(&self) -> bool {
        self.name.chars().next().is_some_and(char::is_uppercase)
    }
}

/// Root model passed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationContext {
    /// Declared name of the target interface
    pub interface_type_name: String,
    /// Package clause of the generated file
    pub package_name: String,
    /// Methods in declaration order
    pub methods: Vec<Method>,
    /// Import paths to emit, deduplicated, registry import first
    pub imports: Vec<String>,
    /// Type of the client's transport handle
    pub transport_type_name: String,
}

impl GenerationContext {
    /// Creates a generation context.
    ///
    /// Imports are deduplicated (first occurrence wins) and the
    /// registry import `net/rpc` is prepended when missing, since the
    /// generated server stub registers itself through it.
    #[must_use]
    pub fn new(
        interface_type_name: impl Into<String>,
        package_name: impl Into<String>,
        methods: Vec<Method>,
        imports: Vec<String>,
        transport_type_name: impl Into<String>,
    ) -> Self {
        Self {
            interface_type_name: interface_type_name.into(),
            package_name: package_name.into(),
            methods,
            imports: normalize_imports(imports),
            transport_type_name: transport_type_name.into(),
        }
    }

    /// Returns the number of modeled methods.
    #[inline]
    #[must_use]
    pub const fn method_count(&self) -> usize {
        self.methods.len()
    }
}

fn normalize_imports(imports: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(imports.len() + 1);
    if !imports.iter().any(|i| i == DEFAULT_IMPORT) {
        out.push(DEFAULT_IMPORT.to_string());
    }
    for import in imports {
        let import = import.trim();
        if import.is_empty() || out.iter().any(|existing| existing == import) {
            continue;
        }
        out.push(import.to_string());
    }
    out
}
