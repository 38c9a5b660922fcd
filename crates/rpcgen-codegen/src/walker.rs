//! Declaration lookup.
//!
//! Locating the target interface is a two-step affair: index every
//! top-level type declaration by name, then destructure the one that
//! was asked for. The first declaration with a given name wins.

use rpcgen_core::{Error, Result};
use rpcgen_syntax::{InterfaceType, SourceFile, TypeExpr, TypeSpec};
use std::collections::HashMap;

/// Name index over the top-level type declarations of one file.
#[derive(Debug)]
pub struct DeclarationIndex<'f> {
    file: &'f SourceFile,
    types: HashMap<&'f str, &'f TypeSpec>,
}

impl<'f> DeclarationIndex<'f> {
    /// Indexes `file`'s type declarations in source order.
    #[must_use]
    pub fn new(file: &'f SourceFile) -> Self {
        let mut types = HashMap::new();
        for spec in file.type_specs() {
            types.entry(spec.name.name.as_str()).or_insert(spec);
        }
        tracing::debug!("{}: indexed {} type declarations", file.file_name, types.len());
        Self { file, types }
    }

    /// Looks up a type declaration by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'f TypeSpec> {
        self.types.get(name).copied()
    }

    /// Number of indexed type names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the file declares no types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Finds the interface named `name`.
    ///
    /// # Errors
    ///
    /// - [`Error::InterfaceNotFound`] if no type carries that name
    /// - [`Error::NotAnInterface`] if the type is not an interface
    /// - [`Error::Unsupported`] if the interface has type parameters
    pub fn find_interface(&self, name: &str) -> Result<&'f InterfaceType> {
        let spec = self.get(name).ok_or_else(|| Error::InterfaceNotFound {
            name: name.to_string(),
            file: self.file.file_name.clone(),
        })?;

        let iface = match &spec.ty {
            TypeExpr::Interface(iface) => iface,
            TypeExpr::Other(_) => {
                return Err(Error::NotAnInterface {
                    name: name.to_string(),
                    position: self.file.position(spec.name.span),
                });
            }
        };

        if let Some(params) = &spec.type_params {
            return Err(Error::Unsupported {
                position: self.file.position(params.span),
                message: format!("generic interface {name}{} cannot be served over net/rpc", params.text),
            });
        }

        Ok(iface)
    }
}
