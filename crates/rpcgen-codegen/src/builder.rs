//! Method model building.
//!
//! Turns an interface body into ordered [`Method`] records and enforces
//! the conventions the generated stubs rely on:
//!
//! - every parameter and result is named
//! - the last result is a single `error`, which is dropped from the model
//!
//! Any violation aborts the whole run; nothing is rendered for a partly
//! valid interface.

use crate::naming;
use rpcgen_core::{Error, Field, Method, Result};
use rpcgen_syntax::{FieldList, InterfaceElem, InterfaceType, MethodSpec, SourceFile};

/// Type spelling that marks the error result.
pub const ERROR_TYPE: &str = "error";

/// Builds the method model for one interface.
#[derive(Debug)]
pub struct MethodModelBuilder<'f> {
    file: &'f SourceFile,
}

impl<'f> MethodModelBuilder<'f> {
    /// Creates a builder reporting positions against `file`.
    #[must_use]
    pub const fn new(file: &'f SourceFile) -> Self {
        Self { file }
    }

    /// Models every explicit method of `iface` in declaration order.
    ///
    /// Embedded interfaces and type-set terms are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] for the first method that has
    /// an unnamed parameter or result, or lacks a trailing error result.
    pub fn build(&self, iface: &InterfaceType) -> Result<Vec<Method>> {
        let mut methods = Vec::new();
        for elem in &iface.elems {
            match elem {
                InterfaceElem::Method(spec) => methods.push(self.build_method(spec)?),
                InterfaceElem::Embedded(text) => {
                    tracing::warn!(
                        "{}: skipping embedded element '{}'; only explicit methods get stubs",
                        self.file.position(text.span),
                        text.text
                    );
                }
            }
        }
        Ok(methods)
    }

    /// Models a single method.
    ///
    /// # Errors
    ///
    /// See [`MethodModelBuilder::build`].
    pub fn build_method(&self, spec: &MethodSpec) -> Result<Method> {
        let name = &spec.name.name;
        let parameters = self.build_fields(name, &spec.signature.params)?;
        let mut results = self.build_fields(name, &spec.signature.results)?;

        let has_error = results
            .last()
            .is_some_and(|last| last.type_expr == ERROR_TYPE && last.len() == 1);
        if !has_error {
            return Err(Error::ValidationError {
                position: self.file.position(spec.name.span),
                method: Some(name.clone()),
                message: format!("method {name} must have error as last return value"),
            });
        }
        results.pop();

        tracing::debug!(
            "modeled {name}: {} parameter groups, {} result groups",
            parameters.len(),
            results.len()
        );

        let method = Method {
            name: name.clone(),
            parameters,
            results,
        };
        if !method.is_exported() {
            tracing::warn!(
                "{}: method {name} is not exported; net/rpc will not dispatch it",
                self.file.position(spec.name.span)
            );
        }
        Ok(method)
    }

    fn build_fields(&self, method: &str, list: &FieldList) -> Result<Vec<Field>> {
        list.fields
            .iter()
            .map(|field| {
                if field.names.is_empty() {
                    return Err(Error::ValidationError {
                        position: self.file.position(field.span),
                        method: Some(method.to_string()),
                        message: format!(
                            "RPC interface parameters and results must all be named (method {method}, type {})",
                            field.ty.text
                        ),
                    });
                }
                let names: Vec<&str> = field.names.iter().map(|n| n.name.as_str()).collect();
                Ok(naming::field(&names, &field.ty.text))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::DeclarationIndex;
    use rpcgen_syntax::parse_file;

    fn build(body: &str) -> Result<Vec<Method>> {
        let source = format!("package svc\n\ntype Svc interface {{\n{body}}}\n");
        let file = parse_file("svc.go", &source)?;
        let iface = DeclarationIndex::new(&file).find_interface("Svc")?;
        MethodModelBuilder::new(&file).build(iface)
    }

    #[test]
    fn test_arith_model() {
        let methods = build("\tAdd(a, b int) (sum int, err error)\n").unwrap();
        assert_eq!(methods.len(), 1);
        let add = &methods[0];
        assert_eq!(add.name, "Add");
        assert_eq!(add.parameters, vec![naming::field(&["a", "b"], "int")]);
        assert_eq!(add.results, vec![naming::field(&["sum"], "int")]);
    }

    #[test]
    fn test_error_only_result() {
        let methods = build("\tPing() (err error)\n").unwrap();
        assert!(methods[0].parameters.is_empty());
        assert!(!methods[0].has_results());
    }

    #[test]
    fn test_declaration_order_preserved() {
        let methods = build(
            "\tC() (err error)\n\tA(x int) (err error)\n\tB(y, z string, w []byte) (n int, err error)\n",
        )
        .unwrap();
        let names: Vec<_> = methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
        assert_eq!(methods[2].parameters[0].lower_names, vec!["y", "z"]);
        assert_eq!(methods[2].parameters[1].names, vec!["W"]);
    }

    #[test]
    fn test_missing_error_result() {
        let err = build("\tAdd(a, b int) (sum int)\n").unwrap_err();
        assert!(err.is_validation_error());
        assert_eq!(
            err.to_string(),
            "svc.go:4:2: method Add must have error as last return value"
        );
        match err {
            Error::ValidationError { method, .. } => assert_eq!(method.as_deref(), Some("Add")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_no_results_at_all() {
        let err = build("\tFire(event string)\n").unwrap_err();
        assert!(err.to_string().contains("method Fire must have error"));
    }

    #[test]
    fn test_error_not_last() {
        let err = build("\tDo() (err error, n int)\n").unwrap_err();
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_earlier_error_result_kept_as_data() {
        let methods = build("\tLast() (prev error, err error)\n").unwrap();
        assert_eq!(methods[0].results, vec![naming::field(&["prev"], "error")]);
    }

    #[test]
    fn test_grouped_error_result_rejected() {
        let err = build("\tDo() (a, b error)\n").unwrap_err();
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_unnamed_parameter() {
        let err = build("\tAdd(int, int) (sum int, err error)\n").unwrap_err();
        assert!(err.is_validation_error());
        assert!(err.to_string().starts_with("svc.go:4:6"), "{err}");
        assert!(err.to_string().contains("must all be named"));
    }

    #[test]
    fn test_unnamed_error_result() {
        let err = build("\tAdd(a, b int) error\n").unwrap_err();
        assert!(err.to_string().contains("must all be named"), "{err}");
    }

    #[test]
    fn test_embedded_elements_skipped() {
        let methods = build("\tio.Closer\n\tPing() (err error)\n").unwrap();
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].name, "Ping");
    }

    #[test]
    fn test_unexported_method_still_modeled() {
        let methods = build("\tping() (err error)\n\tPong() (err error)\n").unwrap();
        assert_eq!(methods.len(), 2);
        assert!(!methods[0].is_exported());
        assert!(methods[1].is_exported());
    }

    #[test]
    fn test_type_text_preserved() {
        let methods =
            build("\tPut(ctx context.Context, m map[string][]*Item) (ids []int64, err error)\n").unwrap();
        assert_eq!(methods[0].parameters[0].type_expr, "context.Context");
        assert_eq!(methods[0].parameters[1].type_expr, "map[string][]*Item");
        assert_eq!(methods[0].results[0].type_expr, "[]int64");
    }
}
