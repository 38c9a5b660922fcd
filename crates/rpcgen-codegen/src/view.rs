//! Render views for the stub template.
//!
//! Every fragment the template substitutes is computed here, so the
//! template itself only iterates and pastes strings.

use crate::field_list::{function_args, public_fields, public_refs_with_prefix, refs_with_prefix};
use crate::naming;
use rpcgen_core::{GenerationContext, Method};
use serde::Serialize;

/// Top-level template data.
#[derive(Debug, Clone, Serialize)]
pub struct StubView {
    /// Package clause of the generated file
    pub package_name: String,
    /// Import paths, one per line
    pub imports: Vec<String>,
    /// Interface the stubs wrap
    pub interface_name: String,
    /// `<Interface>Service`
    pub service_type: String,
    /// `<Interface>Client`
    pub client_type: String,
    /// Client transport handle type
    pub transport_type: String,
    /// Per-method fragments in declaration order
    pub methods: Vec<MethodView>,
}

/// Precomputed fragments for one method.
#[derive(Debug, Clone, Serialize)]
pub struct MethodView {
    /// Method name
    pub name: String,
    /// `<Interface><Method>Request`
    pub request_type: String,
    /// `<Interface><Method>Response`
    pub response_type: String,
    /// Request struct body
    pub request_fields: String,
    /// Response struct body
    pub response_fields: String,
    /// Server-side assignment targets: `response.Sum`
    pub dispatch_results: String,
    /// Server-side call arguments: `request.A, request.B`
    pub dispatch_args: String,
    /// Client method parameters: `a, b int`
    pub client_params: String,
    /// Client method named results, without `err error`
    pub client_results: String,
    /// Request literal contents: `a, b`
    pub request_args: String,
    /// Client return values, without `err`: `_response.Sum`
    pub response_refs: String,
    /// Whether anything besides the error is returned
    pub has_results: bool,
}

impl StubView {
    /// Builds the view for a validated generation context.
    #[must_use]
    pub fn new(context: &GenerationContext) -> Self {
        let interface = &context.interface_type_name;
        Self {
            package_name: context.package_name.clone(),
            imports: context.imports.clone(),
            interface_name: interface.clone(),
            service_type: naming::service_type(interface),
            client_type: naming::client_type(interface),
            transport_type: context.transport_type_name.clone(),
            methods: context
                .methods
                .iter()
                .map(|method| MethodView::new(interface, method))
                .collect(),
        }
    }
}

impl MethodView {
    /// Builds the fragments for `method` of `interface`.
    #[must_use]
    pub fn new(interface: &str, method: &Method) -> Self {
        Self {
            name: method.name.clone(),
            request_type: naming::request_type(interface, &method.name),
            response_type: naming::response_type(interface, &method.name),
            request_fields: public_fields(&method.parameters),
            response_fields: public_fields(&method.results),
            dispatch_results: public_refs_with_prefix("response.", &method.results),
            dispatch_args: public_refs_with_prefix("request.", &method.parameters),
            client_params: function_args(&method.parameters),
            client_results: function_args(&method.results),
            request_args: refs_with_prefix("", &method.parameters),
            response_refs: public_refs_with_prefix("_response.", &method.results),
            has_results: method.has_results(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::field;

    fn add() -> Method {
        Method {
            name: "Add".to_string(),
            parameters: vec![field(&["a", "b"], "int")],
            results: vec![field(&["sum"], "int")],
        }
    }

    #[test]
    fn test_method_fragments() {
        let view = MethodView::new("Arith", &add());
        assert_eq!(view.request_type, "ArithAddRequest");
        assert_eq!(view.response_type, "ArithAddResponse");
        assert_eq!(view.request_fields, "A, B int");
        assert_eq!(view.response_fields, "Sum int");
        assert_eq!(view.dispatch_results, "response.Sum");
        assert_eq!(view.dispatch_args, "request.A, request.B");
        assert_eq!(view.client_params, "a, b int");
        assert_eq!(view.client_results, "sum int");
        assert_eq!(view.request_args, "a, b");
        assert_eq!(view.response_refs, "_response.Sum");
        assert!(view.has_results);
    }

    #[test]
    fn test_stub_view() {
        let context = GenerationContext::new("Arith", "arith", vec![add()], vec![], "*rpc.Client");
        let view = StubView::new(&context);
        assert_eq!(view.service_type, "ArithService");
        assert_eq!(view.client_type, "ArithClient");
        assert_eq!(view.imports, vec!["net/rpc"]);
        assert_eq!(view.methods.len(), 1);
    }
}
