//! Field list rendering.
//!
//! A single formatting primitive produces every comma- or
//! newline-separated fragment the stub template needs: struct field
//! declarations, function parameter lists, argument lists, and struct
//! literal contents.
//!
//! # Examples
//!
//! ```
//! use rpcgen_codegen::field_list;
//! use rpcgen_codegen::naming::field;
//!
//! let params = vec![field(&["a", "b"], "int"), field(&["op"], "string")];
//!
//! assert_eq!(field_list::public_fields(&params), "A, B int\n\tOp string");
//! assert_eq!(field_list::function_args(&params), "a, b int, op string");
//! assert_eq!(field_list::refs_with_prefix("", &params), "a, b, op");
//! assert_eq!(field_list::public_refs_with_prefix("request.", &params), "request.A, request.B, request.Op");
//! ```

use rpcgen_core::Field;

/// Renders `fields` as one string.
///
/// For each field its names (public or declared, each preceded by
/// `prefix`) are joined with `", "`, followed by `" " + type` when
/// `with_types` is set; the per-field strings are joined with
/// `delimiter`. An empty slice renders as the empty string.
#[must_use]
pub fn render(fields: &[Field], prefix: &str, delimiter: &str, with_types: bool, public: bool) -> String {
    fields
        .iter()
        .map(|field| {
            let names = if public {
                &field.names
            } else {
                &field.lower_names
            };
            let mut out = names
                .iter()
                .map(|name| format!("{prefix}{name}"))
                .collect::<Vec<_>>()
                .join(", ");
            if with_types {
                out.push(' ');
                out.push_str(&field.type_expr);
            }
            out
        })
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Struct field declarations, one group per line: `A, B int\n\tSum int`.
#[must_use]
pub fn public_fields(fields: &[Field]) -> String {
    render(fields, "", "\n\t", true, true)
}

/// Declared names with a prefix: `a, b`.
#[must_use]
pub fn refs_with_prefix(prefix: &str, fields: &[Field]) -> String {
    render(fields, prefix, ", ", false, false)
}

/// Public names with a prefix: `request.A, request.B`.
#[must_use]
pub fn public_refs_with_prefix(prefix: &str, fields: &[Field]) -> String {
    render(fields, prefix, ", ", false, true)
}

/// Function parameter list: `a, b int, op string`.
#[must_use]
pub fn function_args(fields: &[Field]) -> String {
    render(fields, "", ", ", true, false)
}
