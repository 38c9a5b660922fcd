//! Identifier transforms for generated Go code.
//!
//! # Examples
//!
//! ```
//! use rpcgen_codegen::naming;
//!
//! assert_eq!(naming::public_name("sum"), "Sum");
//! assert_eq!(naming::service_type("Arith"), "ArithService");
//! assert_eq!(naming::request_type("Arith", "Add"), "ArithAddRequest");
//! ```

use rpcgen_core::Field;

/// Upper-cases the first character of a Go identifier.
///
/// The rest of the identifier is kept as is, so the transform is
/// idempotent: `Add` stays `Add`.
///
/// # Examples
///
/// ```
/// use rpcgen_codegen::naming::public_name;
///
/// assert_eq!(public_name("x"), "X");
/// assert_eq!(public_name("userID"), "UserID");
/// assert_eq!(public_name("Add"), "Add");
/// ```
#[must_use]
pub fn public_name(ident: &str) -> String {
    let mut chars = ident.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Builds a model [`Field`] from the names of one parameter or result
/// group and their shared type.
///
/// Each name is transformed independently; collisions between groups
/// are not detected.
#[must_use]
pub fn field<S: AsRef<str>>(names: &[S], type_expr: &str) -> Field {
    Field {
        names: names.iter().map(|n| public_name(n.as_ref())).collect(),
        lower_names: names.iter().map(|n| n.as_ref().to_string()).collect(),
        type_expr: type_expr.to_string(),
    }
}

/// Server wrapper type: `ArithService`.
#[must_use]
pub fn service_type(interface: &str) -> String {
    format!("{interface}Service")
}

/// Client wrapper type: `ArithClient`.
#[must_use]
pub fn client_type(interface: &str) -> String {
    format!("{interface}Client")
}

/// Request payload type: `ArithAddRequest`.
#[must_use]
pub fn request_type(interface: &str, method: &str) -> String {
    format!("{interface}{method}Request")
}

/// Response payload type: `ArithAddResponse`.
#[must_use]
pub fn response_type(interface: &str, method: &str) -> String {
    format!("{interface}{method}Response")
}
