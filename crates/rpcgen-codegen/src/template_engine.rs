//! Template engine for stub generation using Handlebars.
//!
//! Wraps a Handlebars registry with the built-in Go stub template
//! pre-registered. The registry runs in strict mode with escaping
//! disabled and without helpers: views hand it finished strings.
//!
//! # Examples
//!
//! ```
//! use rpcgen_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let mut engine = TemplateEngine::new().unwrap();
//! engine.register_template_string("greeting", "package {{name}}").unwrap();
//! let out = engine.render("greeting", &json!({"name": "arith"})).unwrap();
//! assert_eq!(out, "package arith");
//! ```

use handlebars::Handlebars;
use rpcgen_core::{Error, Result};
use serde::Serialize;

/// Name of the built-in net/rpc stub template.
pub const STUBS_TEMPLATE: &str = "stubs";

/// Template engine for code generation.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl TemplateEngine<'_> {
    /// Creates a new template engine with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if a built-in template fails to
    /// compile.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);

        // Output is Go source, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars
            .register_template_string(STUBS_TEMPLATE, include_str!("../templates/stubs.go.hbs"))
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register stub template: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { handlebars })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A variable referenced by the template is missing
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                message: format!("Template rendering failed: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Registers an additional template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register template '{name}': {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Returns true if a template named `name` is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
