//! Stub generation pipeline.
//!
//! Runs parse, lookup, model building, and rendering for one interface
//! and returns the generated text. Nothing here touches the target file:
//! writing and formatting belong to the caller, which only sees text
//! once every stage has succeeded.
//!
//! # Examples
//!
//! ```
//! use rpcgen_codegen::StubGenerator;
//! use rpcgen_core::GeneratorConfig;
//!
//! let source = "package arith\n\ntype Arith interface {\n\tAdd(a, b int) (sum int, err error)\n}\n";
//! let config = GeneratorConfig::builder()
//!     .source("arith.go")
//!     .interface_name("Arith")
//!     .build();
//!
//! let generator = StubGenerator::new().unwrap();
//! let stubs = generator.generate(&config, source).unwrap();
//!
//! assert_eq!(stubs.target.to_str(), Some("arithrpc.go"));
//! assert_eq!(stubs.method_count(), 1);
//! assert!(stubs.content.contains("func (_c *ArithClient) Add(a, b int) (sum int, err error) {"));
//! ```

use crate::builder::MethodModelBuilder;
use crate::target::resolve_target;
use crate::template_engine::{STUBS_TEMPLATE, TemplateEngine};
use crate::view::StubView;
use crate::walker::DeclarationIndex;
use rpcgen_core::{GenerationContext, GeneratorConfig, Result};
use rpcgen_syntax::{SourceFile, parse_file};
use std::path::PathBuf;

/// Output of one generation run.
#[derive(Debug, Clone)]
pub struct GeneratedStubs {
    /// Where the stubs should be written
    pub target: PathBuf,
    /// Generated Go source
    pub content: String,
    /// Model the stubs were rendered from
    pub context: GenerationContext,
}

impl GeneratedStubs {
    /// Number of methods that received stubs.
    #[must_use]
    pub fn method_count(&self) -> usize {
        self.context.method_count()
    }
}

/// Generator for net/rpc client and server stubs.
#[derive(Debug)]
pub struct StubGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl StubGenerator<'_> {
    /// Creates a new generator.
    ///
    /// # Errors
    ///
    /// Returns an error if template registration fails.
    pub fn new() -> Result<Self> {
        let engine = TemplateEngine::new()?;
        Ok(Self { engine })
    }

    /// Generates stubs for `config.interface_name` from `source`, the
    /// contents of `config.source`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - The source does not parse
    /// - The interface is missing, not an interface, or generic
    /// - A method violates the naming or error-result conventions
    /// - Rendering fails
    pub fn generate(&self, config: &GeneratorConfig, source: &str) -> Result<GeneratedStubs> {
        config.validate()?;

        let file_name = config.source.display().to_string();
        tracing::info!(
            "Generating stubs for {} from {file_name}",
            config.interface_name
        );

        let file = parse_file(&file_name, source)?;
        let context = Self::build_context(config, &file)?;
        let content = self.render(&context)?;
        let target = resolve_target(config);

        tracing::info!(
            "Rendered {} methods ({} bytes) for {}",
            context.method_count(),
            content.len(),
            target.display()
        );

        Ok(GeneratedStubs {
            target,
            content,
            context,
        })
    }

    /// Locates the interface in `file` and builds the generation context.
    ///
    /// # Errors
    ///
    /// Returns lookup and validation errors; see [`StubGenerator::generate`].
    pub fn build_context(config: &GeneratorConfig, file: &SourceFile) -> Result<GenerationContext> {
        let index = DeclarationIndex::new(file);
        let iface = index.find_interface(&config.interface_name)?;
        let methods = MethodModelBuilder::new(file).build(iface)?;

        if methods.is_empty() {
            tracing::warn!(
                "interface {} declares no methods; generating empty stubs",
                config.interface_name
            );
        }

        let package = config
            .package_name
            .clone()
            .unwrap_or_else(|| file.package.name.clone());

        Ok(GenerationContext::new(
            config.interface_name.clone(),
            package,
            methods,
            config.imports.clone(),
            config.rpc_client_type.clone(),
        ))
    }

    /// Renders the stub file for a built context.
    ///
    /// # Errors
    ///
    /// Returns [`rpcgen_core::Error::TemplateError`] if rendering fails.
    pub fn render(&self, context: &GenerationContext) -> Result<String> {
        let view = StubView::new(context);
        for method in &view.methods {
            tracing::debug!("rendering {} -> {}", method.name, method.request_type);
        }
        self.engine.render(STUBS_TEMPLATE, &view)
    }
}
