//! Output path derivation.

use rpcgen_core::GeneratorConfig;
use std::path::{Path, PathBuf};

/// Extension used when the source file has none.
const DEFAULT_EXTENSION: &str = "go";

/// Derives the output path next to `source`.
///
/// The final extension is replaced by `suffix` followed by the same
/// extension, so only the last dot counts: `api/v1.x/svc.go` becomes
/// `api/v1.x/svcrpc.go`.
///
/// # Examples
///
/// ```
/// use rpcgen_codegen::default_target;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(default_target(Path::new("arith.go"), "rpc"), PathBuf::from("arithrpc.go"));
/// assert_eq!(default_target(Path::new("svc/arith"), "rpc"), PathBuf::from("svc/arithrpc.go"));
/// ```
#[must_use]
pub fn default_target(source: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = source
        .extension()
        .map_or_else(|| DEFAULT_EXTENSION.to_string(), |e| e.to_string_lossy().into_owned());
    source.with_file_name(format!("{stem}{suffix}.{extension}"))
}

/// Returns the configured target, or the default derived from the source.
#[must_use]
pub fn resolve_target(config: &GeneratorConfig) -> PathBuf {
    config
        .target
        .clone()
        .unwrap_or_else(|| default_target(&config.source, &config.target_suffix))
}
