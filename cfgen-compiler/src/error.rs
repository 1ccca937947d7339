use miette::Diagnostic;
use thiserror::Error;

/// Schema-authoring guidance for the container conventions the compiler relies on.
pub const GUIDELINES_URL: &str =
    "https://github.com/sonic-net/SONiC/blob/master/doc/mgmt/SONiC_YANG_Model_Guidelines.md";

/// Result type for cfgen-compiler operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("module '{module}' not found")]
    #[diagnostic(
        code(cfgen::module_not_found),
        help("loaded modules: {available}")
    )]
    ModuleNotFound { module: String, available: String },

    #[error("module '{module}' has no top-level container (see {url})", url = GUIDELINES_URL)]
    #[diagnostic(
        code(cfgen::missing_top_level_container),
        help("wrap the module's tables in a container named after the module, e.g. 'container {module}'"),
        url("https://github.com/sonic-net/SONiC/blob/master/doc/mgmt/SONiC_YANG_Model_Guidelines.md")
    )]
    MissingTopLevelContainer { module: String },

    #[error(
        "module '{module}': top-level container '{container}' has no table containers (see {url})",
        url = GUIDELINES_URL
    )]
    #[diagnostic(
        code(cfgen::missing_table_container),
        help("declare each table as a container inside '{container}'"),
        url("https://github.com/sonic-net/SONiC/blob/master/doc/mgmt/SONiC_YANG_Model_Guidelines.md")
    )]
    MissingTableContainer { module: String, container: String },

    #[error("phase '{phase}' failed: {message}")]
    #[diagnostic(code(cfgen::phase_failed))]
    PhaseFailed { phase: String, message: String },
}

impl Error {
    /// Create a phase failure.
    pub fn phase(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Error::PhaseFailed {
            phase: phase.into(),
            message: message.into(),
        }
    }

    pub(crate) fn module_not_found(module: &str, available: &[&str]) -> Self {
        let available = if available.is_empty() {
            "none".to_string()
        } else {
            available.join(", ")
        };
        Error::ModuleNotFound {
            module: module.to_string(),
            available,
        }
    }
}
