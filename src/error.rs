use miette::Diagnostic;
use thiserror::Error;

/// Main error type for flagsprite operations
#[derive(Error, Diagnostic, Debug)]
pub enum FlagError {
    #[error("IO error: {0}")]
    #[diagnostic(code(flagsprite::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(flagsprite::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(flagsprite::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error with {path}: {message}")]
    #[diagnostic(code(flagsprite::render))]
    Render {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(flagsprite::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(flagsprite::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, FlagError>;
