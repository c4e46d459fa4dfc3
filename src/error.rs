use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sprite generation
#[derive(Error, Diagnostic, Debug)]
pub enum SpriteError {
    #[error("Input error: {message}")]
    #[diagnostic(code(sprites::input))]
    Input {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(sprites::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Encode error: {message}")]
    #[diagnostic(code(sprites::encode))]
    Encode { message: String },
}

pub type Result<T> = std::result::Result<T, SpriteError>;
