use tagstyle::CompileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Terminal error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Markup error: {0}")]
    Markup(#[from] CompileError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, ConsoleError>;
