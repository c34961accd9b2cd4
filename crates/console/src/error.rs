use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input reached end of file while a prompt was waiting.
    #[error("Input closed")]
    InputClosed,
}
