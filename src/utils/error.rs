use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterpretError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

pub type Result<T> = std::result::Result<T, InterpretError>;
