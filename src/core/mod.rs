pub mod interpreter;
pub mod report;

pub use crate::domain::model::{InterpretationInput, InterpretationOutput};
pub use crate::utils::error::Result;
