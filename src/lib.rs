pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::interpreter::interpret;
pub use crate::core::report::{balance_index, bottom_n, element_cards, top_n};
pub use crate::domain::model::{
    Element, InterpretationInput, InterpretationOutput, RankedElement, ReportCard, Severity,
};
pub use crate::utils::error::{InterpretError, Result};
pub use crate::utils::validation::Validate;
