// Domain layer: value types shared by the interpreter and the report helpers.

pub mod model;
