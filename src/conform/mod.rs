//! The declarative field-mapping layer (§4.1): the closed condition
//! grammar used by `conditional_values`, the closed function registry each
//! mapping chain step draws from, and the engine that walks a `conform`
//! document against a raw source row.

pub mod condition;
pub mod functions;
pub mod mapping;

pub use functions::{DomainType, FunctionCall, OutLang, RowContext};
pub use mapping::apply_conform;
