pub mod convert;
pub mod ls;
pub mod package;
pub mod validate;
