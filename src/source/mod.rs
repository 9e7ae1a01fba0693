pub mod source_model;
pub mod validate;
