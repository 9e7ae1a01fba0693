pub mod console;
pub mod junit;
pub mod junit_model;
