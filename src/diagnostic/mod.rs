pub mod diagnostic;
pub mod logger;
