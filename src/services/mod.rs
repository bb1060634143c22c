pub mod data_generator;
pub mod filler;
pub mod orchestrator;

// Re-export commonly used services
pub use data_generator::*;
pub use filler::*;
pub use orchestrator::*;
