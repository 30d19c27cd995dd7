pub mod config;
pub mod errors;
pub mod generator;
pub mod outputs;
pub mod paths;

pub use config::GeneratorConfig;
pub use generator::PathGenerator;
pub use outputs::{CaseOutputs, TestOutputs};
