// Library surface for the analysis pipeline and its tests.
// The binary in main.rs only wires these stages together.
pub mod config;
pub mod drill;
pub mod error;
pub mod export;
pub mod flatten;
pub mod loader;
pub mod report;
pub mod util;
