// Library crate: exposes testable modules for integration tests and
// scripted editing. GUI-specific modules (app, ui) remain in the binary.

pub mod command;
pub mod harness;
pub mod state;
