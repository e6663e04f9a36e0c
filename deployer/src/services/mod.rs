//! Service implementations
//!
//! Real implementations of the capability traits for production use

pub mod json_launcher;
pub mod resolver;
pub mod script_launcher;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use json_launcher::JsonLauncher;
pub use resolver::{DirectoryBaseResolver, DocumentBaseResolver};
pub use script_launcher::{ScriptLauncher, TOOLKIT_FUNCTION, render_script};
