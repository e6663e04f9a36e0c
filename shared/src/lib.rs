//! Shared pieces of the applet deployment tooling
//!
//! Holds the error type, tracing setup and the packaging-time deployment
//! target configuration used by the builder and the CLI.

pub mod config;
pub mod errors;
pub mod logging;

pub use config::DeploymentTarget;
pub use errors::*;
