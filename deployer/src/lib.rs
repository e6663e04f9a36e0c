//! Applet deployment configuration builder
//!
//! Builds the attribute and parameter sets used to embed a Java applet
//! through the `deployJava.runApplet` toolkit call. The host document base
//! URL and the toolkit are injected as [`BaseUrlResolver`] and
//! [`AppletLauncher`] so the builder runs anywhere, not only inside a page.
//!
//! Failures while building are returned synchronously. Failures of the
//! launched applet are reported by the toolkit to the `onerror` callback,
//! and go unnoticed when no such callback is configured.

pub mod builder;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use builder::{DeploymentBuilder, derive_codebase};
pub use error::{DeployerError, DeployerResult};
pub use types::*;

// Re-export trait definitions
pub use traits::{AppletLauncher, BaseUrlResolver};

// Re-export service implementations
pub use services::{DirectoryBaseResolver, DocumentBaseResolver, JsonLauncher, ScriptLauncher};
