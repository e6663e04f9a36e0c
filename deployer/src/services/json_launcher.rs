//! Launcher that hands the configuration to another host as JSON

use std::io::Write;

use crate::error::{DeployerError, DeployerResult};
use crate::traits::AppletLauncher;
use crate::types::{AttributeSet, DeploymentConfig, ParameterSet};

/// Writes each launch as a pretty-printed [`DeploymentConfig`] document
pub struct JsonLauncher<W: Write> {
    writer: W,
}

impl<W: Write> JsonLauncher<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> AppletLauncher for JsonLauncher<W> {
    fn run_applet(
        &mut self,
        attributes: &AttributeSet,
        parameters: &ParameterSet,
        minimum_version: &str,
    ) -> DeployerResult<()> {
        let config = DeploymentConfig {
            attributes: attributes.clone(),
            parameters: parameters.clone(),
            minimum_version: minimum_version.to_string(),
        };

        let mut json = serde_json::to_string_pretty(&config)?;
        json.push('\n');

        self.writer
            .write_all(json.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(DeployerError::launch)
    }
}
