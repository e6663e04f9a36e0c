//! Test helper functions for deployer tests

#![allow(dead_code)]

use deployer::{
    AppletLauncher, AttributeSet, CollisionPolicy, DeployerResult, DeploymentBuilder,
    DeploymentConfig, DeploymentRequest, DocumentBaseResolver, ParameterSet,
};
use shared::DeploymentTarget;

use super::fixtures::TestFixtures;

/// Launcher that keeps every call it receives
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    pub calls: Vec<DeploymentConfig>,
}

impl AppletLauncher for RecordingLauncher {
    fn run_applet(
        &mut self,
        attributes: &AttributeSet,
        parameters: &ParameterSet,
        minimum_version: &str,
    ) -> DeployerResult<()> {
        self.calls.push(DeploymentConfig {
            attributes: attributes.clone(),
            parameters: parameters.clone(),
            minimum_version: minimum_version.to_string(),
        });
        Ok(())
    }
}

pub struct TestHelpers;

impl TestHelpers {
    /// Builder for a target, resolving against the fixture document
    pub fn builder_for(target: DeploymentTarget) -> DeploymentBuilder<DocumentBaseResolver> {
        DeploymentBuilder::new(target, TestFixtures::document_resolver()).unwrap()
    }

    /// Launcher target builder with the default collision policy
    pub fn launcher_builder() -> DeploymentBuilder<DocumentBaseResolver> {
        Self::builder_for(TestFixtures::launcher_target())
    }

    pub fn overriding_builder() -> DeploymentBuilder<DocumentBaseResolver> {
        Self::launcher_builder().with_policy(CollisionPolicy::AllowOverride)
    }

    /// Fixture request against the fixture descriptor
    pub fn request() -> DeploymentRequest {
        DeploymentRequest::new(TestFixtures::IDENTIFIER, TestFixtures::DESCRIPTOR)
    }

    /// Build with the launcher builder, panicking on error
    pub fn build(request: &DeploymentRequest) -> DeploymentConfig {
        Self::launcher_builder().build(request).unwrap()
    }

    /// Assert every builder-owned parameter is present
    pub fn assert_base_parameters(parameters: &ParameterSet) {
        assert_eq!(parameters.jnlp_href(), Some(TestFixtures::RESOLVED_DESCRIPTOR));
        assert_eq!(
            parameters.cache_archive_ex(),
            Some(format!("{};{}", TestFixtures::JAR_NAME, TestFixtures::CACHE_VERSION).as_str())
        );
        assert_eq!(parameters.get("MAYSCRIPT"), Some("true"));
    }
}
