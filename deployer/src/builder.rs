//! Deployment configuration builder
//!
//! Turns a [`DeploymentRequest`] into the attribute and parameter sets the
//! toolkit expects, then hands them to an [`AppletLauncher`]. Each call is
//! independent: nothing is cached between builds.

use shared::{DeploymentTarget, deploy_debug, deploy_info, deploy_warn};
use url::Url;

use crate::error::{DeployerError, DeployerResult};
use crate::traits::{AppletLauncher, BaseUrlResolver};
use crate::types::{
    AttributeSet, CollisionPolicy, DeploymentConfig, DeploymentRequest, ParameterSet,
    is_reserved_parameter,
};

/// Directory part of a resolved descriptor URL, through the last `/`
pub fn derive_codebase(resolved: &Url) -> DeployerResult<String> {
    let href = resolved.as_str();
    match href.rfind('/') {
        Some(index) => Ok(href[..=index].to_string()),
        None => Err(DeployerError::resolution(href, "no path separator in resolved URL")),
    }
}

pub struct DeploymentBuilder<R: BaseUrlResolver> {
    target: DeploymentTarget,
    resolver: R,
    policy: CollisionPolicy,
}

impl<R: BaseUrlResolver> DeploymentBuilder<R> {
    /// Create a builder for a validated target
    pub fn new(target: DeploymentTarget, resolver: R) -> DeployerResult<Self> {
        target.validate()?;
        Ok(Self {
            target,
            resolver,
            policy: CollisionPolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: CollisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn target(&self) -> &DeploymentTarget {
        &self.target
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    /// A request for `identifier` against the packaged descriptor
    pub fn request(&self, identifier: impl Into<String>) -> DeploymentRequest {
        DeploymentRequest::for_target(identifier, &self.target)
    }

    /// Build the attribute and parameter sets for one request
    pub fn build(&self, request: &DeploymentRequest) -> DeployerResult<DeploymentConfig> {
        let identifier = request.identifier.as_str();

        let resolved = self.resolver.resolve(&request.descriptor_path)?;
        let codebase = derive_codebase(&resolved)?;
        deploy_debug!(
            identifier,
            "Resolved descriptor {} to {} (codebase {})",
            request.descriptor_path,
            resolved,
            codebase
        );

        let attributes = AttributeSet::new(codebase, &self.target, identifier);
        let mut parameters = ParameterSet::base(resolved.as_str(), self.target.cache_archive_ex());

        for (key, name) in request.callbacks.entries() {
            parameters.insert(key, name.as_str());
        }

        self.merge_extra_parameters(identifier, request, &mut parameters)?;

        if !parameters.has_error_callback() {
            deploy_debug!(
                identifier,
                "No onerror callback set; launch failures will not be reported"
            );
        }

        Ok(DeploymentConfig {
            attributes,
            parameters,
            minimum_version: self.target.minimum_version.clone(),
        })
    }

    /// Build the configuration and pass it to the launcher
    pub fn build_and_launch<L: AppletLauncher + ?Sized>(
        &self,
        request: &DeploymentRequest,
        launcher: &mut L,
    ) -> DeployerResult<DeploymentConfig> {
        let config = self.build(request)?;

        deploy_info!(
            request.identifier,
            "Launching {} from {} (runtime >= {})",
            config.attributes.code,
            config.attributes.codebase,
            config.minimum_version
        );

        launcher.run_applet(&config.attributes, &config.parameters, &config.minimum_version)?;
        Ok(config)
    }

    fn merge_extra_parameters(
        &self,
        identifier: &str,
        request: &DeploymentRequest,
        parameters: &mut ParameterSet,
    ) -> DeployerResult<()> {
        for (key, value) in &request.extra_parameters {
            if is_reserved_parameter(key) {
                match self.policy {
                    CollisionPolicy::Reject => {
                        return Err(DeployerError::ReservedParameter { key: key.clone() });
                    }
                    CollisionPolicy::AllowOverride => {
                        deploy_warn!(identifier, "Extra parameter overrides reserved key {}", key);
                    }
                }
            }
            parameters.insert(key.as_str(), value.as_str());
        }
        Ok(())
    }
}
