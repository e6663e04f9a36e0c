//! Test fixtures and data for deployer tests
//!
//! Consistent targets, URLs and identifiers shared by all suites.

#![allow(dead_code)]

use deployer::DocumentBaseResolver;
use shared::DeploymentTarget;

pub struct TestFixtures;

impl TestFixtures {
    /// Host page the descriptor is resolved against
    pub const DOCUMENT_URL: &'static str = "http://host/dir/page.html";
    pub const DESCRIPTOR: &'static str = "app.jnlp";
    pub const RESOLVED_DESCRIPTOR: &'static str = "http://host/dir/app.jnlp";
    pub const CODEBASE: &'static str = "http://host/dir/";

    pub const IDENTIFIER: &'static str = "launcher";
    pub const MAIN_CLASS: &'static str = "org.js4ms.service.launcher.ServiceLauncherApplet";
    pub const JAR_NAME: &'static str = "ServiceLauncherApplet.jar";
    pub const CACHE_VERSION: &'static str = "2011.03.14";
    pub const MINIMUM_VERSION: &'static str = "1.6";

    /// Single-jar service launcher target
    pub fn launcher_target() -> DeploymentTarget {
        DeploymentTarget::service_launcher(
            Self::MAIN_CLASS,
            Self::JAR_NAME,
            Self::DESCRIPTOR,
            Self::CACHE_VERSION,
        )
    }

    /// The relay target with its two jars
    pub fn relay_target() -> DeploymentTarget {
        DeploymentTarget::rtsp_multicast_relay(Self::CACHE_VERSION)
    }

    pub fn document_resolver() -> DocumentBaseResolver {
        DocumentBaseResolver::parse(Self::DOCUMENT_URL).unwrap()
    }

    /// Identifiers that must round-trip into `id` and `name`
    pub fn identifiers() -> Vec<&'static str> {
        vec!["relay", "launcher", "player-1", "", "a b", "ünïcødé"]
    }
}
