//! Capability traits injected into the builder
//!
//! The host document location and the deployment toolkit are both outside
//! this crate; they are reached only through these traits so the builder can
//! be exercised without a browser.

use url::Url;

use crate::error::DeployerResult;
use crate::types::{AttributeSet, ParameterSet};

/// Resolves a possibly relative reference against the host document base
#[mockall::automock]
pub trait BaseUrlResolver {
    /// Resolve `reference` to an absolute URL
    fn resolve(&self, reference: &str) -> DeployerResult<Url>;
}

/// The toolkit's `runApplet` entry point
///
/// `Ok` only means the call was handed over. Whether the applet actually
/// starts is reported later by the toolkit through the `onerror`
/// callback; without one, such failures are never observed here.
#[mockall::automock]
pub trait AppletLauncher {
    fn run_applet(
        &mut self,
        attributes: &AttributeSet,
        parameters: &ParameterSet,
        minimum_version: &str,
    ) -> DeployerResult<()>;
}

impl<R: BaseUrlResolver + ?Sized> BaseUrlResolver for Box<R> {
    fn resolve(&self, reference: &str) -> DeployerResult<Url> {
        (**self).resolve(reference)
    }
}

impl<L: AppletLauncher + ?Sized> AppletLauncher for Box<L> {
    fn run_applet(
        &mut self,
        attributes: &AttributeSet,
        parameters: &ParameterSet,
        minimum_version: &str,
    ) -> DeployerResult<()> {
        (**self).run_applet(attributes, parameters, minimum_version)
    }
}
