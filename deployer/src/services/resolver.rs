//! Base URL resolvers
//!
//! Resolution follows the same reference rules a browser applies when a
//! relative `href` is assigned to an anchor in the host document.

use std::path::Path;
use url::Url;

use crate::error::{DeployerError, DeployerResult};
use crate::traits::BaseUrlResolver;

/// Resolves against the URL of the host page
#[derive(Debug, Clone)]
pub struct DocumentBaseResolver {
    base: Url,
}

impl DocumentBaseResolver {
    pub fn new(base: Url) -> DeployerResult<Self> {
        if base.cannot_be_a_base() {
            return Err(DeployerError::invalid_base(base.as_str(), "URL cannot be a base"));
        }
        Ok(Self { base })
    }

    /// Parse the document URL, e.g. `http://host/dir/page.html`
    pub fn parse(base: &str) -> DeployerResult<Self> {
        let url = Url::parse(base).map_err(|e| DeployerError::invalid_base(base, e))?;
        Self::new(url)
    }

    pub fn base(&self) -> &Url {
        &self.base
    }
}

impl BaseUrlResolver for DocumentBaseResolver {
    fn resolve(&self, reference: &str) -> DeployerResult<Url> {
        self.base
            .join(reference)
            .map_err(|e| DeployerError::resolution(reference, e))
    }
}

/// Resolves against a local directory, served as `file://`
#[derive(Debug, Clone)]
pub struct DirectoryBaseResolver {
    inner: DocumentBaseResolver,
}

impl DirectoryBaseResolver {
    /// `dir` must be an absolute path
    pub fn new<P: AsRef<Path>>(dir: P) -> DeployerResult<Self> {
        let dir = dir.as_ref();
        let url = Url::from_directory_path(dir).map_err(|_| {
            let input = dir.display().to_string();
            DeployerError::invalid_base(&input, "not an absolute directory path")
        })?;
        Ok(Self {
            inner: DocumentBaseResolver::new(url)?,
        })
    }

    pub fn current_dir() -> DeployerResult<Self> {
        let dir = std::env::current_dir()?;
        Self::new(dir)
    }

    pub fn base(&self) -> &Url {
        self.inner.base()
    }
}

impl BaseUrlResolver for DirectoryBaseResolver {
    fn resolve(&self, reference: &str) -> DeployerResult<Url> {
        self.inner.resolve(reference)
    }
}
