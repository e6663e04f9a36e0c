//! Deployment target configuration
//!
//! A [`DeploymentTarget`] carries the constants that are fixed when an applet
//! is packaged: the main class, the jars, the cache version tag and the JNLP
//! descriptor path. They can be loaded from a JSON file or from the
//! environment, where a `.env` file in the working directory is honoured.
//!
//! ## Environment variables
//! - `APPLET_MAIN_CLASS`: fully qualified applet class (required)
//! - `APPLET_ARCHIVES`: comma-separated jar list (required)
//! - `APPLET_CACHE_VERSION`: cache version tag (required)
//! - `APPLET_JNLP_PATH`: descriptor path (required)
//! - `APPLET_CACHE_ARCHIVE`: cached jar, defaults to the first archive
//! - `APPLET_MIN_VERSION`: minimum Java runtime, defaults to `1.6`

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{SharedError, SharedResult};

pub const ENV_MAIN_CLASS: &str = "APPLET_MAIN_CLASS";
pub const ENV_ARCHIVES: &str = "APPLET_ARCHIVES";
pub const ENV_CACHE_ARCHIVE: &str = "APPLET_CACHE_ARCHIVE";
pub const ENV_CACHE_VERSION: &str = "APPLET_CACHE_VERSION";
pub const ENV_JNLP_PATH: &str = "APPLET_JNLP_PATH";
pub const ENV_MIN_VERSION: &str = "APPLET_MIN_VERSION";

/// Minimum Java runtime requested from the deployment toolkit
pub const DEFAULT_MINIMUM_VERSION: &str = "1.6";

/// Identifier the relay applet is always embedded under
pub const RELAY_IDENTIFIER: &str = "relay";

/// Separator between the jar name and version in `cache_archive_ex`
pub const CACHE_SEPARATOR: char = ';';

fn default_minimum_version() -> String {
    DEFAULT_MINIMUM_VERSION.to_string()
}

/// Packaging-time constants for one deployable applet
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DeploymentTarget {
    pub main_class: String,
    pub archives: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_archive: Option<String>,
    pub cache_version: String,
    pub descriptor_path: String,
    #[serde(default = "default_minimum_version")]
    pub minimum_version: String,
}

impl DeploymentTarget {
    /// The RTSP multicast relay applet
    pub fn rtsp_multicast_relay(cache_version: impl Into<String>) -> Self {
        Self {
            main_class: "com.larkwoodlabs.RtspMulticastRelayApplet.class".to_string(),
            archives: vec![
                "RtspMulticastRelayApplet.jar".to_string(),
                "jain-sdp-1.0.100.jar".to_string(),
            ],
            cache_archive: None,
            cache_version: cache_version.into(),
            descriptor_path: "RtspMulticastRelayApplet.jnlp".to_string(),
            minimum_version: default_minimum_version(),
        }
    }

    /// A service launcher applet packaged as a single jar
    pub fn service_launcher(
        main_class: impl Into<String>,
        jar_name: impl Into<String>,
        descriptor_path: impl Into<String>,
        cache_version: impl Into<String>,
    ) -> Self {
        Self {
            main_class: main_class.into(),
            archives: vec![jar_name.into()],
            cache_archive: None,
            cache_version: cache_version.into(),
            descriptor_path: descriptor_path.into(),
            minimum_version: default_minimum_version(),
        }
    }

    pub fn with_cache_version(mut self, cache_version: impl Into<String>) -> Self {
        self.cache_version = cache_version.into();
        self
    }

    pub fn with_descriptor_path(mut self, descriptor_path: impl Into<String>) -> Self {
        self.descriptor_path = descriptor_path.into();
        self
    }

    /// Value of the `archive` attribute
    pub fn archive_list(&self) -> String {
        self.archives.join(", ")
    }

    /// Jar whose cache entry is versioned
    pub fn cache_archive_name(&self) -> &str {
        self.cache_archive
            .as_deref()
            .or_else(|| self.archives.first().map(String::as_str))
            .unwrap_or_default()
    }

    /// Value of the `cache_archive_ex` parameter
    pub fn cache_archive_ex(&self) -> String {
        format!(
            "{}{}{}",
            self.cache_archive_name(),
            CACHE_SEPARATOR,
            self.cache_version
        )
    }

    /// Check the constants can produce a well-formed attribute and parameter set
    pub fn validate(&self) -> SharedResult<()> {
        if self.main_class.trim().is_empty() {
            return Err(SharedError::missing("main_class"));
        }

        if self.archives.is_empty() {
            return Err(SharedError::missing("archives"));
        }

        for archive in &self.archives {
            check_archive_name("archives", archive)?;
        }

        if let Some(cache_archive) = &self.cache_archive {
            check_archive_name("cache_archive", cache_archive)?;
        }

        if self.cache_version.is_empty() {
            return Err(SharedError::missing("cache_version"));
        }
        if self.cache_version.contains(CACHE_SEPARATOR) {
            return Err(SharedError::invalid("cache_version", &self.cache_version));
        }

        if self.descriptor_path.trim().is_empty() {
            return Err(SharedError::missing("descriptor_path"));
        }

        if self.minimum_version.trim().is_empty() {
            return Err(SharedError::missing("minimum_version"));
        }

        Ok(())
    }

    /// Parse and validate a JSON target definition
    pub fn from_json_str(json: &str) -> SharedResult<Self> {
        let target: Self = serde_json::from_str(json)?;
        target.validate()?;
        Ok(target)
    }

    /// Load and validate a JSON target definition from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> SharedResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> SharedResult<Self> {
        // A missing .env file is not an error
        let _ = dotenv::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> SharedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| SharedError::missing(name))
        };

        let archives = required(ENV_ARCHIVES)?
            .split(',')
            .map(str::trim)
            .filter(|archive| !archive.is_empty())
            .map(str::to_string)
            .collect();

        let target = Self {
            main_class: required(ENV_MAIN_CLASS)?,
            archives,
            cache_archive: lookup(ENV_CACHE_ARCHIVE).filter(|value| !value.trim().is_empty()),
            cache_version: required(ENV_CACHE_VERSION)?,
            descriptor_path: required(ENV_JNLP_PATH)?,
            minimum_version: lookup(ENV_MIN_VERSION)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(default_minimum_version),
        };

        target.validate()?;
        Ok(target)
    }
}

fn check_archive_name(field: &str, archive: &str) -> SharedResult<()> {
    if archive.trim().is_empty() || archive.contains(',') || archive.contains(CACHE_SEPARATOR) {
        return Err(SharedError::invalid(field, archive));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_relay_preset() {
        let target = DeploymentTarget::rtsp_multicast_relay("2011.01.01");

        assert!(target.validate().is_ok());
        assert_eq!(
            target.archive_list(),
            "RtspMulticastRelayApplet.jar, jain-sdp-1.0.100.jar"
        );
        assert_eq!(
            target.cache_archive_ex(),
            "RtspMulticastRelayApplet.jar;2011.01.01"
        );
        assert_eq!(target.minimum_version, "1.6");
    }

    #[test]
    fn test_explicit_cache_archive_wins() {
        let mut target = DeploymentTarget::rtsp_multicast_relay("7");
        target.cache_archive = Some("jain-sdp-1.0.100.jar".to_string());

        assert_eq!(target.cache_archive_ex(), "jain-sdp-1.0.100.jar;7");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = DeploymentTarget::service_launcher("a.Main", "a.jar", "a.jnlp", "1");
        assert!(base.validate().is_ok());

        let no_archives = DeploymentTarget {
            archives: Vec::new(),
            ..base.clone()
        };
        assert!(matches!(
            no_archives.validate(),
            Err(SharedError::MissingConfig { .. })
        ));

        let semicolon_jar = DeploymentTarget {
            archives: vec!["a;b.jar".to_string()],
            ..base.clone()
        };
        assert!(matches!(
            semicolon_jar.validate(),
            Err(SharedError::InvalidConfig { .. })
        ));

        let comma_jar = DeploymentTarget {
            archives: vec!["a.jar,b.jar".to_string()],
            ..base.clone()
        };
        assert!(comma_jar.validate().is_err());

        let bad_version = base.clone().with_cache_version("1;2");
        assert!(matches!(
            bad_version.validate(),
            Err(SharedError::InvalidConfig { field, .. }) if field == "cache_version"
        ));

        let no_descriptor = base.with_descriptor_path("  ");
        assert!(no_descriptor.validate().is_err());
    }

    #[test]
    fn test_from_json_str_applies_defaults() {
        let json = r#"{
            "main_class": "org.js4ms.Launcher",
            "archives": ["launcher.jar"],
            "cache_version": "0.0.0.1",
            "descriptor_path": "jnlp/launcher.jnlp"
        }"#;

        let target = DeploymentTarget::from_json_str(json).unwrap();
        assert_eq!(target.minimum_version, DEFAULT_MINIMUM_VERSION);
        assert_eq!(target.cache_archive, None);
        assert_eq!(target.cache_archive_ex(), "launcher.jar;0.0.0.1");
    }

    #[test]
    fn test_from_json_str_rejects_invalid_target() {
        let json = r#"{
            "main_class": "org.js4ms.Launcher",
            "archives": [],
            "cache_version": "1",
            "descriptor_path": "launcher.jnlp"
        }"#;

        assert!(DeploymentTarget::from_json_str(json).is_err());
        assert!(matches!(
            DeploymentTarget::from_json_str("{ not json"),
            Err(SharedError::SerializationError { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let target = DeploymentTarget::rtsp_multicast_relay("42");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&target).unwrap()).unwrap();

        let loaded = DeploymentTarget::from_file(file.path()).unwrap();
        assert_eq!(loaded, target);
    }

    #[test]
    fn test_from_file_missing() {
        let result = DeploymentTarget::from_file("/nonexistent/target.json");
        assert!(matches!(result, Err(SharedError::IoError(_))));
    }

    #[test]
    fn test_from_lookup() {
        let lookup = lookup_from(&[
            (ENV_MAIN_CLASS, "com.example.Main"),
            (ENV_ARCHIVES, "main.jar, lib.jar"),
            (ENV_CACHE_VERSION, "3"),
            (ENV_JNLP_PATH, "main.jnlp"),
            (ENV_MIN_VERSION, "1.7"),
        ]);

        let target = DeploymentTarget::from_lookup(lookup).unwrap();
        assert_eq!(target.archives, vec!["main.jar", "lib.jar"]);
        assert_eq!(target.minimum_version, "1.7");
        assert_eq!(target.cache_archive_ex(), "main.jar;3");
    }

    #[test]
    fn test_from_lookup_missing_required() {
        let lookup = lookup_from(&[(ENV_MAIN_CLASS, "com.example.Main")]);

        let result = DeploymentTarget::from_lookup(lookup);
        assert!(matches!(
            result,
            Err(SharedError::MissingConfig { field }) if field == ENV_ARCHIVES
        ));
    }
}
