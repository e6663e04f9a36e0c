//! Attribute, parameter and request types handed to the deployment toolkit

use serde::{Deserialize, Serialize};
use shared::DeploymentTarget;
use std::collections::BTreeMap;
use std::fmt;

/// Scripting flag key, present in both attribute and parameter sets
pub const SCRIPTING_FLAG: &str = "MAYSCRIPT";
pub const SCRIPTING_ENABLED: &str = "true";

pub const PARAM_JNLP_HREF: &str = "jnlp_href";
pub const PARAM_CACHE_ARCHIVE_EX: &str = "cache_archive_ex";
pub const PARAM_ON_READY: &str = "onready";
pub const PARAM_ON_ERROR: &str = "onerror";
pub const PARAM_ON_FAILOVER: &str = "onfailover";

/// Parameter keys owned by the builder
pub const RESERVED_PARAMETERS: [&str; 6] = [
    PARAM_JNLP_HREF,
    PARAM_CACHE_ARCHIVE_EX,
    SCRIPTING_FLAG,
    PARAM_ON_READY,
    PARAM_ON_ERROR,
    PARAM_ON_FAILOVER,
];

/// The applet is embedded invisibly
pub const APPLET_SIZE: u32 = 1;

pub fn is_reserved_parameter(key: &str) -> bool {
    RESERVED_PARAMETERS.contains(&key)
}

/// Attributes for the embedding `<applet>`/`<object>` element
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AttributeSet {
    pub codebase: String,
    pub code: String,
    pub archive: String,
    pub id: String,
    pub name: String,
    pub classloader_cache: bool,
    #[serde(rename = "MAYSCRIPT")]
    pub mayscript: String,
    pub width: u32,
    pub height: u32,
}

impl AttributeSet {
    pub fn new(codebase: String, target: &DeploymentTarget, identifier: &str) -> Self {
        Self {
            codebase,
            code: target.main_class.clone(),
            archive: target.archive_list(),
            id: identifier.to_string(),
            name: identifier.to_string(),
            classloader_cache: false,
            mayscript: SCRIPTING_ENABLED.to_string(),
            width: APPLET_SIZE,
            height: APPLET_SIZE,
        }
    }
}

/// Parameters passed to the launched applet instance
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ParameterSet(BTreeMap<String, String>);

impl ParameterSet {
    /// Base parameters every deployment carries
    pub fn base(jnlp_href: &str, cache_archive_ex: String) -> Self {
        let mut parameters = Self::default();
        parameters.insert(PARAM_JNLP_HREF, jnlp_href);
        parameters.insert(PARAM_CACHE_ARCHIVE_EX, cache_archive_ex);
        parameters.insert(SCRIPTING_FLAG, SCRIPTING_ENABLED);
        parameters
    }

    /// Insert a parameter, returning the value it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn jnlp_href(&self) -> Option<&str> {
        self.get(PARAM_JNLP_HREF)
    }

    pub fn cache_archive_ex(&self) -> Option<&str> {
        self.get(PARAM_CACHE_ARCHIVE_EX)
    }

    /// Whether the toolkit has a function to report launch failures to
    pub fn has_error_callback(&self) -> bool {
        self.get(PARAM_ON_ERROR).is_some_and(|name| !name.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Name of a page-level function the toolkit calls back by name
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CallbackName(String);

impl CallbackName {
    /// Empty names are treated as absent
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() { None } else { Some(Self(name)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallbackName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional toolkit event callbacks
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackTable {
    pub ready: Option<CallbackName>,
    pub error: Option<CallbackName>,
    pub failover: Option<CallbackName>,
}

impl CallbackTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ready(mut self, name: impl Into<String>) -> Self {
        self.ready = CallbackName::new(name);
        self
    }

    pub fn with_error(mut self, name: impl Into<String>) -> Self {
        self.error = CallbackName::new(name);
        self
    }

    pub fn with_failover(mut self, name: impl Into<String>) -> Self {
        self.failover = CallbackName::new(name);
        self
    }

    /// Parameter key and name for each callback that is set
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &CallbackName)> {
        [
            (PARAM_ON_READY, self.ready.as_ref()),
            (PARAM_ON_ERROR, self.error.as_ref()),
            (PARAM_ON_FAILOVER, self.failover.as_ref()),
        ]
        .into_iter()
        .filter_map(|(key, name)| name.map(|name| (key, name)))
    }
}

/// How extra parameters that reuse a reserved key are handled
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Fail the build with `ReservedParameter`
    #[default]
    Reject,
    /// The extra value replaces the builder's value
    AllowOverride,
}

/// One request to embed an applet
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DeploymentRequest {
    pub identifier: String,
    pub descriptor_path: String,
    #[serde(default)]
    pub extra_parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub callbacks: CallbackTable,
}

impl DeploymentRequest {
    pub fn new(identifier: impl Into<String>, descriptor_path: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            descriptor_path: descriptor_path.into(),
            extra_parameters: BTreeMap::new(),
            callbacks: CallbackTable::default(),
        }
    }

    /// Request using the target's packaged descriptor
    pub fn for_target(identifier: impl Into<String>, target: &DeploymentTarget) -> Self {
        Self::new(identifier, target.descriptor_path.clone())
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_parameters.insert(key.into(), value.into());
        self
    }

    pub fn with_parameters<I, K, V>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.extra_parameters
            .extend(parameters.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn with_callbacks(mut self, callbacks: CallbackTable) -> Self {
        self.callbacks = callbacks;
        self
    }
}

/// Everything the toolkit's `runApplet` receives
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DeploymentConfig {
    pub attributes: AttributeSet,
    pub parameters: ParameterSet,
    pub minimum_version: String,
}
