//! The products whose configuration this crate resolves.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which product a configuration document belongs to.
///
/// Supplied by the caller, never inferred from the document. Each variant
/// fixes the expected root element, the namespace that qualifies `<import>`
/// and the names searched by [`crate::SourceLocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigType {
    #[default]
    Server,
    Client,
    Jet,
}

impl ConfigType {
    pub const ALL: [ConfigType; 3] = [Self::Server, Self::Client, Self::Jet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Client => "client",
            Self::Jet => "jet",
        }
    }

    /// Local name of the document root element.
    pub fn root_element(&self) -> &'static str {
        match self {
            Self::Server => "hazelcast",
            Self::Client => "hazelcast-client",
            Self::Jet => "hazelcast-jet",
        }
    }

    /// Namespace URI of the root element and of `<import>` directives.
    pub fn namespace(&self) -> &'static str {
        match self {
            Self::Server => "http://www.hazelcast.com/schema/config",
            Self::Client => "http://www.hazelcast.com/schema/client-config",
            Self::Jet => "http://www.hazelcast.com/schema/jet-config",
        }
    }

    /// Property naming an explicit configuration file or classpath resource.
    pub fn system_property(&self) -> &'static str {
        match self {
            Self::Server => "hazelcast.config",
            Self::Client => "hazelcast.client.config",
            Self::Jet => "hazelcast.jet.config",
        }
    }

    /// File name looked up in the working directory and on the classpath.
    pub fn config_file_name(&self) -> &'static str {
        match self {
            Self::Server => "hazelcast.xml",
            Self::Client => "hazelcast-client.xml",
            Self::Jet => "hazelcast-jet.xml",
        }
    }

    /// Packaged default resource, the last step of the search.
    pub fn default_resource_name(&self) -> &'static str {
        match self {
            Self::Server => "hazelcast-default.xml",
            Self::Client => "hazelcast-client-default.xml",
            Self::Jet => "hazelcast-jet-default.xml",
        }
    }
}

impl FromStr for ConfigType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownConfigType { name: s.to_string() })
    }
}

impl std::fmt::Display for ConfigType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
