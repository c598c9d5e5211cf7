//! Locating the root configuration document
//!
//! The search runs in a fixed order and the first hit wins:
//!
//! 1. the override property (`hazelcast.config` for the server), naming a
//!    file or, with a `classpath:` prefix, a classpath resource
//! 2. `<product>.xml` in the working directory
//! 3. `<product>.xml` on the classpath
//! 4. the packaged default `<product>-default.xml` on the classpath
//!
//! An override that names something missing is fatal, as is a missing
//! packaged default. The other steps fall through.

use crate::{ConfigType, Error, PropertyLookup, Result};
use hzcfg_fs::resource::ResourceReader;
use hzcfg_fs::{NormalizedPath, ResourceLocation, ResourcePrefix, ResourceResolver};

/// Which step of the search produced the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A file named by the override property
    SystemPropertyFile,
    /// A classpath resource named by the override property
    SystemPropertyClasspath,
    /// `<product>.xml` in the working directory
    WorkingDirectory,
    /// `<product>.xml` on the classpath
    Classpath,
    /// The packaged default on the classpath
    PackagedDefault,
}

impl SourceKind {
    /// Whether the source is identified by a filesystem path rather than a
    /// classpath resource name.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::SystemPropertyFile | Self::WorkingDirectory)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SystemPropertyFile => "system-property-file",
            Self::SystemPropertyClasspath => "system-property-classpath",
            Self::WorkingDirectory => "working-directory",
            Self::Classpath => "classpath",
            Self::PackagedDefault => "default",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity of a located configuration, without its stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub kind: SourceKind,
    pub location: ResourceLocation,
    /// The classpath resource name, for classpath kinds only
    pub resource: Option<String>,
}

impl SourceDescriptor {
    /// The configuration file, for file-identified sources.
    pub fn config_file(&self) -> Option<&NormalizedPath> {
        if self.kind.is_file() {
            self.location.file_path()
        } else {
            None
        }
    }

    /// The classpath resource name, for classpath-identified sources.
    pub fn classpath_resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Human readable origin, for diagnostics only.
    pub fn origin(&self) -> String {
        match &self.resource {
            Some(resource) => format!("classpath resource '{resource}' ({})", self.location),
            None => format!("file '{}'", self.location),
        }
    }
}

/// The located configuration: where it came from and an open stream over it.
pub struct ConfigSource {
    descriptor: SourceDescriptor,
    stream: ResourceReader,
}

impl ConfigSource {
    pub fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    pub fn kind(&self) -> SourceKind {
        self.descriptor.kind
    }

    pub fn location(&self) -> &ResourceLocation {
        &self.descriptor.location
    }

    pub fn origin(&self) -> String {
        self.descriptor.origin()
    }

    pub fn into_parts(self) -> (SourceDescriptor, ResourceReader) {
        (self.descriptor, self.stream)
    }

    pub fn into_reader(self) -> ResourceReader {
        self.stream
    }
}

impl std::fmt::Debug for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigSource")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Finds the configuration for one product.
pub struct SourceLocator<'a> {
    config_type: ConfigType,
    resources: &'a ResourceResolver,
    properties: &'a dyn PropertyLookup,
}

impl<'a> SourceLocator<'a> {
    /// # Arguments
    ///
    /// * `resources` - supplies the working directory and the classpath
    /// * `properties` - consulted for the override property only
    pub fn new(
        config_type: ConfigType,
        resources: &'a ResourceResolver,
        properties: &'a dyn PropertyLookup,
    ) -> Self {
        Self {
            config_type,
            resources,
            properties,
        }
    }

    /// Run the search and open the winning source.
    ///
    /// # Errors
    ///
    /// Returns an error if the override names a missing file, an empty or
    /// unknown classpath resource, or if nothing is found and the packaged
    /// default is missing too.
    pub fn locate(&self) -> Result<ConfigSource> {
        if let Some(source) = self.load_from_system_property()? {
            return Ok(source);
        }
        if let Some(source) = self.load_from_working_directory()? {
            return Ok(source);
        }
        if let Some(source) = self.load_from_classpath()? {
            return Ok(source);
        }
        self.load_default_from_classpath()
    }

    fn load_from_system_property(&self) -> Result<Option<ConfigSource>> {
        let property = self.config_type.system_property();
        let Some(value) = self
            .properties
            .lookup(property)
            .map(str::trim)
            .filter(|value| !value.is_empty())
        else {
            tracing::debug!(property, "Override property not set, skipping");
            return Ok(None);
        };

        tracing::info!(property, value, "Loading configuration named by override property");

        let source = match ResourcePrefix::Classpath.strip(value) {
            Some(resource) => self.load_system_property_classpath_resource(property, resource)?,
            None => self.load_system_property_file(value)?,
        };
        Ok(Some(source))
    }

    fn load_system_property_file(&self, value: &str) -> Result<ConfigSource> {
        let path = self.resources.absolute(value);
        tracing::info!(path = %path, "Using configuration file");

        let Some(location) = self.resources.locate_file(value) else {
            return Err(Error::ConfigFileNotFound {
                path: path.to_native(),
            });
        };
        self.open(SourceKind::SystemPropertyFile, location, None)
    }

    fn load_system_property_classpath_resource(
        &self,
        property: &str,
        resource: &str,
    ) -> Result<ConfigSource> {
        tracing::info!(resource, "Using classpath resource");

        if resource.is_empty() {
            return Err(Error::EmptyClasspathResource {
                property: property.to_string(),
            });
        }
        let location = self.resources.locate_classpath(resource).ok_or_else(|| {
            Error::ClasspathResourceNotFound {
                resource: resource.to_string(),
            }
        })?;
        self.open(
            SourceKind::SystemPropertyClasspath,
            location,
            Some(resource.to_string()),
        )
    }

    fn load_from_working_directory(&self) -> Result<Option<ConfigSource>> {
        let file_name = self.config_type.config_file_name();
        let path = self.resources.working_dir().join(file_name);
        if !path.is_file() {
            tracing::debug!(file = file_name, dir = %self.resources.working_dir(), "Not found in working directory, skipping");
            return Ok(None);
        }

        tracing::info!(path = %path, "Loading configuration from working directory");
        let location = ResourceLocation::File(path.canonicalize()?);
        self.open(SourceKind::WorkingDirectory, location, None).map(Some)
    }

    fn load_from_classpath(&self) -> Result<Option<ConfigSource>> {
        let resource = self.config_type.config_file_name();
        let Some(location) = self.resources.locate_classpath(resource) else {
            tracing::debug!(resource, "Not found on classpath, skipping");
            return Ok(None);
        };

        tracing::info!(resource, location = %location, "Loading configuration from classpath");
        self.open(SourceKind::Classpath, location, Some(resource.to_string()))
            .map(Some)
    }

    fn load_default_from_classpath(&self) -> Result<ConfigSource> {
        let resource = self.config_type.default_resource_name();
        tracing::info!(resource, "Loading packaged default configuration from classpath");

        let location =
            self.resources
                .locate_classpath(resource)
                .ok_or_else(|| Error::DefaultConfigMissing {
                    resource: resource.to_string(),
                })?;
        self.open(
            SourceKind::PackagedDefault,
            location,
            Some(resource.to_string()),
        )
    }

    fn open(
        &self,
        kind: SourceKind,
        location: ResourceLocation,
        resource: Option<String>,
    ) -> Result<ConfigSource> {
        let stream = self.resources.open(&location)?;
        Ok(ConfigSource {
            descriptor: SourceDescriptor {
                kind,
                location,
                resource,
            },
            stream,
        })
    }
}

