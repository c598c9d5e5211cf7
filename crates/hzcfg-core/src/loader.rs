//! One-call configuration loading: locate, parse, resolve

use crate::{
    ConfigResolver, ConfigSource, ConfigType, Properties, Result, SourceDescriptor,
    SourceLocator, XmlDocument,
};
use hzcfg_fs::{ClassPath, ResourceResolver};
use std::io::Read;

/// A located and fully resolved configuration document.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub source: SourceDescriptor,
    pub document: XmlDocument,
}

/// Loads the configuration of one product.
///
/// Every load gets its own import context, so one loader can be reused for
/// any number of loads.
#[derive(Debug, Clone)]
pub struct XmlConfigLoader {
    config_type: ConfigType,
    resources: ResourceResolver,
    properties: Properties,
}

impl XmlConfigLoader {
    pub fn new(config_type: ConfigType, resources: ResourceResolver, properties: Properties) -> Self {
        Self {
            config_type,
            resources,
            properties,
        }
    }

    /// A loader over the process working directory.
    pub fn for_current_dir(
        config_type: ConfigType,
        classpath: ClassPath,
        properties: Properties,
    ) -> Result<Self> {
        let resources = ResourceResolver::for_current_dir(classpath)?;
        Ok(Self::new(config_type, resources, properties))
    }

    pub fn config_type(&self) -> ConfigType {
        self.config_type
    }

    pub fn resources(&self) -> &ResourceResolver {
        &self.resources
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn locator(&self) -> SourceLocator<'_> {
        SourceLocator::new(self.config_type, &self.resources, &self.properties)
    }

    pub fn resolver(&self) -> ConfigResolver<'_> {
        ConfigResolver::new(self.config_type, &self.resources, &self.properties)
    }

    /// Find the configuration source without reading it.
    pub fn locate(&self) -> Result<ConfigSource> {
        self.locator().locate()
    }

    /// Locate, parse and resolve the configuration.
    pub fn load(&self) -> Result<LoadedConfig> {
        let (source, stream) = self.locate()?.into_parts();
        tracing::info!(kind = %source.kind, origin = %source.origin(), "Resolving configuration");

        let mut document = XmlDocument::parse(stream, Some(source.location.clone()))?;
        self.resolver().process(&mut document)?;

        Ok(LoadedConfig { source, document })
    }

    /// Parse and resolve a caller-supplied stream, skipping the search.
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<XmlDocument> {
        let mut document = XmlDocument::parse(reader, None)?;
        self.resolver().process(&mut document)?;
        Ok(document)
    }

    pub fn load_from_str(&self, xml: &str) -> Result<XmlDocument> {
        self.load_from_reader(xml.as_bytes())
    }
}
