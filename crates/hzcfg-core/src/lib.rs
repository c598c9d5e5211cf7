//! Layered XML configuration resolution
//!
//! This crate turns a product's XML configuration into a single flat
//! document:
//!
//! - **Source location**: override property, working directory, classpath,
//!   packaged default ([`SourceLocator`])
//! - **Variable substitution**: `${name}` placeholders replaced from a
//!   [`PropertyLookup`], unresolved ones kept and logged
//! - **Import expansion**: root-level `<import resource="..."/>` directives
//!   replaced by the imported document's elements, depth first, with cycle
//!   detection ([`ConfigResolver`])
//!
//! Interpreting the resolved document is left to the caller.
//!
//! # Architecture
//!
//! ```text
//!              hzcfg-cli
//!                  |
//!              hzcfg-core
//!   locator -> document -> resolver
//!                  |
//!              hzcfg-fs
//!   NormalizedPath, ClassPath, ResourceResolver
//! ```
//!
//! # Example
//!
//! ```ignore
//! use hzcfg_core::{ConfigType, Properties, XmlConfigLoader};
//! use hzcfg_fs::ClassPath;
//!
//! let loader = XmlConfigLoader::for_current_dir(
//!     ConfigType::Server,
//!     ClassPath::new().with_root("conf"),
//!     Properties::from_env(),
//! )?;
//! let loaded = loader.load()?;
//! println!("{}", loaded.document.to_xml_string()?);
//! ```

pub mod config_type;
pub mod document;
pub mod error;
pub mod loader;
pub mod locator;
pub mod properties;
pub mod resolver;
pub mod settings;

pub use config_type::ConfigType;
pub use document::XmlDocument;
pub use error::{Error, ErrorKind, Result};
pub use loader::{LoadedConfig, XmlConfigLoader};
pub use locator::{ConfigSource, SourceDescriptor, SourceKind, SourceLocator};
pub use properties::{Properties, PropertyLookup};
pub use resolver::{
    ConfigResolver, ImportContext, Substitution, SubstitutionWarning, substitute,
};
pub use settings::Settings;
