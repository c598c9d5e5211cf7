//! Error types for hzcfg-core

use std::path::PathBuf;

/// Result type for hzcfg-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a configuration load.
///
/// Substitution problems are not represented here: they are logged and the
/// load continues.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The override property names a file that does not exist
    #[error("Config file at '{path}' doesn't exist")]
    ConfigFileNotFound { path: PathBuf },

    /// The override property is `classpath:` with nothing after it
    #[error("Classpath resource named by '{property}' can't be empty")]
    EmptyClasspathResource { property: String },

    /// The override property names a classpath resource that cannot be found
    #[error("Could not load classpath resource: {resource}")]
    ClasspathResourceNotFound { resource: String },

    /// The packaged default is missing from the classpath
    #[error(
        "Could not find '{resource}' on the classpath. This may be due to a wrongly packaged or corrupted distribution"
    )]
    DefaultConfigMissing { resource: String },

    /// An `<import>` element somewhere other than directly under the root
    #[error("<import> element can appear only in the top level of the XML, found under <{parent}>")]
    MisplacedImport { parent: String },

    /// An `<import>` element without a `resource` attribute
    #[error("<import> element is missing its 'resource' attribute")]
    MissingImportResource,

    /// The resource named by an `<import>` cannot be resolved
    #[error("Failed to load resource: {resource}")]
    ImportNotFound { resource: String },

    /// The same resource was reached twice during one load
    #[error("Cyclic loading of resource {location} is detected")]
    CyclicImport { location: String },

    /// The XML parser rejected a document
    #[error("Failed to parse XML from {origin}: {message}")]
    Parse { origin: String, message: String },

    /// The resolved document could not be serialized
    #[error("Failed to write XML: {message}")]
    Write { message: String },

    /// A property definition that is not `key=value`
    #[error("Invalid property definition '{definition}', expected key=value")]
    InvalidProperty { definition: String },

    /// A config type name outside server, client, jet
    #[error("Unknown config type '{name}', expected one of: server, client, jet")]
    UnknownConfigType { name: String },

    // Transparent wrappers for underlying errors
    /// Filesystem error from hzcfg-fs
    #[error(transparent)]
    Fs(#[from] hzcfg_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Coarse classification of fatal errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No usable configuration source, or a named source does not exist
    Resolution,
    /// The document breaks the import rules
    Structural,
    /// An import or resource could not be resolved or read
    Dependency,
    /// A resource was loaded twice
    Cycle,
    /// A document is not well-formed XML
    Parse,
    /// Bad caller input such as a malformed property definition
    Usage,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigFileNotFound { .. }
            | Self::EmptyClasspathResource { .. }
            | Self::ClasspathResourceNotFound { .. }
            | Self::DefaultConfigMissing { .. } => ErrorKind::Resolution,
            Self::MisplacedImport { .. } | Self::MissingImportResource => ErrorKind::Structural,
            Self::ImportNotFound { .. } | Self::Fs(_) | Self::Io(_) | Self::Write { .. } => {
                ErrorKind::Dependency
            }
            Self::CyclicImport { .. } => ErrorKind::Cycle,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::InvalidProperty { .. } | Self::UnknownConfigType { .. } => ErrorKind::Usage,
        }
    }
}
