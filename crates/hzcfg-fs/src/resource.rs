//! Generic resource resolution shared by source location and imports
//!
//! A resource name is resolved in this order:
//!
//! 1. `file:<path>` - only the filesystem is consulted
//! 2. `classpath:<name>` - only the classpath is consulted
//! 3. anything else - an existing regular file first (relative paths are
//!    taken against the working directory), then the classpath
//!
//! Network locations are never fetched.

use crate::{ClassPath, Error, NormalizedPath, ResourcePrefix, Result, io};
use std::io::{Cursor, Read};

/// A boxed byte stream over an opened resource.
pub type ResourceReader = Box<dyn Read>;

/// Where a resolved resource lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceLocation {
    /// A canonical absolute filesystem path
    File(NormalizedPath),
    /// The name of a resource embedded in the classpath
    Embedded(String),
}

impl ResourceLocation {
    /// The identifier used to detect repeated loads of the same resource.
    pub fn canonical_key(&self) -> String {
        self.to_string()
    }

    /// The filesystem path, for file-backed locations.
    pub fn file_path(&self) -> Option<&NormalizedPath> {
        match self {
            Self::File(path) => Some(path),
            Self::Embedded(_) => None,
        }
    }
}

impl std::fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{path}"),
            Self::Embedded(name) => write!(f, "{}{name}", ResourcePrefix::Classpath),
        }
    }
}

/// Resolves resource names against a working directory and a classpath.
#[derive(Debug, Clone)]
pub struct ResourceResolver {
    working_dir: NormalizedPath,
    classpath: ClassPath,
}

impl ResourceResolver {
    pub fn new(working_dir: impl Into<NormalizedPath>, classpath: ClassPath) -> Self {
        Self {
            working_dir: working_dir.into(),
            classpath,
        }
    }

    /// Create a resolver rooted at the process working directory.
    pub fn for_current_dir(classpath: ClassPath) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
        Ok(Self::new(cwd, classpath))
    }

    pub fn working_dir(&self) -> &NormalizedPath {
        &self.working_dir
    }

    pub fn classpath(&self) -> &ClassPath {
        &self.classpath
    }

    /// Resolve a resource name to its canonical location.
    pub fn locate(&self, name: &str) -> Option<ResourceLocation> {
        if let Some(path) = ResourcePrefix::File.strip(name) {
            return self.locate_file(path);
        }
        if let Some(resource) = ResourcePrefix::Classpath.strip(name) {
            return self.classpath.find(resource);
        }
        self.locate_file(name).or_else(|| self.classpath.find(name))
    }

    /// Resolve `path` as an existing regular file.
    pub fn locate_file(&self, path: &str) -> Option<ResourceLocation> {
        if path.is_empty() {
            return None;
        }
        let absolute = self.absolute(path);
        if !absolute.is_file() {
            return None;
        }
        let canonical = absolute.canonicalize().unwrap_or(absolute);
        Some(ResourceLocation::File(canonical))
    }

    /// Resolve `name` on the classpath only.
    pub fn locate_classpath(&self, name: &str) -> Option<ResourceLocation> {
        self.classpath.find(name)
    }

    /// Make `path` absolute against the working directory, without touching
    /// the filesystem.
    pub fn absolute(&self, path: &str) -> NormalizedPath {
        self.working_dir.resolve(path)
    }

    /// Open a located resource for reading.
    pub fn open(&self, location: &ResourceLocation) -> Result<ResourceReader> {
        match location {
            ResourceLocation::File(path) => Ok(Box::new(io::open_read(path)?)),
            ResourceLocation::Embedded(name) => {
                let content = self.classpath.embedded(name).cloned().ok_or_else(|| {
                    Error::EmbeddedResourceMissing { name: name.clone() }
                })?;
                Ok(Box::new(Cursor::new(content)))
            }
        }
    }
}
