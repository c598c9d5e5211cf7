//! [`TestWorkspace`] builder for locator and resolver scenarios.

use hzcfg_fs::{ClassPath, NormalizedPath, ResourceResolver};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory laid out as:
///
/// ```text
/// <root>/
///   work/        working directory
///   classpath/   single classpath root
/// ```
///
/// # Example
///
/// ```rust,no_run
/// use hzcfg_test_utils::workspace::TestWorkspace;
///
/// let ws = TestWorkspace::new();
/// ws.write_classpath("network.xml", "<hazelcast/>");
/// let resolver = ws.resolver();
/// assert!(resolver.locate("network.xml").is_some());
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create the temp directory with empty `work/` and `classpath/`.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("work")).unwrap();
        fs::create_dir_all(temp_dir.path().join("classpath")).unwrap();
        Self { temp_dir }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn work_dir(&self) -> PathBuf {
        self.root().join("work")
    }

    pub fn classpath_dir(&self) -> PathBuf {
        self.root().join("classpath")
    }

    /// Write `content` to `path` relative to the root, creating parents.
    pub fn write(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Write a file into the working directory.
    pub fn write_work(&self, path: &str, content: &str) -> PathBuf {
        self.write(&format!("work/{path}"), content)
    }

    /// Write a resource into the classpath root.
    pub fn write_classpath(&self, path: &str, content: &str) -> PathBuf {
        self.write(&format!("classpath/{path}"), content)
    }

    /// The classpath root with nothing embedded.
    pub fn classpath(&self) -> ClassPath {
        ClassPath::new().with_root(self.classpath_dir())
    }

    /// A resolver over `work/` and `classpath/`.
    pub fn resolver(&self) -> ResourceResolver {
        self.resolver_with(self.classpath())
    }

    /// A resolver over `work/` and a caller-built classpath.
    pub fn resolver_with(&self, classpath: ClassPath) -> ResourceResolver {
        ResourceResolver::new(self.work_dir(), classpath)
    }

    /// Canonical form of `path` relative to the root, as the resolver reports it.
    ///
    /// # Panics
    /// Panics if the path does not exist.
    pub fn canonical(&self, path: &str) -> NormalizedPath {
        NormalizedPath::new(self.root().join(path))
            .canonicalize()
            .unwrap_or_else(|e| panic!("cannot canonicalize {path}: {e}"))
    }
}
