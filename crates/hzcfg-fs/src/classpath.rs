//! Classpath-style resource roots
//!
//! A [`ClassPath`] is an ordered list of directories searched for named
//! resources, followed by a table of resources embedded in the binary
//! (the packaged defaults). The first match wins.

use crate::{NormalizedPath, ResourceLocation};
use std::borrow::Cow;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct ClassPath {
    roots: Vec<NormalizedPath>,
    embedded: BTreeMap<String, Cow<'static, [u8]>>,
}

impl ClassPath {
    /// Create an empty classpath: no roots, nothing embedded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ClassPath::push_root`].
    pub fn with_root(mut self, root: impl Into<NormalizedPath>) -> Self {
        self.push_root(root);
        self
    }

    /// Append a resource root directory. Roots are searched in insertion order.
    pub fn push_root(&mut self, root: impl Into<NormalizedPath>) {
        self.roots.push(root.into());
    }

    /// Builder form of [`ClassPath::embed`].
    pub fn with_embedded(
        mut self,
        name: &str,
        content: impl Into<Cow<'static, [u8]>>,
    ) -> Self {
        self.embed(name, content);
        self
    }

    /// Register an in-binary resource under `name`.
    ///
    /// Embedded resources are consulted only after every root directory.
    pub fn embed(&mut self, name: &str, content: impl Into<Cow<'static, [u8]>>) {
        self.embedded
            .insert(resource_key(name).to_string(), content.into());
    }

    pub fn roots(&self) -> &[NormalizedPath] {
        &self.roots
    }

    /// Find a resource by name.
    ///
    /// Returns the canonical location of the first root holding a regular
    /// file with that relative name, else the embedded resource, else `None`.
    /// An empty name never resolves.
    pub fn find(&self, name: &str) -> Option<ResourceLocation> {
        let key = resource_key(name);
        if key.is_empty() {
            return None;
        }

        for root in &self.roots {
            let candidate = root.join(key);
            if candidate.is_file() {
                let canonical = candidate.canonicalize().unwrap_or(candidate);
                tracing::trace!(resource = key, root = %root, "Found resource under classpath root");
                return Some(ResourceLocation::File(canonical));
            }
        }

        if self.embedded.contains_key(key) {
            return Some(ResourceLocation::Embedded(key.to_string()));
        }

        None
    }

    /// Check if a resource of that name can be found.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub(crate) fn embedded(&self, name: &str) -> Option<&Cow<'static, [u8]>> {
        self.embedded.get(resource_key(name))
    }
}

/// Resource names are relative to every root; a leading `/` is ignored.
fn resource_key(name: &str) -> &str {
    name.trim_start_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn first_root_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join("a.xml"), "<first/>").unwrap();
        fs::write(second.path().join("a.xml"), "<second/>").unwrap();

        let classpath = ClassPath::new()
            .with_root(first.path())
            .with_root(second.path());

        let found = classpath.find("a.xml").unwrap();
        let expected = NormalizedPath::new(first.path().join("a.xml"))
            .canonicalize()
            .unwrap();
        assert_eq!(found, ResourceLocation::File(expected));
    }

    #[test]
    fn roots_take_precedence_over_embedded() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("a.xml"), "<disk/>").unwrap();

        let classpath = ClassPath::new()
            .with_embedded("a.xml", &b"<embedded/>"[..])
            .with_root(root.path());

        assert!(matches!(classpath.find("a.xml"), Some(ResourceLocation::File(_))));
    }

    #[test]
    fn embedded_resource_is_found_with_leading_slash() {
        let classpath = ClassPath::new().with_embedded("defaults/a.xml", &b"<a/>"[..]);

        assert_eq!(
            classpath.find("/defaults/a.xml"),
            Some(ResourceLocation::Embedded("defaults/a.xml".into()))
        );
    }

    #[test]
    fn directories_and_empty_names_do_not_resolve() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("conf.xml")).unwrap();

        let classpath = ClassPath::new().with_root(root.path());

        assert!(classpath.find("conf.xml").is_none());
        assert!(classpath.find("").is_none());
        assert!(classpath.find("/").is_none());
    }
}
