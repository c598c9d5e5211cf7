//! `<import>` expansion

use super::ConfigResolver;
use crate::{Error, Result, XmlDocument};
use hzcfg_fs::ResourceLocation;
use std::collections::HashSet;
use xmltree::{Element, XMLNode};

const IMPORT_ELEMENT: &str = "import";
const RESOURCE_ATTRIBUTE: &str = "resource";

/// Resources loaded so far during one top-level `process` call.
///
/// A resource may be entered only once; entering it again is reported as a
/// cycle.
#[derive(Debug, Default)]
pub struct ImportContext {
    visited: HashSet<String>,
}

impl ImportContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `location` as loaded.
    pub fn enter(&mut self, location: &ResourceLocation) -> Result<()> {
        let key = location.canonical_key();
        if self.visited.contains(&key) {
            return Err(Error::CyclicImport { location: key });
        }
        self.visited.insert(key);
        Ok(())
    }

    pub fn contains(&self, location: &ResourceLocation) -> bool {
        self.visited.contains(&location.canonical_key())
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

impl ConfigResolver<'_> {
    /// Replace each root-level `<import>` with the child elements of the
    /// document it names.
    pub(super) fn replace_imports(
        &self,
        root: &mut Element,
        context: &mut ImportContext,
    ) -> Result<()> {
        if let Some(parent) = self.find_misplaced_import(root, self.is_product_root(root)) {
            return Err(Error::MisplacedImport {
                parent: parent.name.clone(),
            });
        }

        let has_imports = root
            .children
            .iter()
            .filter_map(XMLNode::as_element)
            .any(|element| self.is_import(element));
        if !has_imports {
            return Ok(());
        }

        // Detach the children so the directives can be replaced while walking them.
        let original = std::mem::take(&mut root.children);
        let mut spliced = Vec::with_capacity(original.len());
        for node in original {
            match node {
                XMLNode::Element(element) if self.is_import(&element) => {
                    let imported = self.load_import(&element, context)?;
                    spliced.extend(imported.into_iter().map(XMLNode::Element));
                }
                other => spliced.push(other),
            }
        }
        root.children = spliced;

        Ok(())
    }

    /// Load, fully resolve and return the child elements of one import.
    fn load_import(&self, import: &Element, context: &mut ImportContext) -> Result<Vec<Element>> {
        let resource = import
            .attributes
            .get(RESOURCE_ATTRIBUTE)
            .map(|value| value.trim())
            .ok_or(Error::MissingImportResource)?;

        let location = self
            .resources
            .locate(resource)
            .ok_or_else(|| Error::ImportNotFound {
                resource: resource.to_string(),
            })?;
        context.enter(&location)?;

        tracing::info!(resource = %resource, location = %location, "Importing configuration resource");

        let stream = self.resources.open(&location)?;
        let mut imported = XmlDocument::parse(stream, Some(location))?;
        self.process_with_context(imported.root_mut(), context)?;

        Ok(imported
            .into_root()
            .children
            .into_iter()
            .filter_map(|node| match node {
                XMLNode::Element(element) => Some(element),
                _ => None,
            })
            .collect())
    }

    /// The first element below `parent` that holds an `<import>` it should
    /// not. Only the product root may hold imports, and only directly.
    fn find_misplaced_import<'e>(
        &self,
        parent: &'e Element,
        parent_is_root: bool,
    ) -> Option<&'e Element> {
        for child in parent.children.iter().filter_map(XMLNode::as_element) {
            if self.is_import(child) && !parent_is_root {
                return Some(parent);
            }
            if let Some(found) = self.find_misplaced_import(child, false) {
                return Some(found);
            }
        }
        None
    }

    fn is_import(&self, element: &Element) -> bool {
        element.name == IMPORT_ELEMENT
            && element.namespace.as_deref() == Some(self.config_type.namespace())
    }

    fn is_product_root(&self, element: &Element) -> bool {
        element.name == self.config_type.root_element()
            && element.namespace.as_deref() == Some(self.config_type.namespace())
    }
}
