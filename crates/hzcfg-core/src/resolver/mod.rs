//! Variable substitution and import expansion over a parsed document
//!
//! [`ConfigResolver::process`] runs two passes over a document:
//!
//! 1. `${name}` substitution in every attribute and value-carrying node
//!    (warnings only, never fatal)
//! 2. expansion of root-level `<import resource="..."/>` directives, each
//!    imported document being fully processed before its child elements are
//!    spliced in place of the directive
//!
//! The resolver holds no per-load state; the set of resources loaded so far
//! lives in an [`ImportContext`] created by each `process` call.

mod imports;
mod substitution;

pub use imports::ImportContext;
pub use substitution::{Substitution, SubstitutionWarning, substitute};

use crate::{ConfigType, PropertyLookup, Result, XmlDocument};
use hzcfg_fs::ResourceResolver;
use xmltree::Element;

/// Resolves placeholders and imports for one product's documents.
pub struct ConfigResolver<'a> {
    config_type: ConfigType,
    resources: &'a ResourceResolver,
    properties: &'a dyn PropertyLookup,
}

impl<'a> ConfigResolver<'a> {
    /// Create a resolver for `config_type`.
    ///
    /// # Arguments
    ///
    /// * `resources` - used to resolve and open `<import>` resources
    /// * `properties` - values for `${name}` placeholders
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

    pub fn config_type(&self) -> ConfigType {
        self.config_type
    }

    /// Resolve `document` in place.
    ///
    /// When the document knows its origin, that origin counts as already
    /// loaded, so a document importing itself is reported as a cycle.
    ///
    /// # Errors
    ///
    /// Misplaced or malformed `<import>` elements, unresolvable or unreadable
    /// import resources, cycles and malformed imported XML are fatal.
    pub fn process(&self, document: &mut XmlDocument) -> Result<()> {
        let mut context = ImportContext::new();
        if let Some(origin) = document.origin() {
            context.enter(origin)?;
        }
        self.process_with_context(document.root_mut(), &mut context)
    }

    /// Resolve a bare root element in place, with a fresh import context.
    pub fn process_root(&self, root: &mut Element) -> Result<()> {
        self.process_with_context(root, &mut ImportContext::new())
    }

    /// Both passes against a caller-owned context. Recursion for imported
    /// documents goes through here with the same context.
    pub fn process_with_context(
        &self,
        root: &mut Element,
        context: &mut ImportContext,
    ) -> Result<()> {
        self.replace_variables(root);
        self.replace_imports(root, context)
    }
}
