//! `${name}` placeholder substitution
//!
//! Values are scanned left to right. A resolved placeholder is replaced and
//! scanning resumes after the replacement text, so substituted values are
//! never expanded again. Unknown names and unclosed placeholders are
//! reported as warnings and the text is left as it was.

use super::ConfigResolver;
use crate::PropertyLookup;
use xmltree::{Element, XMLNode};

const PLACEHOLDER_START: &str = "${";
const PLACEHOLDER_END: char = '}';

/// A non-fatal problem found while substituting a single value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionWarning {
    /// `${name}` with no matching property; the placeholder is kept
    UnresolvedVariable { name: String },
    /// `${` at `offset` with no closing brace; scanning stopped there
    UnclosedPlaceholder { offset: usize },
}

impl std::fmt::Display for SubstitutionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnresolvedVariable { name } => {
                write!(f, "Could not find a value for property '{name}'")
            }
            Self::UnclosedPlaceholder { offset } => write!(
                f,
                "Bad variable syntax. Could not find a closing curly bracket '}}' after offset {offset}"
            ),
        }
    }
}

/// The outcome of substituting one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub value: String,
    pub warnings: Vec<SubstitutionWarning>,
}

/// Replace every resolvable `${name}` in `input`.
pub fn substitute(input: &str, properties: &dyn PropertyLookup) -> Substitution {
    let mut value = input.to_string();
    let mut warnings = Vec::new();
    let mut cursor = 0;

    while let Some(found) = value[cursor..].find(PLACEHOLDER_START) {
        let start = cursor + found;
        let Some(close) = value[start..].find(PLACEHOLDER_END) else {
            warnings.push(SubstitutionWarning::UnclosedPlaceholder { offset: start });
            break;
        };
        let end = start + close;
        let name = value[start + PLACEHOLDER_START.len()..end].to_string();

        match properties.lookup(&name) {
            Some(replacement) => {
                value.replace_range(start..=end, replacement);
                cursor = start + replacement.len();
            }
            None => {
                warnings.push(SubstitutionWarning::UnresolvedVariable { name });
                cursor = end + PLACEHOLDER_END.len_utf8();
            }
        }
    }

    Substitution { value, warnings }
}

impl ConfigResolver<'_> {
    /// Substitute placeholders in every attribute and every value-carrying
    /// node below and including `element`, depth first.
    pub(super) fn replace_variables(&self, element: &mut Element) {
        for value in element.attributes.values_mut() {
            self.replace_value(value, &element.name);
        }

        for child in element.children.iter_mut() {
            match child {
                XMLNode::Element(nested) => self.replace_variables(nested),
                XMLNode::Text(value) | XMLNode::CData(value) | XMLNode::Comment(value) => {
                    self.replace_value(value, &element.name)
                }
                XMLNode::ProcessingInstruction(_, Some(data)) => {
                    self.replace_value(data, &element.name)
                }
                _ => {}
            }
        }
    }

    fn replace_value(&self, value: &mut String, node: &str) {
        if !value.contains(PLACEHOLDER_START) {
            return;
        }
        let substitution = substitute(value, self.properties);
        for warning in &substitution.warnings {
            tracing::warn!(node = %node, "{warning} on node: {node}");
        }
        *value = substitution.value;
    }
}
