//! Mutable XML document tree
//!
//! Parsing and serialization are delegated to `xmltree`; this module only
//! attaches the origin of a document so diagnostics and cycle detection can
//! name where it came from.

use crate::{Error, Result};
use hzcfg_fs::ResourceLocation;
use std::io::{Read, Write};
use std::str::FromStr;
use xmltree::{Element, EmitterConfig, ParserConfig, XMLNode};

/// A parsed configuration document.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    root: Element,
    origin: Option<ResourceLocation>,
}

impl XmlDocument {
    /// Wrap an already built root element.
    pub fn new(root: Element) -> Self {
        Self { root, origin: None }
    }

    /// Parse a document from a byte stream.
    ///
    /// Comments are kept so that they survive into the resolved output. The
    /// stream is consumed and dropped before this returns, whether or not
    /// parsing succeeded.
    pub fn parse<R: Read>(reader: R, origin: Option<ResourceLocation>) -> Result<Self> {
        let config = ParserConfig::new().ignore_comments(false);
        let root = Element::parse_with_config(reader, config).map_err(|e| Error::Parse {
            origin: describe(origin.as_ref()),
            message: e.to_string(),
        })?;
        Ok(Self { root, origin })
    }

    pub fn with_origin(mut self, origin: ResourceLocation) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn origin(&self) -> Option<&ResourceLocation> {
        self.origin.as_ref()
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }

    /// Direct child elements of the root, in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.root.children.iter().filter_map(XMLNode::as_element)
    }

    /// Serialize as indented XML.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let config = EmitterConfig::new().perform_indent(true);
        self.root
            .write_with_config(writer, config)
            .map_err(|e| Error::Write {
                message: e.to_string(),
            })
    }

    pub fn to_xml_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| Error::Write {
            message: e.to_string(),
        })
    }
}

impl FromStr for XmlDocument {
    type Err = Error;

    fn from_str(xml: &str) -> Result<Self> {
        Self::parse(xml.as_bytes(), None)
    }
}

fn describe(origin: Option<&ResourceLocation>) -> String {
    origin.map_or_else(|| "<stream>".to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_namespace_and_children() {
        let doc: XmlDocument = r#"<hazelcast xmlns="http://www.hazelcast.com/schema/config">
            <cluster-name>dev</cluster-name>
            <!-- note -->
            <network/>
        </hazelcast>"#
            .parse()
            .unwrap();

        assert_eq!(doc.root().name, "hazelcast");
        assert_eq!(
            doc.root().namespace.as_deref(),
            Some("http://www.hazelcast.com/schema/config")
        );
        let names: Vec<_> = doc.child_elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["cluster-name", "network"]);
    }

    #[test]
    fn parse_keeps_comments() {
        let doc: XmlDocument = "<hazelcast><!-- keep me --><a/></hazelcast>".parse().unwrap();

        assert!(
            doc.root()
                .children
                .iter()
                .any(|node| matches!(node, XMLNode::Comment(text) if text.contains("keep me")))
        );
        assert!(doc.to_xml_string().unwrap().contains("<!-- keep me -->"));
    }

    #[test]
    fn malformed_xml_names_origin() {
        let origin = ResourceLocation::Embedded("broken.xml".into());
        let err = XmlDocument::parse("<hazelcast>".as_bytes(), Some(origin)).unwrap_err();

        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().contains("classpath:broken.xml"), "got: {err}");
    }

    #[test]
    fn written_document_parses_back() {
        let doc: XmlDocument = "<hazelcast><a k=\"v\">text</a></hazelcast>".parse().unwrap();
        let xml = doc.to_xml_string().unwrap();
        let reparsed: XmlDocument = xml.parse().unwrap();

        assert_eq!(reparsed.root(), doc.root());
    }
}
