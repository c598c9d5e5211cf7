//! End-to-end loads of the layered configurations under test-fixtures/configs
//!
//! Fixtures are used in place: the fixture directory is the working directory
//! and its `conf/` directory is the classpath root.

use hzcfg_core::{ConfigType, Error, Properties, Settings, SourceKind, XmlConfigLoader};
use hzcfg_fs::{ClassPath, NormalizedPath, ResourceResolver};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use xmltree::Element;

/// Path to a fixture configuration (relative to the workspace root).
fn fixture_dir(name: &str) -> NormalizedPath {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // tests/integration -> ../../test-fixtures
    NormalizedPath::new(manifest_dir.join("../../test-fixtures/configs").join(name))
}

fn fixture_loader(name: &str, config_type: ConfigType, properties: Properties) -> XmlConfigLoader {
    let dir = fixture_dir(name);
    let classpath = ClassPath::new().with_root(dir.join("conf"));
    XmlConfigLoader::new(config_type, ResourceResolver::new(dir, classpath), properties)
}

fn child_text<'a>(element: &'a Element, path: &[&str]) -> Option<String> {
    let mut current = element;
    for name in path {
        current = current.get_child(*name)?;
    }
    current.get_text().map(|text| text.into_owned())
}

// ==========================================================================
// Layered server configuration
// ==========================================================================

fn layered_properties() -> Properties {
    Properties::new()
        .with("cluster.name", "prod")
        .with("logging.type", "slf4j")
        .with("port", "5701")
        .with("member", "10.0.0.2")
        .with("portable.version", "2")
        .with("backup.count", "1")
}

#[test]
fn test_layered_server_flattens_imports_in_document_order() {
    let loader = fixture_loader("layered-server", ConfigType::Server, layered_properties());
    let loaded = loader.load().unwrap();

    let names: Vec<&str> = loaded
        .document
        .child_elements()
        .map(|element| element.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["cluster-name", "network", "serialization", "map", "map", "properties"]
    );

    let maps: Vec<&str> = loaded
        .document
        .child_elements()
        .filter(|element| element.name == "map")
        .filter_map(|element| element.attributes.get("name").map(String::as_str))
        .collect();
    assert_eq!(maps, vec!["default", "orders"]);
}

#[test]
fn test_layered_server_substitutes_across_documents() {
    let loader = fixture_loader("layered-server", ConfigType::Server, layered_properties());
    let root = loader.load().unwrap().document.into_root();

    assert_eq!(child_text(&root, &["cluster-name"]).as_deref(), Some("prod"));
    assert_eq!(child_text(&root, &["network", "port"]).as_deref(), Some("5701"));
    assert_eq!(
        child_text(&root, &["network", "join", "tcp-ip", "member"]).as_deref(),
        Some("10.0.0.2")
    );
    assert_eq!(
        child_text(&root, &["serialization", "portable-version"]).as_deref(),
        Some("2")
    );
    assert_eq!(
        child_text(&root, &["properties", "property"]).as_deref(),
        Some("slf4j")
    );
}

#[test]
fn test_layered_server_keeps_unresolved_placeholders() {
    let loader = fixture_loader("layered-server", ConfigType::Server, layered_properties());
    let loaded = loader.load().unwrap();
    let xml = loaded.document.to_xml_string().unwrap();

    assert!(xml.contains("${orders.ttl}"), "got: {xml}");
    assert!(!xml.contains("import"), "imports must be expanded: {xml}");
}

#[test]
fn test_layered_server_is_found_in_working_directory() {
    let loader = fixture_loader("layered-server", ConfigType::Server, Properties::new());
    let loaded = loader.load().unwrap();

    assert_eq!(loaded.source.kind, SourceKind::WorkingDirectory);
    let file = loaded.source.config_file().unwrap();
    assert_eq!(file.file_name(), Some("hazelcast.xml"));
    assert_eq!(loaded.source.classpath_resource(), None);
}

#[test]
fn test_loader_is_reusable() {
    let loader = fixture_loader("layered-server", ConfigType::Server, layered_properties());
    let first = loader.load().unwrap().document.to_xml_string().unwrap();
    let second = loader.load().unwrap().document.to_xml_string().unwrap();
    assert_eq!(first, second);
}

// ==========================================================================
// Client configuration driven by a settings file
// ==========================================================================

#[test]
fn test_client_settings_fixture() {
    let dir = fixture_dir("client");
    let settings = Settings::load(&dir.join("hzcfg.toml")).unwrap();
    let config_type = settings.config_type.unwrap_or_default();
    assert_eq!(config_type, ConfigType::Client);

    let resources = ResourceResolver::new(dir.clone(), settings.classpath(&dir));
    let loader = XmlConfigLoader::new(config_type, resources, settings.properties.clone());
    let loaded = loader.load().unwrap();

    assert_eq!(loaded.source.kind, SourceKind::Classpath);
    assert_eq!(loaded.source.classpath_resource(), Some("hazelcast-client.xml"));

    let root = loaded.document.root();
    assert_eq!(root.name, "hazelcast-client");
    assert_eq!(child_text(root, &["cluster-name"]).as_deref(), Some("staging"));
    assert_eq!(
        child_text(root, &["network", "cluster-members", "address"]).as_deref(),
        Some("10.0.0.1")
    );
}

#[test]
fn test_client_fixture_is_not_a_server_configuration() {
    // The server search finds nothing here and there is no packaged default.
    let loader = fixture_loader("client", ConfigType::Server, Properties::new());
    let error = loader.load().unwrap_err();
    assert!(
        matches!(error, Error::DefaultConfigMissing { .. }),
        "got: {error:?}"
    );
}

// ==========================================================================
// Cycles
// ==========================================================================

#[test]
fn test_import_back_to_root_is_a_cycle() {
    let loader = fixture_loader("cyclic", ConfigType::Server, Properties::new());
    let error = loader.load().unwrap_err();

    match error {
        Error::CyclicImport { location } => {
            assert!(location.ends_with("hazelcast.xml"), "got: {location}")
        }
        other => panic!("expected a cycle, got: {other:?}"),
    }
}
