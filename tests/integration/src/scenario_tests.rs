//! Cross-crate scenarios built in temporary workspaces

use hzcfg_core::{
    ConfigResolver, ConfigType, Error, ErrorKind, Properties, SourceKind, XmlConfigLoader,
    XmlDocument,
};
use hzcfg_fs::{ClassPath, ResourceLocation};
use hzcfg_test_utils::workspace::TestWorkspace;
use hzcfg_test_utils::xml;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn element_names(document: &XmlDocument) -> Vec<String> {
    document
        .child_elements()
        .map(|element| element.name.clone())
        .collect()
}

fn jet(body: &str) -> String {
    xml::document("hazelcast-jet", xml::JET_NAMESPACE, body)
}

#[test]
fn test_override_property_selects_embedded_classpath_resource() {
    let ws = TestWorkspace::new();
    let classpath = ws
        .classpath()
        .with_embedded("profiles/jet-dev.xml", jet("<instance/>").into_bytes());
    let loader = XmlConfigLoader::new(
        ConfigType::Jet,
        ws.resolver_with(classpath),
        Properties::new().with("hazelcast.jet.config", "classpath:profiles/jet-dev.xml"),
    );

    let loaded = loader.load().unwrap();

    assert_eq!(loaded.source.kind, SourceKind::SystemPropertyClasspath);
    assert_eq!(loaded.source.classpath_resource(), Some("profiles/jet-dev.xml"));
    assert_eq!(
        loaded.source.location,
        ResourceLocation::Embedded("profiles/jet-dev.xml".to_string())
    );
    assert_eq!(element_names(&loaded.document), vec!["instance"]);
}

#[test]
fn test_file_prefix_import_from_classpath_document() {
    let ws = TestWorkspace::new();
    ws.write_classpath(
        "hazelcast.xml",
        &xml::server(&xml::import("file:shared/security.xml")),
    );
    ws.write_work("shared/security.xml", &xml::server("<security enabled=\"${secure}\"/>"));

    let loader = XmlConfigLoader::new(
        ConfigType::Server,
        ws.resolver(),
        Properties::new().with("secure", "true"),
    );
    let loaded = loader.load().unwrap();

    assert_eq!(loaded.source.kind, SourceKind::Classpath);
    let security = loaded.document.root().get_child("security").unwrap();
    assert_eq!(security.attributes.get("enabled").map(String::as_str), Some("true"));
}

#[test]
fn test_imported_placeholder_in_resource_attribute() {
    let ws = TestWorkspace::new();
    ws.write_work("hazelcast.xml", &xml::server(&xml::import("${env}/cluster.xml")));
    ws.write_classpath("prod/cluster.xml", &xml::server("<cluster-name>prod</cluster-name>"));

    let loader = XmlConfigLoader::new(
        ConfigType::Server,
        ws.resolver(),
        Properties::new().with("env", "prod"),
    );
    let loaded = loader.load().unwrap();

    assert_eq!(element_names(&loaded.document), vec!["cluster-name"]);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(8)]
fn test_import_chain_depth(#[case] depth: usize) {
    let ws = TestWorkspace::new();
    for level in 0..depth {
        let next = if level + 1 < depth {
            xml::import(&format!("level-{}.xml", level + 1))
        } else {
            String::new()
        };
        ws.write_classpath(
            &format!("level-{level}.xml"),
            &xml::server(&format!("<level-{level}/>{next}")),
        );
    }

    let resolver = ws.resolver();
    let properties = Properties::new();
    let mut document: XmlDocument = xml::server(&xml::import("level-0.xml")).parse().unwrap();
    ConfigResolver::new(ConfigType::Server, &resolver, &properties)
        .process(&mut document)
        .unwrap();

    let expected: Vec<String> = (0..depth).map(|level| format!("level-{level}")).collect();
    assert_eq!(element_names(&document), expected);
}

#[test]
fn test_failed_import_leaves_no_partial_state_between_loads() {
    let ws = TestWorkspace::new();
    ws.write_work("hazelcast.xml", &xml::server(&xml::import("missing.xml")));
    let loader = XmlConfigLoader::new(ConfigType::Server, ws.resolver(), Properties::new());

    let first = loader.load().unwrap_err();
    assert_eq!(first.kind(), ErrorKind::Dependency);

    ws.write_work("missing.xml", &xml::server("<late/>"));
    let loaded = loader.load().unwrap();
    assert_eq!(element_names(&loaded.document), vec!["late"]);
}

#[test]
fn test_directory_root_shadows_embedded_default() {
    let ws = TestWorkspace::new();
    ws.write_classpath("hazelcast-default.xml", &xml::server("<from-directory/>"));
    let classpath = ClassPath::new()
        .with_root(ws.classpath_dir())
        .with_embedded("hazelcast-default.xml", xml::server("<from-binary/>").into_bytes());

    let loader = XmlConfigLoader::new(
        ConfigType::Server,
        ws.resolver_with(classpath),
        Properties::new(),
    );
    let loaded = loader.load().unwrap();

    assert_eq!(loaded.source.kind, SourceKind::PackagedDefault);
    assert_eq!(element_names(&loaded.document), vec!["from-directory"]);
}

#[test]
fn test_client_import_in_server_namespace_is_not_expanded() {
    let ws = TestWorkspace::new();
    ws.write_classpath("other.xml", &xml::client("<other/>"));
    let foreign_import = format!(
        "<import xmlns=\"{}\" resource=\"other.xml\"/>",
        xml::SERVER_NAMESPACE
    );
    ws.write_work("hazelcast-client.xml", &xml::client(&foreign_import));

    let loader = XmlConfigLoader::new(ConfigType::Client, ws.resolver(), Properties::new());
    let loaded = loader.load().unwrap();

    assert_eq!(element_names(&loaded.document), vec!["import"]);
}

#[test]
fn test_misplaced_import_in_imported_document() {
    let ws = TestWorkspace::new();
    ws.write_work("hazelcast.xml", &xml::server(&xml::import("nested.xml")));
    ws.write_classpath(
        "nested.xml",
        &xml::server(&format!("<network>{}</network>", xml::import("other.xml"))),
    );

    let loader = XmlConfigLoader::new(ConfigType::Server, ws.resolver(), Properties::new());
    let error = loader.load().unwrap_err();

    assert!(
        matches!(error, Error::MisplacedImport { ref parent } if parent == "network"),
        "got: {error:?}"
    );
    assert_eq!(error.kind(), ErrorKind::Structural);
}
