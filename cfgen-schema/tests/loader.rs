//! Loader tests over real files in temporary directories.

use std::fs;

use cfgen_schema::{Error, JsonLoader, NodeKind, SchemaLoader, SchemaNode, as_sequence};
use tempfile::TempDir;

const VLAN: &str = r#"{
    "module": {
        "@name": "sonic-vlan",
        "prefix": { "@value": "vlan" },
        "container": {
            "@name": "sonic-vlan",
            "container": {
                "@name": "VLAN",
                "list": {
                    "@name": "VLAN_LIST",
                    "key": { "@value": "name" },
                    "leaf": { "@name": "name" }
                }
            }
        }
    }
}"#;

const PORT: &str = r#"{ "module": { "@name": "sonic-port" } }"#;

fn write(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).expect("write schema file");
}

#[test]
fn loads_every_json_file_in_name_order() {
    let dir = TempDir::new().unwrap();
    write(&dir, "b-vlan.json", VLAN);
    write(&dir, "a-port.json", PORT);
    write(&dir, "notes.txt", "not a schema");

    let loader = JsonLoader::from_dirs(&[dir.path()]).expect("load");

    assert_eq!(loader.module_names(), ["sonic-port", "sonic-vlan"]);
    assert_eq!(loader.sources().len(), 2);
}

#[test]
fn keeps_single_children_single() {
    let dir = TempDir::new().unwrap();
    write(&dir, "vlan.json", VLAN);

    let loader = JsonLoader::from_dirs(&[dir.path()]).expect("load");
    let list = loader.modules()[0]
        .first(&NodeKind::Container)
        .and_then(|top| top.first(&NodeKind::Container))
        .and_then(|table| table.first(&NodeKind::List))
        .expect("list");

    let leafs = as_sequence(list.child(&NodeKind::Leaf));
    assert_eq!(leafs.len(), 1);
    assert_eq!(leafs[0].name(), Some("name"));
}

#[test]
fn explicit_files() {
    let dir = TempDir::new().unwrap();
    write(&dir, "port.json", PORT);

    let loader = JsonLoader::from_files(&[dir.path().join("port.json")]).expect("load");
    assert_eq!(loader.modules().len(), 1);
    assert_eq!(loader.modules()[0].name(), Some("sonic-port"));
}

#[test]
fn invalid_document_names_the_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "broken.json", r#"{"container": {}}"#);

    let err = JsonLoader::from_dirs(&[dir.path()]).unwrap_err();
    match err {
        Error::InvalidDocument { file, .. } => assert!(file.ends_with("broken.json")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parse_file_matches_loader() {
    let dir = TempDir::new().unwrap();
    write(&dir, "vlan.json", VLAN);

    let parsed = cfgen_schema::parse_file(dir.path().join("vlan.json")).expect("parse");
    let loader = JsonLoader::from_dirs(&[dir.path()]).expect("load");
    assert_eq!(parsed.as_slice(), loader.modules());
    assert_eq!(
        parsed[0].first(&NodeKind::Prefix).and_then(SchemaNode::value),
        Some("vlan")
    );
}
