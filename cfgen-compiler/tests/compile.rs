//! End-to-end compiler tests over YIN-as-JSON documents.

use std::{
    io,
    sync::{Arc, Mutex},
};

use cfgen_compiler::{
    BlueprintExt, Error, Pipeline, Severity, compile, pipeline::phases::LintPhase, resolve_module,
};
use cfgen_ir::{Field, Key};
use cfgen_schema::{MemoryLoader, SchemaLoader, SchemaNode};
use serde_json::json;

fn loader(documents: &[&str]) -> MemoryLoader {
    let modules = documents
        .iter()
        .flat_map(|doc| cfgen_schema::parse_str(doc).expect("valid schema document"))
        .collect();
    MemoryLoader::new(modules)
}

const DYNAMIC: &str = r#"{
    "module": {
        "@name": "sonic-test",
        "container": {
            "@name": "sonic-test",
            "container": {
                "@name": "TEST_TABLE",
                "list": {
                    "@name": "TEST_TABLE_LIST",
                    "key": { "@value": "ID" },
                    "leaf": [
                        {
                            "@name": "ID",
                            "mandatory": { "@value": "true" },
                            "description": { "text": "the id" }
                        },
                        {
                            "@name": "VALUE",
                            "description": { "text": "a value" }
                        }
                    ]
                }
            }
        }
    }
}"#;

const STATIC: &str = r#"{
    "module": {
        "@name": "sonic-test",
        "container": {
            "@name": "sonic-test",
            "container": {
                "@name": "TEST_TABLE",
                "container": {
                    "@name": "TEST_OBJ",
                    "leaf": [
                        {
                            "@name": "ID",
                            "mandatory": { "@value": "true" },
                            "description": { "text": "the id" }
                        },
                        {
                            "@name": "VALUE",
                            "description": { "text": "a value" }
                        }
                    ]
                }
            }
        }
    }
}"#;

#[test]
fn dynamic_table_end_to_end() {
    let loader = loader(&[DYNAMIC]);
    let compilation = compile(&loader, "sonic-test").expect("compile");

    assert_eq!(
        serde_json::to_value(&compilation.blueprint).unwrap(),
        json!({
            "tables": [{
                "name": "TEST_TABLE",
                "description": "",
                "dynamic-objects": [{
                    "name": "TEST_TABLE_LIST",
                    "description": "",
                    "attrs": [{
                        "name": "VALUE",
                        "description": "a value",
                        "is-leaf-list": false,
                        "is-mandatory": false
                    }],
                    "keys": [{"name": "ID", "description": "the id"}]
                }]
            }]
        })
    );
}

#[test]
fn static_table_end_to_end() {
    let loader = loader(&[STATIC]);
    let compilation = compile(&loader, "sonic-test").expect("compile");

    assert_eq!(
        serde_json::to_value(&compilation.blueprint).unwrap(),
        json!({
            "tables": [{
                "name": "TEST_TABLE",
                "description": "",
                "static-objects": [{
                    "name": "TEST_OBJ",
                    "description": "",
                    "attrs": [
                        {
                            "name": "ID",
                            "description": "the id",
                            "is-leaf-list": false,
                            "is-mandatory": true
                        },
                        {
                            "name": "VALUE",
                            "description": "a value",
                            "is-leaf-list": false,
                            "is-mandatory": false
                        }
                    ]
                }]
            }]
        })
    );
}

#[test]
fn every_table_has_exactly_one_object_kind() {
    let loader = loader(&[DYNAMIC]);
    let mixed = SchemaNode::module("sonic-mixed").with_child(
        SchemaNode::container("sonic-mixed")
            .with_child(SchemaNode::container("A").with_child(SchemaNode::container("obj")))
            .with_child(SchemaNode::container("B").with_child(SchemaNode::list("B_LIST")))
            .with_child(SchemaNode::container("C")),
    );
    let mut modules = loader.modules().to_vec();
    modules.push(mixed);

    for name in ["sonic-test", "sonic-mixed"] {
        let tables = resolve_module(&modules, name).expect("resolve");
        for table in tables {
            let value = serde_json::to_value(&table).unwrap();
            let object = value.as_object().unwrap();
            let kinds = ["static-objects", "dynamic-objects"]
                .iter()
                .filter(|k| object.contains_key(**k))
                .count();
            assert_eq!(kinds, 1, "table {}", table.name);
        }
    }
}

#[test]
fn key_promotion() {
    let module = SchemaNode::module("sonic-keys").with_child(
        SchemaNode::container("sonic-keys").with_child(
            SchemaNode::container("KEYED").with_child(
                SchemaNode::list("KEYED_LIST")
                    .with_key("NAME DESC")
                    .with_child(SchemaNode::leaf("NAME").with_description("Key A"))
                    .with_child(SchemaNode::leaf("COLOR"))
                    .with_child(SchemaNode::leaf("DESC").with_description("Key B")),
            ),
        ),
    );

    let tables = resolve_module(&[module], "sonic-keys").expect("resolve");
    let object = &tables[0].dynamic_objects()[0];

    assert_eq!(
        object.keys,
        [Key::described("NAME", "Key A"), Key::described("DESC", "Key B")]
    );
    assert_eq!(object.attrs, [Field::new("COLOR", "", false, false)]);
}

#[test]
fn choices_flatten_in_declaration_order() {
    let doc = r#"{
        "module": {
            "@name": "sonic-choice",
            "container": {
                "@name": "sonic-choice",
                "container": {
                    "@name": "CHOICE_TABLE",
                    "container": {
                        "@name": "global",
                        "choice": [
                            {
                                "@name": "first",
                                "case": [
                                    { "@name": "a", "leaf": { "@name": "one" } },
                                    { "@name": "b", "leaf": { "@name": "two" } }
                                ]
                            },
                            {
                                "@name": "second",
                                "case": [
                                    { "@name": "c", "leaf": { "@name": "three" } },
                                    { "@name": "d", "leaf": { "@name": "four" } }
                                ]
                            }
                        ]
                    }
                }
            }
        }
    }"#;

    let compilation = compile(&loader(&[doc]), "sonic-choice").expect("compile");
    let attrs = &compilation.blueprint.tables[0].static_objects()[0].attrs;
    let names: Vec<_> = attrs.iter().map(|f| f.name.as_str()).collect();

    assert_eq!(names, ["one", "two", "three", "four"]);
}

#[test]
fn groupings_are_spliced_into_lists() {
    let doc = r#"{
        "module": {
            "@name": "sonic-grouped",
            "prefix": { "@value": "grp" },
            "grouping": {
                "@name": "common",
                "leaf": { "@name": "admin_status", "description": { "text": "Admin state" } }
            },
            "container": {
                "@name": "sonic-grouped",
                "container": {
                    "@name": "IFACE",
                    "list": {
                        "@name": "IFACE_LIST",
                        "key": { "@value": "name" },
                        "leaf": { "@name": "name" },
                        "uses": { "@name": "grp:common" }
                    }
                }
            }
        }
    }"#;

    let compilation = compile(&loader(&[doc]), "sonic-grouped").expect("compile");
    let object = &compilation.blueprint.tables[0].dynamic_objects()[0];

    assert_eq!(object.keys, [Key::described("name", "")]);
    assert_eq!(
        object.attrs,
        [Field::new("admin_status", "Admin state", false, false)]
    );
}

#[test]
fn unmatched_key_is_reported_not_fatal() {
    let module = SchemaNode::module("sonic-odd").with_child(
        SchemaNode::container("sonic-odd").with_child(
            SchemaNode::container("ODD").with_child(
                SchemaNode::list("ODD_LIST")
                    .with_key("missing")
                    .with_child(SchemaNode::leaf("value").with_description("Value")),
            ),
        ),
    );
    let loader = MemoryLoader::new(vec![module]);

    let compilation = compile(&loader, "sonic-odd").expect("compile");
    let object = &compilation.blueprint.tables[0].dynamic_objects()[0];
    assert_eq!(object.keys, [Key::new("missing")]);

    let warnings: Vec<_> = compilation.with_severity(Severity::Warning).collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].location.as_deref(),
        Some("ODD.ODD_LIST.missing")
    );
}

/// Shared buffer the fmt subscriber writes into.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn unmatched_key_and_missing_grouping_are_diagnostics_not_warn_events() {
    let module = SchemaNode::module("sonic-odd").with_child(
        SchemaNode::container("sonic-odd").with_child(
            SchemaNode::container("ODD").with_child(
                SchemaNode::list("ODD_LIST")
                    .with_key("missing")
                    .with_child(SchemaNode::leaf("value").with_description("Value"))
                    .with_child(SchemaNode::uses("nowhere")),
            ),
        ),
    );
    let loader = MemoryLoader::new(vec![module]);

    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let compilation = tracing::subscriber::with_default(subscriber, || {
        compile(&loader, "sonic-odd").expect("compile")
    });

    assert_eq!(compilation.with_severity(Severity::Warning).count(), 2);
    assert!(log.0.lock().unwrap().is_empty());
}

#[test]
fn keyless_list_is_an_error_diagnostic() {
    let module = SchemaNode::module("sonic-nokey").with_child(
        SchemaNode::container("sonic-nokey").with_child(
            SchemaNode::container("NOKEY")
                .with_child(SchemaNode::list("NOKEY_LIST").with_child(SchemaNode::leaf("value"))),
        ),
    );
    let loader = MemoryLoader::new(vec![module]);

    let compilation = compile(&loader, "sonic-nokey").expect("compile");
    let errors: Vec<_> = compilation.with_severity(Severity::Error).collect();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].location.as_deref(), Some("NOKEY.NOKEY_LIST"));
}

#[test]
fn structural_errors() {
    let loader = MemoryLoader::new(vec![
        SchemaNode::module("no-top"),
        SchemaNode::module("no-tables").with_child(SchemaNode::container("no-tables")),
    ]);

    assert!(matches!(
        compile(&loader, "absent"),
        Err(Error::ModuleNotFound { .. })
    ));
    assert!(matches!(
        compile(&loader, "no-top"),
        Err(Error::MissingTopLevelContainer { .. })
    ));
    assert!(matches!(
        compile(&loader, "no-tables"),
        Err(Error::MissingTableContainer { .. })
    ));
}

#[test]
fn lints_can_be_disabled() {
    let module = SchemaNode::module("sonic-odd").with_child(
        SchemaNode::container("sonic-odd").with_child(
            SchemaNode::container("ODD").with_child(
                SchemaNode::list("ODD_LIST")
                    .with_key("missing")
                    .with_child(SchemaNode::leaf("value").with_description("Value")),
            ),
        ),
    );
    let loader = MemoryLoader::new(vec![module]);

    let with_lints = compile(&loader, "sonic-odd").expect("compile");
    let without_lints = Pipeline::new()
        .lints(LintPhase::empty())
        .run(loader.modules(), "sonic-odd")
        .expect("pipeline");

    assert!(with_lints.diagnostics.iter().any(|d| d.phase == "lint"));
    assert!(without_lints.blueprint.is_some());
    assert!(without_lints.diagnostics.is_empty());
}

#[test]
fn rendered_tree() {
    let compilation = compile(&loader(&[DYNAMIC]), "sonic-test").expect("compile");
    insta::assert_snapshot!(compilation.blueprint.display().render(), @r"
    TEST_TABLE
      TEST_TABLE_LIST [ID]
        VALUE
    ");
}
