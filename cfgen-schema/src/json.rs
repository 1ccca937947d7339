//! YIN-as-JSON documents.
//!
//! A document is a JSON object with a `module` member. Inside a statement:
//!
//! - `@`-prefixed members are statement attributes (`"@name": "PORT"`),
//! - other scalar members are node content (`"text": "Port MTU"`),
//! - object members are a single child statement tagged by the member name,
//! - array members are a run of same-tag child statements.

use serde_json::{Map, Value};

use crate::{Error, NodeKind, Result, SchemaNode};

/// Parse every module in a JSON document.
pub fn parse_document(content: &str, filename: &str) -> Result<Vec<SchemaNode>> {
    let root: Value = serde_json::from_str(content).map_err(|source| Error::Json {
        file: filename.to_string(),
        source,
    })?;

    let Value::Object(root) = root else {
        return Err(Error::invalid_document(
            filename,
            "document root must be an object",
        ));
    };

    let Some(modules) = root.get(NodeKind::Module.keyword()) else {
        return Err(Error::invalid_document(
            filename,
            "document has no 'module' member",
        ));
    };

    let modules = match modules {
        Value::Array(items) => items.iter().collect(),
        single => vec![single],
    };

    modules
        .into_iter()
        .map(|value| match value {
            Value::Object(object) => convert(NodeKind::Module, object, filename),
            _ => Err(Error::invalid_document(
                filename,
                "'module' must be an object",
            )),
        })
        .collect()
}

fn convert(kind: NodeKind, object: &Map<String, Value>, filename: &str) -> Result<SchemaNode> {
    let mut node = SchemaNode::new(kind);

    for (key, value) in object {
        let key = key.strip_prefix('@').unwrap_or(key);
        match value {
            Value::Null => {}
            Value::Object(child) => {
                node.push_child(convert(NodeKind::from_keyword(key), child, filename)?);
            }
            Value::Array(items) => {
                let kind = NodeKind::from_keyword(key);
                let children = items
                    .iter()
                    .map(|item| match item {
                        Value::Object(child) => convert(kind.clone(), child, filename),
                        _ => Err(Error::invalid_document(
                            filename,
                            format!("'{}' must only contain statements", key),
                        )),
                    })
                    .collect::<Result<Vec<_>>>()?;
                node = node.with_sequence(kind, children);
            }
            Value::String(text) => node = node.with_attr(key, text.as_str()),
            scalar => node = node.with_attr(key, scalar.to_string()),
        }
    }

    Ok(node)
}
