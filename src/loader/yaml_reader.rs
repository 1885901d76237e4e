//! YAML data files.

use crate::error::{Error, Result};
use crate::loader::DataSet;
use serde::Deserialize;
use serde_json::{Map, Number, Value as JsonValue};
use serde_yaml::Value as YamlValue;
use std::path::Path;

/// Reads a YAML file.
///
/// # Arguments
/// * `path` - YAML file to read
/// * `load_all` - Return every document as a list instead of the first document only
///
/// # Returns
/// * `Result<DataSet>` - `DataSet::Document` holding the parsed structure
pub fn read_yaml_file<P: AsRef<Path>>(path: P, load_all: bool) -> Result<DataSet> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|source| Error::ReadError { file: path.display().to_string(), source })?;
    parse_yaml(&content, load_all, &path.display().to_string())
}

/// Parses YAML content. `origin` names the content in error messages.
///
/// Merge keys are expanded. Plain scalars follow YAML 1.2, so `yes`/`no`/`on`/`off`
/// stay strings.
///
/// An empty input yields `null`, or an empty list when `load_all` is set.
pub fn parse_yaml(content: &str, load_all: bool, origin: &str) -> Result<DataSet> {
    let yaml_error = |source| Error::YamlError { file: origin.to_string(), source };

    let mut documents = Vec::new();
    for document in serde_yaml::Deserializer::from_str(content) {
        let mut value = YamlValue::deserialize(document).map_err(yaml_error)?;
        // `<<: *anchor` keys are folded into the enclosing mapping
        value.apply_merge().map_err(yaml_error)?;
        documents.push(yaml_to_json(value));
        if !load_all {
            break;
        }
    }

    // an input with nothing but whitespace or comments still yields a single null document
    if documents.len() == 1 && documents[0].is_null() && is_blank(content) {
        documents.clear();
    }

    let value = if load_all {
        JsonValue::Array(documents)
    } else {
        documents.into_iter().next().unwrap_or(JsonValue::Null)
    };
    Ok(DataSet::Document(value))
}

fn is_blank(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}

/// Converts a YAML value into a JSON value.
///
/// Mapping keys that are not strings are rendered as text (`1` becomes `"1"`,
/// `true` becomes `"true"`, `~` becomes `"null"`). Tags are dropped and
/// non-finite floats become `null`.
pub fn yaml_to_json(value: YamlValue) -> JsonValue {
    match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                JsonValue::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                JsonValue::Number(u.into())
            } else {
                n.as_f64().and_then(Number::from_f64).map_or(JsonValue::Null, JsonValue::Number)
            }
        }
        YamlValue::String(s) => JsonValue::String(s),
        YamlValue::Sequence(items) => {
            JsonValue::Array(items.into_iter().map(yaml_to_json).collect())
        }
        YamlValue::Mapping(mapping) => {
            let mut object = Map::new();
            for (key, value) in mapping {
                object.insert(key_to_string(key), yaml_to_json(value));
            }
            JsonValue::Object(object)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn key_to_string(key: YamlValue) -> String {
    match yaml_to_json(key) {
        JsonValue::String(s) => s,
        other => other.to_string(),
    }
}
