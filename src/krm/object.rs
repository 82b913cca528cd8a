use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_yaml::{Mapping, Value};

use crate::error::{AppError, AppResult};

/// A single resource document: a YAML mapping with group/version/kind
/// introspection and nested field access.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KubeObject {
    root: Mapping,
}

impl KubeObject {
    pub fn from_value(value: Value) -> AppResult<Self> {
        match value {
            Value::Mapping(root) => Ok(Self { root }),
            other => Err(AppError::InvalidInput(format!(
                "expected a resource mapping, found {}",
                describe(&other)
            ))),
        }
    }

    pub fn from_yaml(raw: &str) -> AppResult<Self> {
        let value: Value = serde_yaml::from_str(raw)?;
        Self::from_value(value)
    }

    pub fn to_value(&self) -> Value {
        Value::Mapping(self.root.clone())
    }

    pub fn api_version(&self) -> &str {
        self.root
            .get("apiVersion")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    pub fn kind(&self) -> &str {
        self.root.get("kind").and_then(Value::as_str).unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.nested(&["metadata", "name"])
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// Splits `apiVersion` into group and version. Core resources (`v1`)
    /// have an empty group.
    pub fn group_version(&self) -> (&str, &str) {
        let api_version = self.api_version();
        match api_version.split_once('/') {
            Some((group, version)) => (group, version),
            None => ("", api_version),
        }
    }

    pub fn is_gvk(&self, group: &str, version: &str, kind: &str) -> bool {
        let (own_group, own_version) = self.group_version();
        own_group == group && own_version == version && self.kind() == kind
    }

    pub fn reference(&self) -> String {
        format!("{}/{}", self.kind(), self.name())
    }

    pub fn nested(&self, fields: &[&str]) -> Option<&Value> {
        let (first, rest) = fields.split_first()?;
        let mut current = self.root.get(*first)?;
        for field in rest {
            current = current.as_mapping()?.get(*field)?;
        }
        Some(current)
    }

    pub fn nested_string(&self, fields: &[&str]) -> AppResult<String> {
        match self.nested(fields) {
            Some(Value::String(value)) => Ok(value.clone()),
            Some(other) => Err(AppError::malformed(
                &self.reference(),
                fields,
                format!("expected a string, found {}", describe(other)),
            )),
            None => Err(AppError::malformed(
                &self.reference(),
                fields,
                "field is absent",
            )),
        }
    }

    /// Reads a flat string map. An absent or null field reads as empty;
    /// scalar numbers and booleans are read in their string form.
    pub fn nested_string_map(&self, fields: &[&str]) -> AppResult<BTreeMap<String, String>> {
        let mapping = match self.nested(fields) {
            None | Some(Value::Null) => return Ok(BTreeMap::new()),
            Some(Value::Mapping(mapping)) => mapping,
            Some(other) => {
                return Err(AppError::malformed(
                    &self.reference(),
                    fields,
                    format!("expected a mapping, found {}", describe(other)),
                ));
            }
        };

        mapping
            .iter()
            .map(|(key, value)| -> AppResult<(String, String)> {
                let key = scalar_string(key).ok_or_else(|| {
                    AppError::malformed(
                        &self.reference(),
                        fields,
                        format!("expected a string key, found {}", describe(key)),
                    )
                })?;
                let value = scalar_string(value).ok_or_else(|| {
                    AppError::malformed(
                        &self.reference(),
                        fields,
                        format!(
                            "expected a string value for {key:?}, found {}",
                            describe(value)
                        ),
                    )
                })?;
                Ok((key, value))
            })
            .collect()
    }

    /// Writes a string leaf, creating intermediate mappings as needed. An
    /// existing leaf is overwritten in place so key order is preserved.
    pub fn set_nested_string(&mut self, fields: &[&str], value: &str) -> AppResult<()> {
        let reference = self.reference();
        let Some((leaf, parents)) = fields.split_last() else {
            return Err(AppError::InvalidInput("empty field path".to_string()));
        };

        let mut current = &mut self.root;
        for (depth, field) in parents.iter().enumerate() {
            let entry = current
                .entry(Value::String((*field).to_string()))
                .or_insert_with(|| Value::Mapping(Mapping::new()));
            if entry.is_null() {
                *entry = Value::Mapping(Mapping::new());
            }
            current = match entry {
                Value::Mapping(mapping) => mapping,
                other => {
                    let found = describe(other);
                    return Err(AppError::malformed(
                        &reference,
                        &fields[..=depth],
                        format!("expected a mapping, found {found}"),
                    ));
                }
            };
        }

        current.insert(
            Value::String((*leaf).to_string()),
            Value::String(value.to_string()),
        );
        Ok(())
    }
}

impl Serialize for KubeObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for KubeObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Mapping::deserialize(deserializer).map(|root| Self { root })
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(value) => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        Value::Bool(value) => Some(value.to_string()),
        _ => None,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
