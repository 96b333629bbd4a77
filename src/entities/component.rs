use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

use super::file::File;
use crate::collections::{Item, Tagged};
use crate::errors::{Error, Result};

/// Working directory assumed when raw input does not name one.
pub const DEFAULT_CWD: &str = "/";

/// A named entity backed by a source file and a free-form config map.
///
/// `config["name"]` is always a string: when the config does not provide one
/// the source file stem is used.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    src: File,
    config: Map<String, Value>,
}

/// Anything [`Component::from_input`] knows how to normalize.
#[derive(Debug, Clone)]
pub enum ComponentInput {
    Component(Component),
    Raw(Value),
}

impl Component {
    pub fn new(src: File, mut config: Map<String, Value>) -> Self {
        if !matches!(config.get("name"), Some(Value::String(_))) {
            config.insert("name".to_string(), Value::String(src.stem().to_string()));
        }
        Self { src, config }
    }

    /// Validate and normalize `input` into a component.
    ///
    /// A [`Component`] passes through untouched. A raw value must be an
    /// object with either:
    /// - `src`: a path string or a `{ "path", "cwd"? }` object, or
    /// - a top-level `path` (plus optional `cwd`) together with a `name`.
    ///
    /// An optional `config` must be an object; a top-level `name` string is
    /// merged into it. Anything else fails with `properties-invalid`.
    pub fn from_input(input: impl Into<ComponentInput>) -> Result<Self> {
        match input.into() {
            ComponentInput::Component(component) => Ok(component),
            ComponentInput::Raw(raw) => parse_raw(raw),
        }
    }

    pub fn name(&self) -> &str {
        self.config
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn src(&self) -> &File {
        &self.src
    }

    pub fn config(&self) -> &Map<String, Value> {
        &self.config
    }

    /// Look up a config value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.config.get(key)
    }

    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name(),
            "src": self.src.to_json(),
            "config": self.config,
        })
    }
}

impl Item for Component {
    fn property(&self, key: &str) -> Option<Value> {
        match key {
            "name" => Some(Value::String(self.name().to_string())),
            "path" => Some(Value::String(self.src.path().to_string())),
            "src" => Some(self.src.to_json()),
            _ => self.config.get(key).cloned(),
        }
    }
}

impl Tagged for Component {}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl TryFrom<Value> for Component {
    type Error = Error;

    fn try_from(raw: Value) -> Result<Self> {
        parse_raw(raw)
    }
}

impl From<Component> for ComponentInput {
    fn from(component: Component) -> Self {
        ComponentInput::Component(component)
    }
}

impl From<Value> for ComponentInput {
    fn from(raw: Value) -> Self {
        ComponentInput::Raw(raw)
    }
}

impl From<&str> for ComponentInput {
    fn from(raw: &str) -> Self {
        ComponentInput::Raw(Value::String(raw.to_string()))
    }
}

fn parse_raw(raw: Value) -> Result<Component> {
    let mut props = match raw {
        Value::Object(props) => props,
        other => {
            return Err(Error::properties_invalid(format!(
                "Component input must be an object, got {}",
                describe(&other)
            )));
        }
    };

    let mut config = match props.remove("config") {
        None | Some(Value::Null) => Map::new(),
        Some(Value::Object(config)) => config,
        Some(other) => {
            return Err(Error::properties_invalid(format!(
                "Component 'config' must be an object, got {}",
                describe(&other)
            )));
        }
    };

    match props.remove("name") {
        None => {}
        Some(Value::String(name)) => {
            config.insert("name".to_string(), Value::String(name));
        }
        Some(other) => {
            return Err(Error::properties_invalid(format!(
                "Component 'name' must be a string, got {}",
                describe(&other)
            )));
        }
    }

    if let Some(name) = config.get("name") {
        if !name.is_string() {
            return Err(Error::properties_invalid(format!(
                "Component 'config.name' must be a string, got {}",
                describe(name)
            )));
        }
    }

    let src = match props.remove("src") {
        Some(src) => parse_file(src)?,
        None => {
            let has_name = config.contains_key("name");
            match props.remove("path") {
                Some(Value::String(path)) if has_name && !path.is_empty() => {
                    File::new(path, cwd_of(&props)?)
                }
                _ => {
                    return Err(Error::properties_invalid(
                        "Component requires a 'src' file, or a 'path' together with a 'name'",
                    ));
                }
            }
        }
    };

    let component = Component::new(src, config);
    if component.name().is_empty() {
        return Err(Error::properties_invalid(format!(
            "Component name is empty and cannot be derived from '{}'",
            component.src().path()
        )));
    }
    Ok(component)
}

fn parse_file(src: Value) -> Result<File> {
    match src {
        Value::String(path) if !path.is_empty() => Ok(File::new(path, DEFAULT_CWD)),
        Value::Object(props) => match props.get("path") {
            Some(Value::String(path)) if !path.is_empty() => Ok(File::new(path, cwd_of(&props)?)),
            _ => Err(Error::properties_invalid(
                "Component 'src.path' must be a non-empty string",
            )),
        },
        other => Err(Error::properties_invalid(format!(
            "Component 'src' must be a path or a file object, got {}",
            describe(&other)
        ))),
    }
}

fn cwd_of(props: &Map<String, Value>) -> Result<&str> {
    match props.get("cwd") {
        None | Some(Value::Null) => Ok(DEFAULT_CWD),
        Some(Value::String(cwd)) => Ok(cwd),
        Some(other) => Err(Error::properties_invalid(format!(
            "File 'cwd' must be a string, got {}",
            describe(other)
        ))),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
