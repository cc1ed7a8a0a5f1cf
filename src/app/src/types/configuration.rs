use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_valid::Validate;

use super::constraint::{parse_integer, Constraint, ConstraintData, ConstraintKind};

/// A configuration value as the core sees it.
///
/// The backend speaks plain JSON scalars; the bridge to the shell needs a
/// tagged representation, so conversion happens in [`ConfigValue::from_json`]
/// and [`ConfigValue::to_json`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConfigValue {
    Boolean(bool),
    Number(i64),
    Text(String),
}

impl ConfigValue {
    /// Convert a JSON scalar. `null`, floats, arrays and objects yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Boolean(*b)),
            Value::Number(n) => n.as_i64().map(Self::Number),
            Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Boolean(b) => Value::Bool(*b),
            Self::Number(n) => Value::from(*n),
            Self::Text(s) => Value::String(s.clone()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Shape a draft for the update service: number configs take text drafts
    /// as integers. Anything else is sent unchanged.
    pub fn into_typed(self, value_type: ValueType) -> Self {
        if value_type == ValueType::Number && matches!(self, Self::Text(_)) {
            if let Some(n) = parse_integer(&self) {
                return Self::Number(n);
            }
        }
        self
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

/// Discriminator the shell uses to pick an input widget
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValueType {
    #[default]
    String,
    Number,
    Boolean,
    EnumStrings,
    Uri,
    Unknown,
}

impl ValueType {
    fn from_wire(value_type: &str) -> Self {
        match value_type {
            "STRING" => Self::String,
            "NUMBER" => Self::Number,
            "BOOLEAN" => Self::Boolean,
            "ENUM_STRINGS" => Self::EnumStrings,
            "URI" => Self::Uri,
            _ => Self::Unknown,
        }
    }
}

/// One editable configuration entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigurationItem {
    pub key: String,
    pub key_human_readable: Option<String>,
    pub value: Option<ConfigValue>,
    pub default_value: Option<ConfigValue>,
    pub value_type: ValueType,
    pub constraints: Vec<Constraint>,
    pub requires_restart: bool,
    pub help_tag: Option<String>,
}

/// Constraint as delivered by the REST API
#[derive(Debug, Clone, Deserialize)]
pub struct WireConstraint {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Configuration entry as delivered by the REST API
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WireConfigurationItem {
    #[validate(min_length = 1)]
    pub key: String,
    #[serde(default)]
    pub key_human_readable: Option<String>,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub default_value: Value,
    #[serde(default)]
    pub value_type: String,
    #[serde(default)]
    pub constraints: Option<Vec<WireConstraint>>,
    #[serde(default)]
    pub requires_restart: bool,
    #[serde(default)]
    pub help_tag: Option<String>,
}

impl From<&WireConstraint> for Constraint {
    fn from(wire: &WireConstraint) -> Self {
        let data = wire.data.as_ref();
        let bound = |name: &str| data.and_then(|d| d.get(name)).and_then(Value::as_i64);
        let strings = data
            .and_then(|d| d.get("strings"))
            .and_then(Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(|s| s.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            kind: ConstraintKind::from_wire(&wire.kind),
            data: ConstraintData {
                min: bound("min"),
                max: bound("max"),
                strings,
            },
        }
    }
}

impl From<WireConfigurationItem> for ConfigurationItem {
    fn from(wire: WireConfigurationItem) -> Self {
        Self {
            value: ConfigValue::from_json(&wire.value),
            default_value: ConfigValue::from_json(&wire.default_value),
            value_type: ValueType::from_wire(&wire.value_type),
            constraints: wire
                .constraints
                .iter()
                .flatten()
                .map(Constraint::from)
                .collect(),
            key: wire.key,
            key_human_readable: wire.key_human_readable,
            requires_restart: wire.requires_restart,
            help_tag: wire.help_tag,
        }
    }
}

/// Decode the configuration listing, dropping entries that fail validation.
pub fn parse_configuration_items(items: Vec<WireConfigurationItem>) -> Vec<ConfigurationItem> {
    items
        .into_iter()
        .filter_map(|item| match item.validate() {
            Ok(()) => Some(ConfigurationItem::from(item)),
            Err(e) => {
                log::warn!("dropping invalid configuration item: {e}");
                None
            }
        })
        .collect()
}
