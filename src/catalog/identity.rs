use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Grouping of operations by the value shape they target.
///
/// The set is closed: every operation in the catalog belongs to exactly one
/// of these namespaces, and selector parsing rejects anything else rather
/// than carrying unknown names forward.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Category {
    Sequence,
    Mapping,
    Text,
}

impl Category {
    /// Declared catalog order; bare-category and niladic expansion follow it.
    pub const ALL: [Category; 3] = [Category::Sequence, Category::Mapping, Category::Text];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sequence => "sequence",
            Category::Mapping => "mapping",
            Category::Text => "text",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sequence" => Some(Category::Sequence),
            "mapping" => Some(Category::Mapping),
            "text" => Some(Category::Text),
            _ => None,
        }
    }

    /// Maps a value's shape to the namespace its dispatch goes through.
    ///
    /// Scalars other than strings have no namespace; callers surface that as
    /// an `UnsupportedShape` error.
    pub fn of_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(_) => Some(Category::Sequence),
            Value::Object(_) => Some(Category::Mapping),
            Value::String(_) => Some(Category::Text),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).ok_or_else(|| D::Error::custom(format!("unknown category '{value}'")))
    }
}

/// Selector-grammar check shared by parsing and catalog validation.
pub(crate) fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
