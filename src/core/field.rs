use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Age,
    Address,
    City,
    Country,
}

/// How a field's value is entered and checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Number,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Age,
        FieldId::Address,
        FieldId::City,
        FieldId::Country,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Age => "age",
            FieldId::Address => "address",
            FieldId::City => "city",
            FieldId::Country => "country",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::Email => FieldKind::Email,
            FieldId::Age => FieldKind::Number,
            _ => FieldKind::Text,
        }
    }

    /// The field name with its first character upper-cased.
    pub fn label(self) -> String {
        capitalize(self.as_str())
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        FieldId::ALL
            .into_iter()
            .find(|id| id.as_str() == trimmed)
            .ok_or_else(|| FormError::UnknownField(trimmed.to_string()))
    }
}

/// Upper-cases the first character only; the rest is left as-is.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
