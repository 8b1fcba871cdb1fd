use std::fmt;

use super::field::FieldType;

/// Identity of a row in another table, the value side of a reference column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub i64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Value {
    #[default]
    Null,
    Int(i64),
    Text(String),
    Ref(RowId),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The field type this value belongs to, `None` for null.
    pub fn field_type(&self) -> Option<FieldType> {
        match self {
            Value::Null => None,
            Value::Int(_) => Some(FieldType::Integer),
            Value::Text(_) => Some(FieldType::Text),
            Value::Ref(_) => Some(FieldType::Reference),
        }
    }

    /// Null conforms to every field type.
    pub fn conforms_to(&self, ty: FieldType) -> bool {
        self.field_type().map_or(true, |t| t == ty)
    }

    pub fn from_field<T: FieldValue>(value: Option<T>) -> Value {
        value.map_or(Value::Null, FieldValue::into_value)
    }

    pub fn into_field<T: FieldValue>(self) -> Option<T> {
        T::from_value(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "{{null}}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "{v}"),
            Value::Ref(v) => write!(f, "{v}"),
        }
    }
}

/// A Rust type that can be stored in a typed row field.
///
/// Integer fields are always `i64`, the width of `Value::Int`, so every
/// integer a row can hold converts back without loss.
pub trait FieldValue: Sized {
    const TYPE: FieldType;

    fn into_value(self) -> Value;

    /// Returns `None` for null and for values of another field type.
    fn from_value(value: Value) -> Option<Self>;
}

impl FieldValue for i64 {
    const TYPE: FieldType = FieldType::Integer;

    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldValue for String {
    const TYPE: FieldType = FieldType::Text;

    fn into_value(self) -> Value {
        Value::Text(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldValue for RowId {
    const TYPE: FieldType = FieldType::Reference;

    fn into_value(self) -> Value {
        Value::Ref(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Ref(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<RowId> for Value {
    fn from(value: RowId) -> Self {
        Value::Ref(value)
    }
}
