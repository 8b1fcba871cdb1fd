use std::{fmt, marker::PhantomData};

use itertools::Itertools;

use super::{
    error::{Error, Result},
    field::FieldType,
    row::Row,
    shape::RowShape,
    value::Value,
};

/// A row of any shape, one value slot per field.
pub struct Record<S: RowShape> {
    values: Vec<Value>,
    shape: PhantomData<fn() -> S>,
}

impl<S: RowShape> Record<S> {
    pub fn new() -> Self {
        Record {
            values: vec![Value::Null; S::len()],
            shape: PhantomData,
        }
    }

    /// Builds a record from values in field order, checking count and types.
    pub fn from_values(values: Vec<Value>) -> Result<Self> {
        if values.len() != S::len() {
            return Err(Error::Arity {
                shape: S::NAME.into(),
                expected: S::len(),
                found: values.len(),
            });
        }
        for (field, value) in S::FIELDS.iter().zip(&values) {
            check_field(field.name, field.ty, value)?;
        }
        Ok(Record {
            values,
            shape: PhantomData,
        })
    }

    pub fn value(&self, name: &str) -> Result<&Value> {
        let index = Self::index(name)?;
        Ok(&self.values[index])
    }

    pub fn try_set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let index = Self::index(name)?;
        let value = value.into();
        let field = &S::FIELDS[index];
        check_field(field.name, field.ty, &value)?;
        self.values[index] = value;
        Ok(())
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    fn index(name: &str) -> Result<usize> {
        S::index_of(name).ok_or_else(|| Error::UnknownField {
            field: name.into(),
            shape: S::NAME.into(),
        })
    }
}

pub(crate) fn check_field(name: &str, ty: FieldType, value: &Value) -> Result<()> {
    match value.field_type() {
        Some(found) if found != ty => Err(Error::TypeMismatch {
            field: name.into(),
            expected: ty,
            found,
        }),
        _ => Ok(()),
    }
}

impl<S: RowShape> Row for Record<S> {
    type Shape = S;

    fn get(&self, index: usize) -> Value {
        self.values.get(index).cloned().unwrap_or_default()
    }

    fn set(&mut self, index: usize, value: Value) {
        let (Some(field), Some(slot)) = (S::FIELDS.get(index), self.values.get_mut(index)) else {
            return;
        };
        *slot = if value.conforms_to(field.ty) {
            value
        } else {
            Value::Null
        };
    }
}

impl<S: RowShape> Default for Record<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RowShape> Clone for Record<S> {
    fn clone(&self) -> Self {
        Record {
            values: self.values.clone(),
            shape: PhantomData,
        }
    }
}

impl<S: RowShape> PartialEq for Record<S> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<S: RowShape> fmt::Debug for Record<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Record")
            .field("shape", &S::NAME)
            .field("values", &self.values)
            .finish()
    }
}

impl<S: RowShape> fmt::Display for Record<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fields = S::FIELDS
            .iter()
            .zip(&self.values)
            .map(|(field, value)| format!("{}: {value}", field.name))
            .join(", ");
        write!(f, "{}{{{fields}}}", S::NAME)
    }
}
