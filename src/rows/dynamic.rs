use std::{fmt, rc::Rc};

use itertools::Itertools;
use tracing::trace;

use super::{
    error::{Error, Result},
    layout::Layout,
    record::check_field,
    row::Row,
    shape::RowShape,
    value::Value,
};

/// A row whose shape is only known at runtime.
///
/// Copies between dynamic records match fields by name and are checked when
/// they run. A copy that fails the check writes nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct DynRecord {
    layout: Rc<Layout>,
    values: Vec<Value>,
}

impl DynRecord {
    pub fn new(layout: Rc<Layout>) -> Self {
        let values = vec![Value::Null; layout.len()];
        DynRecord { layout, values }
    }

    pub fn from_values(layout: Rc<Layout>, values: Vec<Value>) -> Result<Self> {
        if values.len() != layout.len() {
            return Err(Error::Arity {
                shape: layout.name.to_string(),
                expected: layout.len(),
                found: values.len(),
            });
        }
        for (column, value) in layout.columns.iter().zip(&values) {
            check_field(&column.name, column.ty, value)?;
        }
        Ok(DynRecord { layout, values })
    }

    pub fn layout(&self) -> &Rc<Layout> {
        &self.layout
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Result<&Value> {
        let index = self.index(name)?;
        Ok(&self.values[index])
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let index = self.index(name)?;
        let value = value.into();
        let column = &self.layout.columns[index];
        check_field(&column.name, column.ty, &value)?;
        self.values[index] = value;
        Ok(())
    }

    /// Loads every field of `source` into the same-named field here.
    pub fn copy_from(&mut self, source: &DynRecord) -> Result<()> {
        source.layout.check_assignable_to(&self.layout)?;
        trace!(source = %source.layout.name, target = %self.layout.name, "copying dynamic row");
        for (column, value) in source.layout.columns.iter().zip(&source.values) {
            self.write(&column.name, value.clone());
        }
        Ok(())
    }

    pub fn copy_into<'t>(&self, target: &'t mut DynRecord) -> Result<&'t mut DynRecord> {
        target.copy_from(self)?;
        Ok(target)
    }

    /// Loads a statically shaped row.
    pub fn copy_from_row<R: Row + ?Sized>(&mut self, source: &R) -> Result<()> {
        Layout::of::<R::Shape>()?.check_assignable_to(&self.layout)?;
        trace!(source = R::Shape::NAME, target = %self.layout.name, "copying row into dynamic row");
        for (index, field) in R::Shape::FIELDS.iter().enumerate() {
            self.write(field.name, source.get(index));
        }
        Ok(())
    }

    /// Copies into a statically shaped row, which must have every field here.
    pub fn copy_into_row<'t, R: Row + ?Sized>(&self, target: &'t mut R) -> Result<&'t mut R> {
        self.layout
            .check_assignable_to(&Layout::of::<R::Shape>()?)?;
        trace!(source = %self.layout.name, target = R::Shape::NAME, "copying dynamic row into row");
        for (column, value) in self.layout.columns.iter().zip(&self.values) {
            if let Some(index) = R::Shape::index_of(&column.name) {
                target.set(index, value.clone());
            }
        }
        Ok(target)
    }

    fn write(&mut self, name: &str, value: Value) {
        if let Some(index) = self.layout.index_of(name) {
            self.values[index] = value;
        }
    }

    fn index(&self, name: &str) -> Result<usize> {
        self.layout.index_of(name).ok_or_else(|| Error::UnknownField {
            field: name.into(),
            shape: self.layout.name.to_string(),
        })
    }
}

impl fmt::Display for DynRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fields = self
            .layout
            .columns
            .iter()
            .zip(&self.values)
            .map(|(column, value)| format!("{}: {value}", column.name))
            .join(", ");
        write!(f, "{}{{{fields}}}", self.layout.name)
    }
}
