use std::{fmt, rc::Rc};

use itertools::Itertools;
use tracing::debug;

use super::{
    error::{Error, Result},
    field::FieldType,
    shape::RowShape,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: Rc<str>,
    pub ty: FieldType,
    pub references: Option<Rc<str>>,
}

impl Column {
    pub fn new(name: impl Into<Rc<str>>, ty: FieldType) -> Self {
        Column {
            name: name.into(),
            ty,
            references: None,
        }
    }

    pub fn reference(name: impl Into<Rc<str>>, table: impl Into<Rc<str>>) -> Self {
        Column {
            name: name.into(),
            ty: FieldType::Reference,
            references: Some(table.into()),
        }
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.references {
            Some(table) => write!(f, "{:15} - {} -> {}", self.name, self.ty, table),
            None => write!(f, "{:15} - {}", self.name, self.ty),
        }
    }
}

/// Runtime description of a row shape, e.g. read from DDL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub name: Rc<str>,
    pub columns: Vec<Rc<Column>>,
}

impl Layout {
    /// Column names must be unique, ignoring ASCII case.
    pub fn new(name: impl Into<Rc<str>>, columns: Vec<Column>) -> Result<Self> {
        let name = name.into();
        if let Some(duplicate) = columns
            .iter()
            .enumerate()
            .find(|(i, c)| columns[..*i].iter().any(|prev| prev.is_named(&c.name)))
            .map(|(_, c)| c)
        {
            return Err(Error::Unsupported(format!(
                "duplicate column {} in {}",
                duplicate.name, name
            )));
        }
        Ok(Layout {
            name,
            columns: columns.into_iter().map(Rc::new).collect(),
        })
    }

    /// The runtime layout of a static shape.
    pub fn of<S: RowShape>() -> Result<Self> {
        let columns = S::FIELDS
            .iter()
            .map(|f| Column {
                name: f.name.into(),
                ty: f.ty,
                references: f.references.map(Rc::from),
            })
            .collect_vec();
        Layout::new(S::NAME, columns)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.is_named(name))
    }

    pub fn column(&self, name: &str) -> Option<&Rc<Column>> {
        self.columns.iter().find(|c| c.is_named(name))
    }

    /// Every column of `self` must exist in `target` with the same type.
    /// `target` may carry extra columns.
    pub fn check_assignable_to(&self, target: &Layout) -> Result<()> {
        for column in &self.columns {
            let Some(found) = target.column(&column.name) else {
                debug!(source = %self.name, target = %target.name, field = %column.name, "missing field");
                return Err(Error::MissingField {
                    field: column.name.to_string(),
                    target: target.name.to_string(),
                });
            };
            if found.ty != column.ty {
                debug!(source = %self.name, target = %target.name, field = %column.name, "type mismatch");
                return Err(Error::TypeMismatch {
                    field: column.name.to_string(),
                    expected: found.ty,
                    found: column.ty,
                });
            }
        }
        Ok(())
    }

    pub fn is_assignable_to(&self, target: &Layout) -> bool {
        self.check_assignable_to(target).is_ok()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Table: {}", self.name)?;
        for column in &self.columns {
            writeln!(f, "{column}")?;
        }
        Ok(())
    }
}
