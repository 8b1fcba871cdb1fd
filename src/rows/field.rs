use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Integer,
    Text,
    Reference,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldType::Integer => write!(f, "INTEGER"),
            FieldType::Text => write!(f, "TEXT"),
            FieldType::Reference => write!(f, "REFERENCE"),
        }
    }
}

/// Static descriptor of one field of a row shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
    /// Table a reference field points at.
    pub references: Option<&'static str>,
}

impl Field {
    pub const fn new(name: &'static str, ty: FieldType) -> Self {
        Field {
            name,
            ty,
            references: None,
        }
    }

    pub const fn references(self, table: &'static str) -> Self {
        Field {
            references: Some(table),
            ..self
        }
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
