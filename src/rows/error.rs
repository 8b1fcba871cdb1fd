use sqlparser::parser::ParserError;
use thiserror::Error;

use super::field::FieldType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("field {field} expects {expected} but got {found}")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        found: FieldType,
    },
    #[error("{target} has no field named {field}")]
    MissingField { field: String, target: String },
    #[error("unknown field {field} on {shape}")]
    UnknownField { field: String, shape: String },
    #[error("{shape} has {expected} fields but {found} values were given")]
    Arity {
        shape: String,
        expected: usize,
        found: usize,
    },
    #[error("unknown table {0}")]
    UnknownTable(String),
    #[error(transparent)]
    Parse(#[from] ParserError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0} is not currently supported")]
    Unsupported(String),
    #[error("column {column} has unsupported type {ty}")]
    UnsupportedType { column: String, ty: String },
}
