pub use dynamic::DynRecord;
pub use error::{Error, Result};
pub use field::{Field, FieldType};
pub use layout::{Column, Layout};
pub use record::Record;
pub use row::{copy_fields, Row, RowCopy};
pub use shape::RowShape;
pub use value::{FieldValue, RowId, Value};

pub mod ddl;
pub mod dynamic;
pub mod error;
pub mod field;
pub mod format;
pub mod generated;
pub mod layout;
mod macros;
pub mod record;
pub mod row;
pub mod shape;
pub mod tree;
pub mod value;

#[cfg(test)]
mod tests;
