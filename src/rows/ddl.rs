use std::collections::HashMap;

use itertools::Itertools;
use sqlparser::{
    ast::{self, ColumnDef, ColumnOption, DataType, ObjectName, TableConstraint},
    dialect::SQLiteDialect,
    parser::Parser,
};
use tracing::debug;

use super::{
    error::{Error, Result},
    field::FieldType,
    layout::{Column, Layout},
};

static DIALECT: SQLiteDialect = SQLiteDialect {};

/// Reads the layouts of every `CREATE TABLE` statement in `sql`.
pub fn parse_layouts(sql: &str) -> Result<Vec<Layout>> {
    let ast = Parser::parse_sql(&DIALECT, sql)?;
    ast.iter().map(layout_of).try_collect()
}

fn layout_of(statement: &ast::Statement) -> Result<Layout> {
    let ast::Statement::CreateTable {
        name,
        columns,
        constraints,
        ..
    } = statement
    else {
        return Err(Error::Unsupported(statement.to_string()));
    };

    // table level FOREIGN KEY (col) REFERENCES other (id)
    let mut foreign_keys: HashMap<String, String> = HashMap::new();
    for constraint in constraints {
        if let TableConstraint::ForeignKey {
            columns: keys,
            foreign_table,
            ..
        } = constraint
        {
            for column in keys {
                foreign_keys.insert(column.value.to_ascii_lowercase(), table_name(foreign_table));
            }
        }
    }

    let layout_columns: Vec<Column> = columns
        .iter()
        .map(|def| column_of(def, &foreign_keys))
        .try_collect()?;

    let layout = Layout::new(table_name(name), layout_columns)?;
    debug!(table = %layout.name, columns = layout.len(), "read table layout");
    Ok(layout)
}

fn column_of(def: &ColumnDef, foreign_keys: &HashMap<String, String>) -> Result<Column> {
    let name = def.name.value.as_str();
    let column_reference = def.options.iter().find_map(|o| match &o.option {
        ColumnOption::ForeignKey { foreign_table, .. } => Some(table_name(foreign_table)),
        _ => None,
    });
    let reference =
        column_reference.or_else(|| foreign_keys.get(&name.to_ascii_lowercase()).cloned());
    if let Some(table) = reference {
        return Ok(Column::reference(name, table));
    }
    Ok(Column::new(name, field_type(name, &def.data_type)?))
}

fn field_type(column: &str, data_type: &DataType) -> Result<FieldType> {
    match data_type {
        DataType::TinyInt(_)
        | DataType::SmallInt(_)
        | DataType::MediumInt(_)
        | DataType::Int(_)
        | DataType::Integer(_)
        | DataType::BigInt(_) => Ok(FieldType::Integer),

        DataType::Character(_)
        | DataType::Char(_)
        | DataType::CharacterVarying(_)
        | DataType::CharVarying(_)
        | DataType::Varchar(_)
        | DataType::Nvarchar(_)
        | DataType::Text
        | DataType::Clob(_) => Ok(FieldType::Text),

        other => Err(Error::UnsupportedType {
            column: column.to_owned(),
            ty: other.to_string(),
        }),
    }
}

fn table_name(name: &ObjectName) -> String {
    name.0
        .last()
        .map(|ident| ident.value.clone())
        .unwrap_or_else(|| name.to_string())
}
