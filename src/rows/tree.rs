use std::{borrow::Cow, io, rc::Rc};

use ptree::{print_tree_with, write_tree_with, PrintConfig, Style, TreeItem};

use super::{
    error::Result,
    layout::{Column, Layout},
};

/// Schema -> tables -> columns, for printing with `ptree`.
#[derive(Debug, Clone)]
pub enum SchemaNode {
    Schema(Vec<Rc<Layout>>),
    Table(Rc<Layout>),
    Column(Rc<Column>),
}

impl TreeItem for SchemaNode {
    type Child = Self;

    fn write_self<W: io::Write>(&self, f: &mut W, style: &Style) -> io::Result<()> {
        match self {
            SchemaNode::Schema(tables) => write!(f, "schema ({} tables)", tables.len()),
            SchemaNode::Table(layout) => write!(f, "{}", style.paint(&layout.name)),
            SchemaNode::Column(column) => match &column.references {
                Some(table) => write!(f, "{} {} -> {}", column.name, column.ty, table),
                None => write!(f, "{} {}", column.name, column.ty),
            },
        }
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        match self {
            SchemaNode::Schema(tables) => tables.iter().cloned().map(SchemaNode::Table).collect(),
            SchemaNode::Table(layout) => layout
                .columns
                .iter()
                .cloned()
                .map(SchemaNode::Column)
                .collect(),
            SchemaNode::Column(_) => Cow::from(vec![]),
        }
    }
}

fn config() -> PrintConfig {
    PrintConfig {
        leaf: Style {
            bold: true,
            ..Style::default()
        },
        branch: Style { ..Style::default() },
        ..PrintConfig::default()
    }
}

pub fn print_tree(layouts: &[Rc<Layout>]) -> Result<()> {
    print_tree_with(&SchemaNode::Schema(layouts.to_vec()), &config())?;
    Ok(())
}

/// Renders the tree without styling, for logs and tests.
pub fn render_tree(layouts: &[Rc<Layout>]) -> Result<String> {
    let config = PrintConfig {
        leaf: Style::default(),
        branch: Style::default(),
        ..PrintConfig::default()
    };
    let mut out = Vec::new();
    write_tree_with(&SchemaNode::Schema(layouts.to_vec()), &mut out, &config)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
