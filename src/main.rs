use std::{fs, path::PathBuf, rc::Rc};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

use rusty_rows::rows::{
    ddl::parse_layouts,
    format::format_table,
    generated::{AaPojo, BbPojo, CcPojo, DdPojo, IAa, IBb, ICc, IDd, IV2603, V2603Pojo, DEMO_DDL, V2603},
    tree::print_tree,
    Layout, Record, RowCopy, RowId,
};

#[derive(Debug, Parser)]
#[command(name = "rusty-rows", about = "Typed row interfaces and row copying")]
struct Cli {
    /// CREATE TABLE script to read layouts from, the built-in demo schema otherwise
    #[arg(long)]
    ddl: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List table names
    Tables,
    /// Print every table with its columns
    Schema,
    /// Print the schema as a tree
    Tree,
    /// Check that rows of <source> can be copied into rows of <target>
    Compat { source: String, target: String },
    /// Seed the demo rows and copy them around
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let sql = match &cli.ddl {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => DEMO_DDL.to_owned(),
    };
    let layouts = parse_layouts(&sql)?
        .into_iter()
        .map(Rc::new)
        .collect_vec();

    match cli.command {
        Command::Tables => {
            println!("{}", layouts.iter().map(|l| &l.name).join(" "));
        }
        Command::Schema => {
            for layout in &layouts {
                print!("{layout}");
            }
        }
        Command::Tree => print_tree(&layouts)?,
        Command::Compat { source, target } => {
            let source = find(&layouts, &source)?;
            let target = find(&layouts, &target)?;
            source
                .check_assignable_to(target)
                .with_context(|| format!("{} rows cannot be copied into {}", source.name, target.name))?;
            println!("{} rows can be copied into {}", source.name, target.name);
        }
        Command::Demo => demo()?,
    }

    Ok(())
}

fn find<'a>(layouts: &'a [Rc<Layout>], name: &str) -> Result<&'a Layout> {
    match layouts.iter().find(|l| l.name.eq_ignore_ascii_case(name)) {
        Some(layout) => Ok(layout),
        None => bail!(rusty_rows::rows::Error::UnknownTable(name.to_owned())),
    }
}

fn demo() -> Result<()> {
    let mut one = AaPojo::default();
    one.set_id(1);
    one.set_text("one".to_owned());

    let mut two = BbPojo::default();
    two.set_id(1);
    two.set_text("two".to_owned());
    two.set_parent(RowId(1));

    let mut three = CcPojo::default();
    three.set_id(1);
    three.set_text("three".to_owned());
    three.set_parent(RowId(1));

    let mut four = DdPojo::default();
    four.set_id(1);
    four.set_text("four".to_owned());
    four.set_parent(RowId(1));

    println!("{}", format_table(&[one]));
    println!("{}", format_table(&[two]));
    println!("{}", format_table(&[three]));
    println!("{}", format_table(&[four]));

    let mut a = Record::<V2603>::new();
    a.set_col1(7);
    a.set_col4(42);

    let mut b = V2603Pojo {
        col1: Some(0),
        col4: Some(0),
    };
    b.copy_from(&a);
    println!("from: {b:?}");

    let mut c = V2603Pojo::default();
    let into = a.copy_into(&mut c);
    println!("into: {into:?}");
    println!("{}", format_table(&[a]));

    Ok(())
}
