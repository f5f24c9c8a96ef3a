use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use imgfilter::*;
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Image filter query builder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compile filter text to a query selecting the matching images
    Compile(CompileArgs),
    /// Print the parsed filter as JSON
    Inspect(InspectArgs),
}

#[derive(Debug, Args)]
struct CompileArgs {
    /// Path to the properties JSON file
    #[arg(short, long, env = "IMGFILTER_PROPERTIES")]
    properties: String,
    /// Override the order of the tables listed after FROM
    #[arg(long, value_enum)]
    table_order: Option<TableOrderArg>,
    /// The filter text, e.g. `per_image.plate = "P1"`. If empty, stdin will be used.
    filter: Option<String>,
}

#[derive(Debug, Args)]
struct InspectArgs {
    /// The filter text. If empty, stdin will be used.
    filter: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TableOrderArg {
    FirstAppearance,
    Alphabetical,
}

impl From<TableOrderArg> for TableOrder {
    fn from(arg: TableOrderArg) -> Self {
        match arg {
            TableOrderArg::FirstAppearance => TableOrder::FirstAppearance,
            TableOrderArg::Alphabetical => TableOrder::Alphabetical,
        }
    }
}

fn get_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read filter text from stdin")?;
    Ok(buffer)
}

fn get_filter_text(filter: Option<String>) -> Result<String> {
    filter.map(Ok).unwrap_or_else(get_stdin)
}

/// Reads the properties document, letting `--table-order` win over its `table_order` field.
fn load_properties(json: &str, table_order: Option<TableOrderArg>) -> Result<Properties> {
    let mut properties = Properties::from_json(json)?;
    if let Some(table_order) = table_order {
        properties.table_order = table_order.into();
    }
    Ok(properties)
}

fn compile(args: CompileArgs) -> Result<()> {
    let filter_text = get_filter_text(args.filter)?;
    let properties_json = std::fs::read_to_string(&args.properties)
        .with_context(|| format!("Failed to read properties file `{}`", args.properties))?;
    let properties = load_properties(&properties_json, args.table_order)?;
    debug!(properties = %args.properties, "compiling filter");
    let builder = QueryBuilder::new(Options::from(&properties));
    let sql = builder.compile(&filter_text)?;
    println!("{sql}");
    Ok(())
}

fn inspect(args: InspectArgs) -> Result<()> {
    let filter = Filter::parse(&get_filter_text(args.filter)?)?;
    let output = serde_json::json!({
        "filter": filter,
        "tables": filter.tables(TableOrder::FirstAppearance),
        "distinct_clauses": filter.distinct_clauses().len(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Cli::parse();
    match args.command {
        Command::Compile(args) => compile(args),
        Command::Inspect(args) => inspect(args),
    }
}
