use std::fs::File;
use std::io::{BufReader, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "fitjson-cli",
    about = "Normalize a JSON document against a record schema",
    version
)]
struct Args {
    /// Schema file describing the record's fields and current values
    #[arg(short, long)]
    schema: PathBuf,

    /// Print the schema's current state instead of normalizing input
    #[arg(long, default_value_t = false)]
    dump: bool,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Do not read snake_case spellings of field identifiers
    #[arg(long, default_value_t = false)]
    no_fold: bool,

    /// Leave quoted numbers as strings
    #[arg(long, default_value_t = false)]
    no_coerce: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let schema_file = File::open(&args.schema)
        .with_context(|| format!("opening schema {}", args.schema.display()))?;
    let schema = fitjson::SchemaRecord::from_reader(BufReader::new(schema_file))
        .with_context(|| format!("loading schema {}", args.schema.display()))?;
    tracing::debug!(fields = schema.fields.len(), "schema loaded");

    let options = fitjson::Options {
        fold_names: !args.no_fold,
        coerce_numbers: !args.no_coerce,
    };

    let value = if args.dump {
        fitjson::to_value(&schema)?
    } else {
        match &args.input {
            Some(path) => {
                let f = File::open(path)
                    .with_context(|| format!("opening input {}", path.display()))?;
                fitjson::normalize_reader(&schema, BufReader::new(f), &options)?
            }
            None => fitjson::normalize_reader(&schema, stdin().lock(), &options)?,
        }
    };

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", serde_json::to_string(&value)?);
    }

    Ok(())
}
