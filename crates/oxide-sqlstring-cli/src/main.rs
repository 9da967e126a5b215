//! oxide-sqlstring CLI
//!
//! Command-line tool for escaping values and filling SQL templates.

use std::collections::BTreeMap;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use oxide_sqlstring::{Dialect, Escaper, Template, TimeZone, Value};

/// Dialect-aware SQL literal escaping.
#[derive(Parser)]
#[command(name = "oxide-sqlstring")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target SQL dialect (postgres, mysql, mariadb, mssql, sqlite, oracle,
    /// snowflake, db2, ibmi). Unknown names use generic escaping.
    #[arg(short, long, env = "SQLSTRING_DIALECT", default_value = "generic")]
    dialect: String,

    /// UTC offset dates are rendered in (e.g. `+02:00`, `Z`).
    #[arg(short, long, env = "SQLSTRING_TIMEZONE", default_value = "+00:00")]
    timezone: String,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the literal for one JSON value.
    Escape {
        /// Value as JSON. Dates and blobs use `{"$date": ...}` / `{"$blob": ...}`.
        value: String,

        /// Escape as a list member (no native array literal).
        #[arg(long)]
        in_list: bool,
    },

    /// Render a JSON array as a comma list.
    List {
        /// Values as a JSON array.
        values: String,
    },

    /// Fill `?` placeholders in order.
    Format {
        /// Template text. Read from --file or stdin when omitted.
        template: Option<String>,

        /// Values as JSON. A non-array value fills the first placeholder.
        #[arg(long, default_value = "[]")]
        values: String,

        /// Read the template from a file.
        #[arg(short, long, conflicts_with = "template")]
        file: Option<PathBuf>,
    },

    /// Fill `:name` placeholders.
    Named {
        /// Template text. Read from --file or stdin when omitted.
        template: Option<String>,

        /// Values as a JSON object.
        #[arg(long, default_value = "{}")]
        values: String,

        /// Read the template from a file.
        #[arg(short, long, conflicts_with = "template")]
        file: Option<PathBuf>,
    },
}

fn parse_value(json: &str) -> anyhow::Result<Value> {
    let json: serde_json::Value =
        serde_json::from_str(json).context("values are not valid JSON")?;
    Ok(Value::try_from(json)?)
}

fn parse_named(json: &str) -> anyhow::Result<BTreeMap<String, Value>> {
    let json: serde_json::Value =
        serde_json::from_str(json).context("values are not valid JSON")?;
    let serde_json::Value::Object(map) = json else {
        bail!("named values must be a JSON object");
    };
    map.into_iter()
        .map(|(name, value)| -> anyhow::Result<(String, Value)> {
            Ok((name, Value::try_from(value)?))
        })
        .collect()
}

/// Loads template bytes from the argument, a file or stdin.
fn read_template(template: Option<String>, file: Option<PathBuf>) -> anyhow::Result<Vec<u8>> {
    if let Some(text) = template {
        return Ok(text.into_bytes());
    }
    if let Some(path) = file {
        debug!("Reading template from {}", path.display());
        return std::fs::read(&path).with_context(|| format!("cannot read {}", path.display()));
    }
    debug!("Reading template from stdin");
    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let dialect = Dialect::from_name(&cli.dialect);
    let timezone: TimeZone = cli.timezone.parse()?;
    let escaper = Escaper::new(dialect).timezone(timezone);
    info!("Using dialect {dialect}, timezone {timezone}");

    let sql = match cli.command {
        Commands::Escape { value, in_list } => {
            escaper.escape_value(&parse_value(&value)?, in_list)?
        }
        Commands::List { values } => match parse_value(&values)? {
            Value::Array(values) => escaper.array_to_list(&values, false)?,
            _ => bail!("list values must be a JSON array"),
        },
        Commands::Format {
            template,
            values,
            file,
        } => {
            let bytes = read_template(template, file)?;
            let template = Template::from_bytes(&bytes)?;
            let values = parse_value(&values)?;
            escaper.format(template, values.as_params())?
        }
        Commands::Named {
            template,
            values,
            file,
        } => {
            let bytes = read_template(template, file)?;
            let template = Template::from_bytes(&bytes)?;
            escaper.format_named(template, &parse_named(&values)?)?
        }
    };
    Ok(sql)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    println!("{}", run(cli)?);
    Ok(())
}
