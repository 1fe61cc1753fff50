use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TypeArg {
    Any,
    Int,
    Float,
    Text,
    Empty,
}

#[derive(Parser, Debug)]
#[command(
    name = "typed-ini",
    about = "Dump or query sectioned key=value configuration files",
    version
)]
struct Args {
    /// Print a single value addressed as Section.Key
    #[arg(short, long, value_name = "PATH")]
    get: Option<String>,

    /// Type the value must have (with --get)
    #[arg(short = 't', long = "type", value_enum, default_value_t = TypeArg::Any)]
    ty: TypeArg,

    /// Dump the document as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Trim spaces and tabs around keys and values
    #[arg(long, default_value_t = false)]
    trim: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "typed_ini=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let options = ini::Options {
        trim_whitespace: args.trim,
    };

    let doc = match &args.input {
        Some(path) => ini::from_path(path, &options)?,
        None => {
            let mut buf = String::new();
            stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            ini::from_str(&buf, &options)?
        }
    };
    tracing::debug!(sections = doc.len(), "loaded document");

    if let Some(path) = &args.get {
        let rendered = match args.ty {
            TypeArg::Any => doc.get::<ini::Value>(path)?.to_string(),
            TypeArg::Int => doc.get::<i64>(path)?.to_string(),
            TypeArg::Float => ini::Value::Float(doc.get::<f64>(path)?).to_string(),
            TypeArg::Text => doc.get::<String>(path)?,
            TypeArg::Empty => {
                doc.get::<()>(path)?;
                String::new()
            }
        };
        println!("{}", rendered);
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&doc.to_json_value()?)?);
    } else {
        print!("{}", doc);
    }

    Ok(())
}

