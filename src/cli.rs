//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::convert_csv;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::ini_field_schema::IniFieldSchema;
use crate::domain::comparison::{evaluate, Operator};
use crate::domain::convert::convert;
use crate::domain::error::{ConversionError, FixconvError};
use crate::domain::target_type::TargetType;
use crate::logging;
use crate::ports::config_port::ConfigPort;
use crate::ports::field_schema_port::FieldSchemaPort;

#[derive(Parser, Debug)]
#[command(name = "fixconv", about = "Typed value conversion for FIX rule fields")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert one field value
    Convert {
        /// Target type name (canonical or FIXatdl alias)
        #[arg(short = 't', long = "type", conflicts_with = "field")]
        type_name: Option<String>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Field whose type is looked up in the config's [fields] section
        #[arg(short, long, requires = "config")]
        field: Option<String>,
        /// Convert a null value instead of VALUE
        #[arg(long, conflicts_with = "value")]
        null: bool,
        #[arg(required_unless_present = "null", allow_negative_numbers = true)]
        value: Option<String>,
    },
    /// Compare two values of the same type
    Compare {
        #[arg(short = 't', long = "type")]
        type_name: String,
        #[arg(allow_negative_numbers = true)]
        left: String,
        /// EX, NX, EQ, NE, LT, LE, GT or GE
        operator: String,
        #[arg(allow_negative_numbers = true)]
        right: Option<String>,
    },
    /// Convert every row of a field,value CSV file
    Batch {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List supported type names
    Types,
}

impl Command {
    fn config_path(&self) -> Option<&Path> {
        match self {
            Command::Convert { config, .. } => config.as_deref(),
            Command::Batch { config, .. } => Some(config.as_path()),
            Command::Compare { .. } | Command::Types => None,
        }
    }
}

pub fn run(cli: Cli) -> ExitCode {
    let config = match cli.command.config_path().map(load_config).transpose() {
        Ok(c) => c,
        Err(err) => {
            logging::init(logging::DEFAULT_LEVEL);
            eprintln!("error: {err}");
            return (&err).into();
        }
    };
    logging::init(&logging::configured_level(
        config.as_ref().map(|c| c as &dyn ConfigPort),
    ));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match execute(&cli.command, config.as_ref(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", render_error(&err));
            (&err).into()
        }
    }
}

/// Error text for stderr. Grammar failures point at the offending character.
pub fn render_error(err: &FixconvError) -> String {
    match err {
        FixconvError::Conversion(e) => e.display_with_context(),
        other => other.to_string(),
    }
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, FixconvError> {
    FileConfigAdapter::from_file(path).map_err(|e| FixconvError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Run a command, writing its result to `out`.
pub fn execute(
    command: &Command,
    config: Option<&FileConfigAdapter>,
    out: &mut dyn Write,
) -> Result<(), FixconvError> {
    match command {
        Command::Convert {
            type_name,
            field,
            null,
            value,
            ..
        } => {
            let target = resolve_target(
                type_name.as_deref(),
                field.as_deref(),
                config,
                value.as_deref(),
            )?;
            let source = if *null { None } else { value.as_deref() };
            run_convert(target, source, out)
        }
        Command::Compare {
            type_name,
            left,
            operator,
            right,
        } => run_compare(type_name, left, operator, right.as_deref(), out),
        Command::Batch { input, output, .. } => {
            let config = config.ok_or_else(|| FixconvError::ConfigMissing {
                section: "fields".into(),
                key: "config".into(),
            })?;
            run_batch(config, input, output.as_deref(), out)
        }
        Command::Types => run_types(out),
    }
}

fn resolve_target(
    type_name: Option<&str>,
    field: Option<&str>,
    config: Option<&FileConfigAdapter>,
    value: Option<&str>,
) -> Result<Option<TargetType>, FixconvError> {
    if let Some(name) = type_name {
        return Ok(Some(TargetType::from_name(name, value)?));
    }
    let Some(field) = field else {
        return Ok(None);
    };
    let config = config.ok_or_else(|| FixconvError::ConfigMissing {
        section: "fields".into(),
        key: field.to_string(),
    })?;
    let schema = IniFieldSchema::from_config(config)?;
    schema
        .target_type(field)
        .map(Some)
        .ok_or_else(|| FixconvError::UnknownField {
            field: field.to_string(),
        })
}

fn run_convert(
    target: Option<TargetType>,
    value: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), FixconvError> {
    tracing::debug!(target_type = ?target, ?value, "converting");
    let converted = convert(target, value)?;
    let type_name = converted
        .as_ref()
        .map(|v| v.target_type().name())
        .or(target.map(TargetType::name))
        .unwrap_or("Text");
    match converted {
        Some(v) => writeln!(out, "{type_name}\t{v}")?,
        None => writeln!(out, "{type_name}\t<null>")?,
    }
    Ok(())
}

fn run_compare(
    type_name: &str,
    left: &str,
    operator: &str,
    right: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), FixconvError> {
    let target = TargetType::from_name(type_name, Some(left))?;
    let op: Operator = operator.parse()?;
    let left = convert(Some(target), Some(left))?;
    let right = convert(Some(target), right)
        .or_else(|e| match e {
            // Presence operators take no right-hand value.
            ConversionError::NullValue { .. } => Ok(None),
            other => Err(other),
        })?;
    let result = evaluate(op, left.as_ref(), right.as_ref())?;
    writeln!(out, "{result}")?;
    Ok(())
}

fn run_batch(
    config: &FileConfigAdapter,
    input: &Path,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> Result<(), FixconvError> {
    let schema = IniFieldSchema::from_config(config)?;
    let fields = schema.fields();
    if fields.is_empty() {
        tracing::warn!("no [fields] configured; every row will be an unknown field");
    } else {
        tracing::debug!(?fields, "batch schema");
    }
    let reader = File::open(input)?;

    let summary = match output {
        Some(path) => convert_csv(&schema, reader, File::create(path)?)?,
        None => convert_csv(&schema, reader, out)?,
    };
    tracing::info!(
        converted = summary.converted,
        failed = summary.failed,
        input = %input.display(),
        "batch complete"
    );
    Ok(())
}

fn run_types(out: &mut dyn Write) -> Result<(), FixconvError> {
    for target in TargetType::ALL {
        let aliases: Vec<&str> = target.aliases().collect();
        writeln!(out, "{}\t{}", target.name(), aliases.join(", "))?;
    }
    Ok(())
}
