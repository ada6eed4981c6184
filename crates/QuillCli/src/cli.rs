//! # Quill CLI
//!
//! Command-line access to the FHIR R4 JSON codec.
//!
//! ```text
//! quill inspect <FILE|->                       Summarize a resource
//! quill roundtrip <FILE|-> [--pretty] [--check] Decode and re-encode
//! quill registry                               List choice types and modeled resources
//!     --log-level <LEVEL>                       [env: QUILL_LOG_LEVEL] [default: warn]
//! ```
//!
//! `RUST_LOG` takes precedence over `--log-level`. Logs go to stderr.
//!
//! ## Usage Examples
//!
//! ```bash
//! quill inspect bundle.json
//! cat patient.json | quill roundtrip - --pretty
//! quill roundtrip observation.json --check
//! ```

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quill_fhir::json::{from_json_value, to_json_string, to_json_string_pretty};
use quill_fhir::r4::{DynamicValueType, Resource, ResourceType};
use quill_fhir::FhirJson;
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "Read, inspect and rewrite FHIR R4 JSON resources")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, env = "QUILL_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the type, id and nested resources of a document
    Inspect {
        /// Path to a FHIR JSON file (use '-' for stdin)
        input: PathBuf,
    },
    /// Decode a document and write it back out
    Roundtrip {
        /// Path to a FHIR JSON file (use '-' for stdin)
        input: PathBuf,

        /// Indent the output
        #[arg(long, env = "QUILL_PRETTY")]
        pretty: bool,

        /// Exit with a failure status if the output differs from the input
        #[arg(long)]
        check: bool,
    },
    /// List the choice-type registry and the modeled resource types
    Registry,
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `level`.
pub fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Main CLI execution function
pub fn run_cli(args: Args) -> Result<ExitCode> {
    match args.command {
        Command::Inspect { input } => {
            let resource = read_resource(&input)?.1;
            write_stdout(&inspect(&resource))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Roundtrip {
            input,
            pretty,
            check,
        } => {
            let (source, resource) = read_resource(&input)?;
            let outcome = roundtrip(&source, &resource, pretty)?;
            write_stdout(&outcome.output)?;
            if check && !outcome.unchanged {
                tracing::warn!(input = %input.display(), "re-encoded document differs from input");
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Registry => {
            write_stdout(&registry())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Read input from file or stdin
fn read_input(path: &Path) -> Result<String> {
    if path.to_str() == Some("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("reading stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

/// Parses `path` and decodes it as a resource, keeping the parsed tree.
pub fn read_resource(path: &Path) -> Result<(Value, Resource)> {
    let text = read_input(path)?;
    let source: Value =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    let resource = from_json_value(&source)
        .with_context(|| format!("decoding {}", path.display()))?;
    Ok((source, resource))
}

fn write_stdout(content: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(content.as_bytes())?;
    handle.write_all(b"\n")?;
    Ok(())
}

fn describe(resource: &Resource) -> String {
    let mut line = resource.resource_type().to_string();
    if resource.is_unknown() {
        line.push_str(" (unknown)");
    }
    if let Some(id) = resource.id().and_then(|id| id.value.as_deref()) {
        let _ = write!(line, " id={id}");
    }
    line
}

/// Summarizes a resource and the resources nested inside it.
pub fn inspect(resource: &Resource) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "resourceType: {}", resource.resource_type());
    let _ = writeln!(out, "modeled: {}", !resource.is_unknown());
    let _ = write!(
        out,
        "id: {}",
        resource
            .id()
            .and_then(|id| id.value.as_deref())
            .unwrap_or("-")
    );

    let contained = resource.contained();
    if !contained.is_empty() {
        out.push_str("\ncontained:");
        for (index, nested) in contained.iter().enumerate() {
            let _ = write!(out, "\n  [{index}] {}", describe(nested));
        }
    }

    if let Resource::Bundle(bundle) = resource {
        out.push_str("\nentries:");
        for (index, entry) in bundle.entry.iter().enumerate() {
            match &entry.resource {
                Some(nested) => {
                    let _ = write!(out, "\n  [{index}] {}", describe(nested));
                }
                None => {
                    let _ = write!(out, "\n  [{index}] (no resource)");
                }
            }
        }
    }
    out
}

/// Result of re-encoding a decoded document.
pub struct Roundtrip {
    pub output: String,
    /// Whether the re-encoded tree equals the parsed input.
    pub unchanged: bool,
}

pub fn roundtrip(source: &Value, resource: &Resource, pretty: bool) -> Result<Roundtrip> {
    let output = if pretty {
        to_json_string_pretty(resource)?
    } else {
        to_json_string(resource)?
    };
    Ok(Roundtrip {
        output,
        unchanged: &resource.to_json() == source,
    })
}

/// Lists the choice-type registry and modeled resource types.
pub fn registry() -> String {
    let mut out = String::from("choice types:");
    for tag in DynamicValueType::ALL {
        let _ = write!(out, "\n  {tag:?} -> value{}", tag.suffix());
    }
    out.push_str("\nresources:");
    for resource_type in ResourceType::ALL {
        let _ = write!(out, "\n  {resource_type}");
    }
    out
}
