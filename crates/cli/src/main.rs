use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use hexbind::validity;
use hexbind::{id_to_string, string_to_id, CATALOG};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod convert;
mod provenance;

use convert::Target;
use provenance::{Header, Payload};

#[derive(Parser)]
#[command(name = "hexbind")]
#[command(about = "Hexagon identifier conversion and inspection")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Parse canonical hex strings and print their integer form
    ToInt {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Format integer identifiers as canonical hex strings
    ToStr {
        #[arg(required = true)]
        ids: Vec<u64>,
    },
    /// Report structural validity of hex-string identifiers as JSON
    Check {
        /// Exit with an error if any identifier fails
        #[arg(long)]
        strict: bool,
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Convert one CSV column of identifiers and write JSON plus provenance
    Convert {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        column: String,
        #[arg(long, value_enum)]
        to: Target,
        #[arg(long)]
        validate: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the operation catalog as JSON
    Ops,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::ToInt { ids } => to_int(ids),
        Action::ToStr { ids } => to_str(ids),
        Action::Check { strict, ids } => check(strict, ids),
        Action::Convert {
            input,
            column,
            to,
            validate,
            out,
        } => convert(input, column, to, validate, out),
        Action::Ops => ops(),
        Action::Report => report(),
    }
}

fn to_int(ids: Vec<String>) -> Result<()> {
    tracing::info!(count = ids.len(), "to-int");
    for s in &ids {
        println!("{}", string_to_id(s)?);
    }
    Ok(())
}

fn to_str(ids: Vec<u64>) -> Result<()> {
    tracing::info!(count = ids.len(), "to-str");
    for id in ids {
        println!("{}", id_to_string(id));
    }
    Ok(())
}

fn check(strict: bool, ids: Vec<String>) -> Result<()> {
    tracing::info!(count = ids.len(), strict, "check");
    let mut failures = 0usize;
    let rows: Vec<_> = ids
        .iter()
        .map(|s| match string_to_id(s) {
            Err(err) => {
                failures += 1;
                json!({ "input": s, "valid": false, "error": err.to_string() })
            }
            Ok(id) => match validity::check(id) {
                Ok(()) => json!({
                    "input": s,
                    "valid": true,
                    "id": id,
                    "mode": validity::mode(id),
                    "resolution": validity::resolution(id),
                    "base_cell": validity::base_cell(id),
                }),
                Err(err) => {
                    failures += 1;
                    json!({ "input": s, "valid": false, "id": id, "error": err.to_string() })
                }
            },
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    if strict && failures > 0 {
        bail!("{failures} of {} identifiers failed validation", ids.len());
    }
    Ok(())
}

fn convert(input: PathBuf, column: String, to: Target, validate: bool, out: PathBuf) -> Result<()> {
    tracing::info!(input = %input.display(), column, ?to, validate, out = %out.display(), "convert");
    let buf = convert::load_column(&input, &column, validate)?;
    convert::write_json(&out, &convert::render(&buf, to))?;
    let payload = Payload::new(json!({
        "column": column,
        "to": to,
        "validate": validate,
        "rows": buf.len(),
    }))
    .with_input(input.to_string_lossy());
    let sidecar = provenance::write_sidecar(&out, payload)?;
    tracing::info!(rows = buf.len(), sidecar = %sidecar.display(), "converted");
    Ok(())
}

fn ops() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(CATALOG)?);
    Ok(())
}

#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    header: Header,
    operations: usize,
}

fn report() -> Result<()> {
    let report = Report {
        header: Header::current(),
        operations: CATALOG.len(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
