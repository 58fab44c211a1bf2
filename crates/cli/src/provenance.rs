//! Provenance sidecars for `hexbind convert` outputs.
//!
//! Each artifact `out/cells.json` gets `out/cells.provenance.json` recording the
//! code revision, library version, callsite, conversion parameters and the
//! input files it was derived from.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Revision and library version; shared by sidecars and `hexbind report`.
#[derive(Debug, Serialize)]
pub struct Header {
    pub code_rev: String,
    pub hexbind_version: &'static str,
}

impl Header {
    pub fn current() -> Self {
        Self {
            code_rev: code_rev(),
            hexbind_version: hexbind::VERSION,
        }
    }
}

/// Conversion parameters and inputs for one artifact.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push(input.into());
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar {
    #[serde(flatten)]
    header: Header,
    callsite: Callsite,
    params: Value,
    inputs: Vec<String>,
    outputs: Vec<String>,
}

/// Write the sidecar next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = sidecar_path(artifact);
    let callsite = Location::caller();
    let sidecar = Sidecar {
        header: Header::current(),
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        params: payload.params,
        inputs: payload.inputs,
        outputs: vec![artifact.display().to_string()],
    };
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `cells.json` -> `cells.provenance.json`, in the same directory.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse`.
pub fn code_rev() -> String {
    let pinned = option_env!("GIT_COMMIT").map(str::to_owned);
    let runtime = std::env::var("GIT_COMMIT").ok();
    pinned
        .into_iter()
        .chain(runtime)
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_owned()).filter(|rev| !rev.is_empty())
}
