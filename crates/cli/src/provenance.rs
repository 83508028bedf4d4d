//! `<artifact>.provenance.json` sidecars: which engine build turned which inputs
//! into an artifact, and with what curve settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Curve settings an artifact was produced (or is meant to be grown) with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParams {
    pub rule: String,
    pub side_count: usize,
    pub seams: String,
    pub generations: usize,
    /// `None` when no vertex budget applied.
    pub max_vertices: Option<usize>,
}

/// Replay token of a sampled polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleReplay {
    pub seed: u64,
    pub index: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub code_rev: String,
    pub engine_version: String,
    pub command: String,
    pub inputs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<CurveParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replay: Option<SampleReplay>,
    /// Vertex count of the written polygon or curve.
    pub vertices: usize,
    pub outputs: Vec<String>,
}

impl Provenance {
    pub fn new(command: &str) -> Self {
        Self {
            code_rev: git_rev(),
            engine_version: polyfract::VERSION.to_string(),
            command: command.to_string(),
            inputs: Vec::new(),
            curve: None,
            replay: None,
            vertices: 0,
            outputs: Vec::new(),
        }
    }

    pub fn input(mut self, path: &Path) -> Self {
        self.inputs.push(path.to_string_lossy().into_owned());
        self
    }

    pub fn curve(mut self, curve: CurveParams) -> Self {
        self.curve = Some(curve);
        self
    }

    pub fn replay(mut self, replay: SampleReplay) -> Self {
        self.replay = Some(replay);
        self
    }

    pub fn vertices(mut self, vertices: usize) -> Self {
        self.vertices = vertices;
        self
    }

    /// Record `artifact` as the output and write the sidecar beside it.
    pub fn write_next_to(mut self, artifact: &Path) -> Result<PathBuf> {
        self.outputs.push(artifact.to_string_lossy().into_owned());
        let path = sidecar_path(artifact);
        let text = serde_json::to_string_pretty(&self)?;
        fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}

/// `curve.csv` → `curve.provenance.json`.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` if set, else the checkout's short HEAD, else "unknown".
pub fn git_rev() -> String {
    if let Some(rev) = std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
