use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value as JsonValue;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    cases: HashMap<String, String>,
}

/// One interpolation scenario: a config, an input sequence, and either the
/// expected output or the expected error kind.
#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    #[serde(default)]
    pub description: String,
    #[serde(default = "empty_object")]
    pub config: JsonValue,
    pub input: JsonValue,
    #[serde(default)]
    pub expected: Option<JsonValue>,
    /// snake_case error kind, e.g. `not_numeric`
    #[serde(default)]
    pub error: Option<String>,
}

fn empty_object() -> JsonValue {
    JsonValue::Object(Default::default())
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

pub mod cases {
    use super::*;

    /// All case names, sorted so test output is stable.
    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.cases.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.cases, "case", name)?;
        read_to_string(rel)
    }

    pub fn load(name: &str) -> Result<Case> {
        let rel = lookup(&MANIFEST.cases, "case", name)?;
        load_json(rel)
    }
}
