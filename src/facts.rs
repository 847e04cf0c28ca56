use crate::armbian_release::ReleaseRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Key the release record is nested under inside `ansible_facts`.
pub const FACT_NAMESPACE: &str = "armbian";

const FACT_MODULE: &str = "armbian_facts";
const SUPPORTED_ARGS: &[&str] = &["fact_path"];

/// Arguments the host passes in its JSON args file.
///
/// None of them change what gets parsed. Keys other than these and the host's
/// own `_ansible_*` keys are rejected.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleArgs {
    #[serde(default)]
    pub fact_path: Option<PathBuf>,
    #[serde(default, rename = "_ansible_check_mode")]
    pub check_mode: bool,
}

impl ModuleArgs {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let unsupported: Vec<&str> = raw
            .keys()
            .map(String::as_str)
            .filter(|key| !SUPPORTED_ARGS.contains(key) && !key.starts_with("_ansible_"))
            .collect();
        if !unsupported.is_empty() {
            anyhow::bail!(
                "Unsupported parameters for ({FACT_MODULE}) module: {}. Supported parameters include: {}.",
                unsupported.join(", "),
                SUPPORTED_ARGS.join(", ")
            );
        }
        Ok(serde_json::from_value(serde_json::Value::Object(raw))?)
    }
}

/// Successful module result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactsResult {
    pub ansible_facts: BTreeMap<String, BTreeMap<String, String>>,
    pub changed: bool,
}

impl FactsResult {
    pub fn new(record: ReleaseRecord) -> Self {
        let mut ansible_facts = BTreeMap::new();
        ansible_facts.insert(FACT_NAMESPACE.to_string(), record.into_iter().collect());
        Self {
            ansible_facts,
            changed: false,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Result reported when the host-side plumbing fails before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureResult {
    pub failed: bool,
    pub msg: String,
}

impl FailureResult {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            failed: true,
            msg: msg.into(),
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
