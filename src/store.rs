// src/store.rs
//
// Record persistence: one JSON blob per key. Parse once, reload the
// extracted entities any time later without re-running the pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use crate::record::ResumeRecord;

pub fn save_record(dir: &Path, key: &str, record: &ResumeRecord) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", key));
    let json = serde_json::to_string_pretty(record)?;
    fs::write(&path, json)?;
    Ok(path)
}

pub fn load_record(path: &Path) -> anyhow::Result<ResumeRecord> {
    let json = fs::read_to_string(path)?;
    let record: ResumeRecord = serde_json::from_str(&json)?;
    Ok(record)
}
