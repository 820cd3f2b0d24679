use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};

pub fn now_utc_string() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn utc_compact_string(ts: DateTime<Utc>) -> String {
    ts.format("%Y%m%dT%H%M%SZ").to_string()
}

pub fn ensure_parent_directory(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display())),
        _ => Ok(()),
    }
}

pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)
        .with_context(|| format!("failed to open file for hashing: {}", path.display()))?;

    let mut hasher = Sha256::new();
    let mut buf = [0_u8; 8192];

    loop {
        let count = file
            .read(&mut buf)
            .with_context(|| format!("failed to read file for hashing: {}", path.display()))?;
        if count == 0 {
            break;
        }
        hasher.update(&buf[..count]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_directory(path)?;

    let data = serde_json::to_vec_pretty(value)
        .with_context(|| format!("failed to serialize json: {}", path.display()))?;

    let mut file = File::create(path)
        .with_context(|| format!("failed to create json file: {}", path.display()))?;
    file.write_all(&data)
        .with_context(|| format!("failed to write json file: {}", path.display()))?;
    file.write_all(b"\n")
        .with_context(|| format!("failed to finalize json file: {}", path.display()))?;

    Ok(())
}

/// Writes one compact JSON object per line.
pub fn write_json_lines<T: Serialize>(path: &Path, values: &[T]) -> Result<()> {
    ensure_parent_directory(path)?;

    let file = File::create(path)
        .with_context(|| format!("failed to create json lines file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for (index, value) in values.iter().enumerate() {
        serde_json::to_writer(&mut writer, value).with_context(|| {
            format!("failed to serialize record {} for {}", index + 1, path.display())
        })?;
        writer
            .write_all(b"\n")
            .with_context(|| format!("failed to write json lines file: {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush json lines file: {}", path.display()))?;

    Ok(())
}

pub fn read_json_lines<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).with_context(|| {
                format!("failed to parse {} line {}", path.display(), index + 1)
            })
        })
        .collect()
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
