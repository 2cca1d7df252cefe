//! Loads raw records from a content directory.
//!
//! Layout: `<root>/articles`, `<root>/projects`, `<root>/tags`. Each
//! collection directory may nest subdirectories (e.g. one per language).
//!
//! - `*.json`: the file is the record's field map
//! - `*.md`: a `---` delimited JSON front matter block, then the body
//!
//! A record's key is its path inside the collection directory without the
//! extension, with `/` separators (`es/hello-world`). Records are returned
//! sorted by key so loading is deterministic across platforms.

use crate::content::{EntityKind, RawContent, RawRecord};
use anyhow::{bail, Context, Result};
use regex::Regex;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info, warn};

static FRONT_MATTER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Load every collection under `root`.
///
/// A missing collection directory yields an empty collection.
pub fn load_dir(root: &Path) -> Result<RawContent> {
    if !root.is_dir() {
        bail!("Content directory not found: {}", root.display());
    }

    let mut content = RawContent::default();
    for kind in EntityKind::ALL {
        let dir = root.join(kind.collection_name());
        if !dir.is_dir() {
            warn!("No {} directory at {}", kind.collection_name(), dir.display());
            continue;
        }

        let records = load_collection(&dir)
            .with_context(|| format!("Failed to load {} from {}", kind.collection_name(), dir.display()))?;
        info!("Loaded {} raw {} records", records.len(), kind);
        *content.records_mut(kind) = records;
    }

    Ok(content)
}

/// Load every record file under one collection directory.
pub fn load_collection(dir: &Path) -> Result<Vec<RawRecord>> {
    let mut files = Vec::new();
    collect_files(dir, &mut files)?;

    let mut keyed: Vec<(String, PathBuf)> = files
        .into_iter()
        .filter_map(|path| record_key(dir, &path).map(|key| (key, path)))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    keyed
        .into_iter()
        .map(|(key, path)| {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parse_record(key, &path, &raw)
        })
        .collect()
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?;

    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}

/// Key for a record file, or `None` for files that are not records.
fn record_key(dir: &Path, path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    if ext != "json" && ext != "md" {
        debug!("Skipping non-record file {}", path.display());
        return None;
    }

    let relative = path.strip_prefix(dir).ok()?.with_extension("");
    let parts: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
    Some(parts?.join("/"))
}

fn parse_record(key: String, path: &Path, raw: &str) -> Result<RawRecord> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("md") => {
            let (front_matter, body) = split_front_matter(raw)
                .with_context(|| format!("{}: missing `---` front matter block", path.display()))?;
            let fields: Value = serde_json::from_str(front_matter)
                .with_context(|| format!("{}: front matter is not valid JSON", path.display()))?;
            Ok(RawRecord::new(key, fields).with_body(body.trim_start_matches(['\r', '\n'])))
        }
        _ => {
            let fields: Value = serde_json::from_str(raw)
                .with_context(|| format!("{}: not valid JSON", path.display()))?;
            Ok(RawRecord::new(key, fields))
        }
    }
}

/// Split a markdown document into its front matter and body.
pub fn split_front_matter(raw: &str) -> Option<(&str, &str)> {
    let regex = FRONT_MATTER_REGEX.get_or_init(|| {
        Regex::new(r"(?s)\A\u{feff}?---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n|\z)(.*)\z").unwrap()
    });

    let captures = regex.captures(raw)?;
    Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
}
