use crate::entry::Entry;
use crate::error::{ConvertError, Result};
use crate::output::write_json_atomic;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Statistics from a merge into a settings file
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    /// Number of new entries appended
    pub added: usize,
    /// Size of `dictionary.entries` after the merge
    pub total: usize,
}

fn entry_key(value: &Value) -> Option<(String, String)> {
    let word = value.get("word")?.as_str()?;
    let reading = value.get("reading")?.as_str()?;
    Some((word.to_string(), reading.to_string()))
}

/// Append every entry of `new` whose `(word, reading)` pair is not yet in
/// `existing`, keeping both sides in their original order.
///
/// Existing entries are kept as raw JSON so any extra fields survive.
/// Returns the number of entries appended.
pub fn merge_entries(existing: &mut Vec<Value>, new: &[Entry]) -> Result<usize, String> {
    let mut keys = existing
        .iter()
        .enumerate()
        .map(|(i, value)| {
            entry_key(value).ok_or_else(|| format!("entry {i} lacks string `word`/`reading`"))
        })
        .collect::<Result<HashSet<_>, _>>()?;

    let mut added = 0;
    for entry in new {
        if keys.insert(entry.key()) {
            existing.push(serde_json::to_value(entry).map_err(|e| e.to_string())?);
            added += 1;
        }
    }

    Ok(added)
}

/// Merge `new` into `dictionary.entries` of a settings document.
///
/// Missing `dictionary` or `entries` keys are created; all other keys are
/// left as they are.
pub fn merge_into_settings(document: Value, new: &[Entry]) -> Result<(Value, MergeStats), String> {
    let Value::Object(mut settings) = document else {
        return Err("top level is not an object".to_string());
    };

    let dictionary = settings
        .entry("dictionary")
        .or_insert_with(|| Value::Object(Map::new()));
    let Value::Object(dictionary) = dictionary else {
        return Err("`dictionary` is not an object".to_string());
    };

    let entries = dictionary
        .entry("entries")
        .or_insert_with(|| Value::Array(Vec::new()));
    let Value::Array(entries) = entries else {
        return Err("`dictionary.entries` is not an array".to_string());
    };

    let added = merge_entries(entries, new)?;
    let stats = MergeStats {
        added,
        total: entries.len(),
    };

    Ok((Value::Object(settings), stats))
}

/// Load the settings file at `path` (or start empty if it does not exist),
/// merge `new` into it and write it back.
pub fn merge_file(path: &Path, new: &[Entry]) -> Result<MergeStats> {
    let document = match fs::read_to_string(path) {
        Ok(contents) => {
            serde_json::from_str(&contents).map_err(|source| ConvertError::ParseSettings {
                path: path.to_path_buf(),
                source,
            })?
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("No settings at {:?}, starting from an empty document", path);
            Value::Object(Map::new())
        }
        Err(source) => {
            return Err(ConvertError::ReadInput {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let (document, stats) =
        merge_into_settings(document, new).map_err(|reason| ConvertError::SettingsShape {
            path: path.to_path_buf(),
            reason,
        })?;

    write_json_atomic(path, &document)?;
    tracing::info!(
        added = stats.added,
        total = stats.total,
        "Merged entries into {:?}",
        path
    );

    Ok(stats)
}
