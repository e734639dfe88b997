#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Encode `text` as UTF-16LE with a leading byte-order mark
pub fn utf16le_with_bom(text: &str) -> Vec<u8> {
    std::iter::once(0xFEFF)
        .chain(text.encode_utf16())
        .flat_map(u16::to_le_bytes)
        .collect()
}

pub fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Write an ATOK export into `dir` and return its path
pub fn write_export(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, utf16le_with_bom(text)).unwrap();
    path
}

pub fn write_settings(dir: &TempDir, json: &serde_json::Value) -> PathBuf {
    let path = dir.path().join("settings.json");
    fs::write(&path, serde_json::to_string_pretty(json).unwrap()).unwrap();
    path
}

pub fn read_json(path: &PathBuf) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

pub const HEADER: &str = "!!ATOK_TANGO_TEXT_HEADER_1\r\n!!対象辞書;標準辞書セット\r\n!!単語ファイル;\r\n";
