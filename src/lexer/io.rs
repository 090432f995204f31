// src/lexer/io.rs
use std::io::{BufWriter, Write};

use super::graph::GrammarTemplate;
use super::scan::{ScanResult, Token};

/// Write the entry list as pretty-printed JSON. The success flag is an API
/// result, not part of the persisted stream.
pub fn save_tokens_json(path: &std::path::Path, result: &ScanResult) -> std::io::Result<()> {
    let f = std::fs::File::create(path)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &result.entries)?;
    w.flush()
}

pub fn load_tokens_json_bytes(data: &[u8]) -> Result<Vec<Token>, String> {
    serde_json::from_slice(data).map_err(|e| format!("Failed to parse tokens JSON: {e}"))
}

pub fn load_template_json_bytes(data: &[u8]) -> Result<GrammarTemplate, String> {
    serde_json::from_slice(data).map_err(|e| format!("Failed to parse grammar template JSON: {e}"))
}
