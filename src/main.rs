// src/main.rs
use std::path::PathBuf;

use anyhow::{Context, bail};
use graphlex::lexer::{GrammarTemplate, ScanEngine, StateGraph, io::save_tokens_json};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(src_path) = args.next().map(PathBuf::from) else {
        bail!("usage: graphlex <source-file> [tokens.json]");
    };
    let out_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("output.json"));

    let src = std::fs::read_to_string(&src_path)
        .with_context(|| format!("reading {}", src_path.display()))?;

    let graph = StateGraph::compile(&GrammarTemplate::c_like());
    let result = ScanEngine::new(&graph).scan(src.lines());

    println!("TOKENS:");
    for t in &result.entries {
        match (t.id, &t.content) {
            (Some(id), Some(content)) => println!(
                "#{id:04}  {:?}  {content:?}  @{}:{}",
                t.token_type, t.location.row, t.location.col
            ),
            _ => println!(
                "       {:?}  @{}:{}",
                t.token_type, t.location.row, t.location.col
            ),
        }
    }

    save_tokens_json(&out_path, &result)
        .with_context(|| format!("writing {}", out_path.display()))?;

    if !result.success {
        bail!("unrecognized characters in {}", src_path.display());
    }
    Ok(())
}
