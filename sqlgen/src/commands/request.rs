//! Request command - build a statement from a JSON document

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use sqlgen_core::QueryRequest;

/// `{"kind": "SELECT", "request": {...}}`
#[derive(Debug, Deserialize)]
pub(crate) struct RequestDocument {
    pub kind: String,
    #[serde(default)]
    pub request: QueryRequest,
}

pub fn execute(path: &Path) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read request file {}", path.display()))?;
    let document = parse(&text)
        .with_context(|| format!("invalid request document {}", path.display()))?;

    tracing::debug!(kind = %document.kind, table = %document.request.table, "loaded request");

    let sql = super::render(&document.kind, &document.request)?;
    println!("{}", sql);
    Ok(())
}

pub(crate) fn parse(text: &str) -> Result<RequestDocument> {
    Ok(serde_json::from_str(text)?)
}
