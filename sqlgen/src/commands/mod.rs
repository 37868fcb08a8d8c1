pub mod catalog;
pub mod generate;
pub mod request;

use anyhow::{bail, Result};
use sqlgen_core::{Command, QueryRequest, StatementKind};

/// Assemble `request` as `kind` behind a guard that wants a table name
pub(crate) fn render(kind: &str, request: &QueryRequest) -> Result<String> {
    if let Ok(parsed) = kind.parse::<StatementKind>() {
        if !parsed.accepts_values() && !request.values.is_empty() {
            tracing::warn!(kind = %parsed, count = request.values.len(), "values are ignored for this statement kind");
        }
    }

    let command = Command::new(Some(|| sqlgen_core::generate(kind, request)))?
        .with_can_execute(|| !request.table.trim().is_empty());

    if !command.can_execute() {
        bail!("a table name is required");
    }
    Ok(command.execute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlgen_core::UNKNOWN_KIND_PLACEHOLDER;

    #[test]
    fn test_render_requires_table() {
        let err = render("SELECT", &QueryRequest::new("  ")).unwrap_err();
        assert_eq!(err.to_string(), "a table name is required");
    }

    #[test]
    fn test_render_builds_statement() {
        let sql = render("DELETE", &QueryRequest::new("Users")).unwrap();
        assert_eq!(sql, "DELETE FROM Users;");
    }

    #[test]
    fn test_render_passes_placeholder_through() {
        let sql = render("TRUNCATE", &QueryRequest::new("Users")).unwrap();
        assert_eq!(sql, UNKNOWN_KIND_PLACEHOLDER);
    }
}
