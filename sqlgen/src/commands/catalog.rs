//! Catalog command - list what the other commands accept

use anyhow::Result;
use serde_json::json;
use sqlgen_core::{JoinType, Operator, StatementKind};

pub fn execute(as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&catalog_json())?);
        return Ok(());
    }

    let kinds: Vec<&str> = StatementKind::ALL.iter().map(|k| k.as_str()).collect();
    let operators: Vec<&str> = Operator::ALL.iter().map(|op| op.as_str()).collect();
    let joins: Vec<&str> = JoinType::ALL.iter().map(|j| j.as_str()).collect();

    println!("Statement kinds: {}", kinds.join(", "));
    println!("Operators:       {}", operators.join(", "));
    println!("Join types:      {}", joins.join(", "));
    Ok(())
}

fn catalog_json() -> serde_json::Value {
    let operators: Vec<&str> = Operator::ALL.iter().map(|op| op.as_str()).collect();
    json!({
        "kinds": StatementKind::ALL,
        "operators": operators,
        "join_types": JoinType::ALL,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_json_shape() {
        let value = catalog_json();
        assert_eq!(value["kinds"], json!(["SELECT", "INSERT", "UPDATE", "DELETE"]));
        assert_eq!(value["operators"][1], "<>");
        assert_eq!(value["operators"].as_array().unwrap().len(), 9);
        assert_eq!(value["join_types"], json!(["INNER", "LEFT", "RIGHT", "FULL"]));
    }
}
