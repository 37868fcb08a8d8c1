//! Statement kinds

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The four statement kinds sqlgen can assemble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    pub const ALL: [StatementKind; 4] = [
        StatementKind::Select,
        StatementKind::Insert,
        StatementKind::Update,
        StatementKind::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Select => "SELECT",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
        }
    }

    /// Whether the value list takes part in assembling this kind
    pub fn accepts_values(&self) -> bool {
        matches!(self, StatementKind::Insert | StatementKind::Update)
    }
}

impl Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exact, case-sensitive match against `SELECT`, `INSERT`, `UPDATE`, `DELETE`
impl FromStr for StatementKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SELECT" => Ok(StatementKind::Select),
            "INSERT" => Ok(StatementKind::Insert),
            "UPDATE" => Ok(StatementKind::Update),
            "DELETE" => Ok(StatementKind::Delete),
            _ => Err(Error::unknown_statement_kind(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        for kind in StatementKind::ALL {
            assert_eq!(kind.as_str().parse::<StatementKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "select".parse::<StatementKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownStatementKind { .. }));
    }

    #[test]
    fn test_parse_rejects_padding() {
        assert!(" SELECT".parse::<StatementKind>().is_err());
        assert!("".parse::<StatementKind>().is_err());
    }

    #[test]
    fn test_accepts_values() {
        assert!(StatementKind::Insert.accepts_values());
        assert!(StatementKind::Update.accepts_values());
        assert!(!StatementKind::Select.accepts_values());
        assert!(!StatementKind::Delete.accepts_values());
    }

    #[test]
    fn test_serde_uses_keywords() {
        assert_eq!(serde_json::to_string(&StatementKind::Delete).unwrap(), "\"DELETE\"");
        let kind: StatementKind = serde_json::from_str("\"UPDATE\"").unwrap();
        assert_eq!(kind, StatementKind::Update);
    }
}
