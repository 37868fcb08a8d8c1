//! Filter operators and join types offered to front ends

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Comparison operator for a filter condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator(&'static str);

impl Operator {
    pub const EQ: Self = Operator("=");
    pub const NEQ: Self = Operator("<>");
    pub const GT: Self = Operator(">");
    pub const LT: Self = Operator("<");
    pub const GTE: Self = Operator(">=");
    pub const LTE: Self = Operator("<=");
    pub const LIKE: Self = Operator("LIKE");
    pub const IS_NULL: Self = Operator("IS NULL");
    pub const IS_NOT_NULL: Self = Operator("IS NOT NULL");

    /// Every operator a filter form offers, in display order
    pub const ALL: [Operator; 9] = [
        Self::EQ,
        Self::NEQ,
        Self::GT,
        Self::LT,
        Self::GTE,
        Self::LTE,
        Self::LIKE,
        Self::IS_NULL,
        Self::IS_NOT_NULL,
    ];

    /// Create a custom operator for database-specific comparisons
    ///
    /// # Examples
    /// ```
    /// use sqlgen_core::Operator;
    ///
    /// let ilike = Operator::custom("ILIKE");
    /// assert!(!ilike.is_null_check());
    /// ```
    pub const fn custom(op: &'static str) -> Self {
        Operator(op)
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Whether this operator is unary and takes no right-hand value
    pub fn is_null_check(&self) -> bool {
        is_null_check(self.0)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.0.to_string()
    }
}

/// Whether an operator's text names a NULL test (`IS NULL`, `IS NOT NULL`).
///
/// Plain substring match, so any operator text containing `NULL` counts.
pub fn is_null_check(operator: &str) -> bool {
    operator.contains("NULL")
}

/// JOIN types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

impl JoinType {
    pub const ALL: [JoinType; 4] = [JoinType::Inner, JoinType::Left, JoinType::Right, JoinType::Full];

    pub fn as_str(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER",
            JoinType::Left => "LEFT",
            JoinType::Right => "RIGHT",
            JoinType::Full => "FULL",
        }
    }
}

impl Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<JoinType> for String {
    fn from(join_type: JoinType) -> Self {
        join_type.as_str().to_string()
    }
}
