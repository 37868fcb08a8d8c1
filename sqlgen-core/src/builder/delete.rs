//! DELETE query builder module

use super::common::{QueryBuilder, StatementText};

/// DELETE query builder
///
/// Without a WHERE condition the statement targets every row.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteBuilder {
    table_name: String,
    where_clause: Option<String>,
}

impl DeleteBuilder {
    /// Create a new DELETE query builder
    pub fn new(table: &str) -> Self {
        Self {
            table_name: table.to_string(),
            where_clause: None,
        }
    }

    /// Set the WHERE condition
    pub fn add_where(mut self, condition: impl Into<String>) -> Self {
        self.where_clause = Some(condition.into());
        self
    }
}

impl QueryBuilder for DeleteBuilder {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    fn build(&self) -> String {
        let mut sql = StatementText::new();

        sql.line(&format!("DELETE FROM {}", self.table_name));
        sql.optional_line("WHERE", self.where_clause.as_deref());

        sql.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_delete;

    #[test]
    fn test_delete_builder() {
        let query = create_delete("users").add_where("age < 18");
        assert_eq!(query.build(), "DELETE FROM users\nWHERE age < 18;");
    }

    #[test]
    fn test_delete_without_where() {
        let query = create_delete("users");
        assert_eq!(query.build(), "DELETE FROM users;");
    }

    #[test]
    fn test_last_where_wins() {
        let query = create_delete("users")
            .add_where("age < 18")
            .add_where("status = 'inactive'");
        assert_eq!(query.build(), "DELETE FROM users\nWHERE status = 'inactive';");
    }

    #[test]
    fn test_empty_table_name_still_terminates() {
        let query = create_delete("");
        assert_eq!(query.build(), "DELETE FROM;");
    }
}
