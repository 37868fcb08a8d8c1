//! UPDATE query builder module

use super::common::{QueryBuilder, SetClauses, StatementText};

/// UPDATE query builder
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBuilder {
    table_name: String,
    set_clauses: SetClauses,
    where_clause: Option<String>,
}

impl UpdateBuilder {
    /// Create a new UPDATE query builder
    pub fn new(table: &str) -> Self {
        Self {
            table_name: table.to_string(),
            set_clauses: SetClauses::new(),
            where_clause: None,
        }
    }

    /// Assign a value to a column; a repeated column overwrites its value
    ///
    /// # Examples
    /// ```
    /// use sqlgen_core::{create_update, QueryBuilder};
    ///
    /// let sql = create_update("users")
    ///     .add_set("name", "'Jane'")
    ///     .add_set("age", "25")
    ///     .add_where("id = 1")
    ///     .build();
    /// assert_eq!(sql, "UPDATE users\nSET name = 'Jane', age = 25\nWHERE id = 1;");
    /// ```
    pub fn add_set(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_clauses.upsert(column.into(), value.into());
        self
    }

    /// Set the WHERE condition
    pub fn add_where(mut self, condition: impl Into<String>) -> Self {
        self.where_clause = Some(condition.into());
        self
    }

    pub fn set_clauses(&self) -> &SetClauses {
        &self.set_clauses
    }
}

impl QueryBuilder for UpdateBuilder {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    fn build(&self) -> String {
        let mut sql = StatementText::new();

        sql.line(&format!("UPDATE {}", self.table_name));

        // An empty SET list still renders the keyword
        let set_parts: Vec<String> = self
            .set_clauses
            .iter()
            .map(|(column, value)| format!("{} = {}", column, value))
            .collect();
        sql.line(&format!("SET {}", set_parts.join(", ")));

        sql.optional_line("WHERE", self.where_clause.as_deref());

        sql.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_update;

    #[test]
    fn test_update_builder() {
        let query = create_update("users")
            .add_set("name", "'Jane'")
            .add_where("id = 1");
        assert_eq!(query.build(), "UPDATE users\nSET name = 'Jane'\nWHERE id = 1;");
    }

    #[test]
    fn test_update_set_overwrites() {
        let query = create_update("users")
            .add_set("status", "'new'")
            .add_set("score", "1")
            .add_set("status", "'done'");
        assert_eq!(
            query.build(),
            "UPDATE users\nSET status = 'done', score = 1;"
        );
    }

    #[test]
    fn test_update_without_set() {
        // The keyword keeps its trailing space when a WHERE line follows
        let query = create_update("users").add_where("id = 1");
        assert_eq!(query.build(), "UPDATE users\nSET \nWHERE id = 1;");
    }

    #[test]
    fn test_update_without_set_or_where() {
        let query = create_update("users");
        assert_eq!(query.build(), "UPDATE users\nSET;");
    }

    #[test]
    fn test_build_is_idempotent() {
        let query = create_update("users").add_set("a", "1");
        assert_eq!(query.build(), query.build());
    }
}
