//! INSERT query builder implementation

use super::common::{QueryBuilder, SetClauses, StatementText};

/// INSERT query builder
///
/// Columns and values live in one ordered association, so the rendered
/// column list and VALUES list always line up.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertBuilder {
    table_name: String,
    values: SetClauses,
    where_clause: Option<String>,
}

impl InsertBuilder {
    /// Create a new INSERT query builder
    pub fn new(table: &str) -> Self {
        Self {
            table_name: table.to_string(),
            values: SetClauses::new(),
            where_clause: None,
        }
    }

    /// Add a value for a column; a repeated column overwrites its value
    ///
    /// The value is inserted verbatim, format it first if it needs quoting.
    ///
    /// # Examples
    /// ```
    /// use sqlgen_core::{create_insert, format_value, QueryBuilder};
    ///
    /// let sql = create_insert("users")
    ///     .add_value("name", format_value("John"))
    ///     .add_value("age", format_value("30"))
    ///     .build();
    /// assert_eq!(sql, "INSERT INTO users (name, age)\nVALUES ('John', 30);");
    /// ```
    pub fn add_value(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.upsert(column.into(), value.into());
        self
    }

    /// Set a WHERE condition.
    ///
    /// Plain INSERT has no WHERE, but the clause is rendered when present.
    pub fn add_where(mut self, condition: impl Into<String>) -> Self {
        self.where_clause = Some(condition.into());
        self
    }

    pub fn values(&self) -> &SetClauses {
        &self.values
    }
}

impl QueryBuilder for InsertBuilder {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    fn build(&self) -> String {
        let mut sql = StatementText::new();

        let columns: Vec<&str> = self.values.columns().collect();
        let values: Vec<&str> = self.values.values().collect();

        sql.line(&format!(
            "INSERT INTO {} ({})",
            self.table_name,
            columns.join(", ")
        ));
        sql.line(&format!("VALUES ({})", values.join(", ")));
        sql.optional_line("WHERE", self.where_clause.as_deref());

        sql.finish()
    }
}
