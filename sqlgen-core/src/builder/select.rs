//! SELECT query builder implementation

use super::common::{IntoColumns, QueryBuilder, StatementText};

/// SELECT query builder
///
/// Columns and joins accumulate; WHERE, ORDER BY and LIMIT keep only the
/// last value given.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectBuilder {
    table_name: String,
    columns: Vec<String>,
    where_clause: Option<String>,
    order_by_clause: Option<String>,
    limit_value: Option<i64>,
    join_clauses: Vec<String>,
}

impl SelectBuilder {
    /// Create a new SELECT query builder
    pub fn new(table: &str) -> Self {
        Self {
            table_name: table.to_string(),
            columns: Vec::new(),
            where_clause: None,
            order_by_clause: None,
            limit_value: None,
            join_clauses: Vec::new(),
        }
    }

    /// Append columns to the projection
    ///
    /// # Examples
    /// ```
    /// use sqlgen_core::{create_select, QueryBuilder};
    ///
    /// let sql = create_select("users")
    ///     .add_columns(("id", "name"))
    ///     .add_columns("email")
    ///     .build();
    /// assert_eq!(sql, "SELECT id, name, email\nFROM users;");
    /// ```
    pub fn add_columns<T>(mut self, columns: T) -> Self
    where
        T: IntoColumns,
    {
        self.columns.extend(columns.into_columns());
        self
    }

    /// Set the WHERE condition
    pub fn add_where(mut self, condition: impl Into<String>) -> Self {
        self.where_clause = Some(condition.into());
        self
    }

    /// Set the ORDER BY expression, e.g. `"name DESC"`
    pub fn add_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by_clause = Some(order_by.into());
        self
    }

    /// Set the LIMIT clause
    pub fn add_limit(mut self, limit: i64) -> Self {
        self.limit_value = Some(limit);
        self
    }

    /// Add a JOIN against this builder's table
    ///
    /// Renders `{join_type} JOIN {table} ON {table}.{column} = {main}.{main_table_column}`.
    pub fn add_join(
        mut self,
        join_type: impl Into<String>,
        table: &str,
        column: &str,
        main_table_column: &str,
    ) -> Self {
        self.join_clauses.push(format!(
            "{} JOIN {} ON {}.{} = {}.{}",
            join_type.into(),
            table,
            table,
            column,
            self.table_name,
            main_table_column
        ));
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn join_clauses(&self) -> &[String] {
        &self.join_clauses
    }
}

impl QueryBuilder for SelectBuilder {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    fn build(&self) -> String {
        let mut sql = StatementText::new();

        // SELECT clause
        if self.columns.is_empty() {
            sql.line("SELECT *");
        } else {
            sql.line(&format!("SELECT {}", self.columns.join(", ")));
        }

        // FROM clause
        sql.line(&format!("FROM {}", self.table_name));

        // JOIN clauses
        for join in &self.join_clauses {
            sql.line(join);
        }

        sql.optional_line("WHERE", self.where_clause.as_deref());
        sql.optional_line("ORDER BY", self.order_by_clause.as_deref());

        // LIMIT clause
        if let Some(limit) = self.limit_value {
            sql.line(&format!("LIMIT {}", limit));
        }

        sql.finish()
    }
}
