//! Turning a bag of form-style fragments into one SQL statement
//!
//! A front end collects whatever the user filled in (columns, values, a
//! filter, ordering, a limit, a join) into a [`QueryRequest`] and hands it
//! to [`generate`] together with the statement kind. Which optional clauses
//! end up in the statement depends on which inputs are present.

use serde::{Deserialize, Serialize};

use crate::builder::{DeleteBuilder, InsertBuilder, QueryBuilder, SelectBuilder, UpdateBuilder};
use crate::factory::{create_delete, create_insert, create_select, create_update};
use crate::format::format_value;
use crate::kind::StatementKind;
use crate::operator::is_null_check;
use crate::Result;

/// Returned by [`generate`] when the statement kind is not recognised
pub const UNKNOWN_KIND_PLACEHOLDER: &str = "Unknown query type";

/// A single `column operator value` filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    pub column: String,
    pub operator: String,
    /// Absent for `IS NULL` / `IS NOT NULL`
    pub value: Option<String>,
}

impl Filter {
    pub fn new(column: impl Into<String>, operator: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            operator: operator.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Render the WHERE condition, or `None` when the filter is incomplete.
    ///
    /// Column and operator must be non-empty, and a value is required
    /// unless the operator is a NULL test.
    ///
    /// # Examples
    /// ```
    /// use sqlgen_core::{Filter, Operator};
    ///
    /// let filter = Filter::new("Age", Operator::GT).with_value("18");
    /// assert_eq!(filter.to_condition().as_deref(), Some("Age > 18"));
    ///
    /// let filter = Filter::new("Email", Operator::IS_NULL);
    /// assert_eq!(filter.to_condition().as_deref(), Some("Email IS NULL"));
    ///
    /// let filter = Filter::new("Name", Operator::EQ).with_value("");
    /// assert_eq!(filter.to_condition(), None);
    /// ```
    pub fn to_condition(&self) -> Option<String> {
        if self.column.is_empty() || self.operator.is_empty() {
            return None;
        }

        let value = self.value.as_deref().filter(|v| !v.is_empty());
        if is_null_check(&self.operator) {
            Some(format!("{} {}", self.column, self.operator))
        } else {
            value.map(|v| format!("{} {} {}", self.column, self.operator, format_value(v)))
        }
    }
}

/// The four parts of a join form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinSpec {
    pub join_type: String,
    pub table: String,
    pub column: String,
    pub main_table_column: String,
}

impl JoinSpec {
    pub fn new(
        join_type: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
        main_table_column: impl Into<String>,
    ) -> Self {
        Self {
            join_type: join_type.into(),
            table: table.into(),
            column: column.into(),
            main_table_column: main_table_column.into(),
        }
    }

    /// A join is only applied when every field is filled in
    pub fn is_complete(&self) -> bool {
        !self.join_type.is_empty()
            && !self.table.is_empty()
            && !self.column.is_empty()
            && !self.main_table_column.is_empty()
    }
}

/// User-supplied fragments for one statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryRequest {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<String>,
    pub filter: Option<Filter>,
    pub order_by: Option<String>,
    pub limit: Option<i64>,
    pub join: Option<JoinSpec>,
}

impl QueryRequest {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Parse a request from its JSON form; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_join(mut self, join: JoinSpec) -> Self {
        self.join = Some(join);
        self
    }

    fn where_condition(&self) -> Option<String> {
        self.filter.as_ref().and_then(Filter::to_condition)
    }
}

/// Split a comma-separated list the way form fields are entered.
///
/// Empty segments are dropped before trimming, so a whitespace-only segment
/// survives as an empty string.
///
/// # Examples
/// ```
/// use sqlgen_core::split_list;
///
/// assert_eq!(split_list("Name, Age,,Email "), vec!["Name", "Age", "Email"]);
/// ```
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.trim().to_string())
        .collect()
}

/// Assemble a statement of the named kind.
///
/// `kind` must be exactly `SELECT`, `INSERT`, `UPDATE` or `DELETE`; anything
/// else yields [`UNKNOWN_KIND_PLACEHOLDER`] instead of an error.
///
/// # Examples
/// ```
/// use sqlgen_core::{generate, Filter, QueryRequest};
///
/// let request = QueryRequest::new("Users")
///     .with_columns(["Name", "Age"])
///     .with_filter(Filter::new("Age", ">").with_value("18"))
///     .with_order_by("Name ASC")
///     .with_limit(10);
///
/// assert_eq!(
///     generate("SELECT", &request),
///     "SELECT Name, Age\nFROM Users\nWHERE Age > 18\nORDER BY Name ASC\nLIMIT 10;"
/// );
/// ```
pub fn generate(kind: &str, request: &QueryRequest) -> String {
    match kind.parse::<StatementKind>() {
        Ok(kind) => generate_kind(kind, request),
        Err(err) => {
            tracing::warn!(%err, "cannot assemble statement");
            UNKNOWN_KIND_PLACEHOLDER.to_string()
        }
    }
}

/// Assemble a statement of an already-parsed kind
pub fn generate_kind(kind: StatementKind, request: &QueryRequest) -> String {
    let sql = match kind {
        StatementKind::Select => assemble_select(request).build(),
        StatementKind::Insert => assemble_insert(request).build(),
        StatementKind::Update => assemble_update(request).build(),
        StatementKind::Delete => assemble_delete(request).build(),
    };
    tracing::trace!(%kind, sql = %sql, "statement built");
    sql
}

/// Build the SELECT for a request without rendering it
pub fn assemble_select(request: &QueryRequest) -> SelectBuilder {
    let mut query = create_select(&request.table).add_columns(request.columns.as_slice());

    let join = request.join.as_ref().filter(|join| join.is_complete());
    if let Some(join) = join {
        query = query.add_join(
            join.join_type.as_str(),
            &join.table,
            &join.column,
            &join.main_table_column,
        );
    }

    if let Some(order_by) = &request.order_by {
        query = query.add_order_by(order_by.as_str());
    }

    let condition = request.where_condition();
    if let Some(condition) = &condition {
        query = query.add_where(condition.as_str());
    }

    if let Some(limit) = request.limit {
        query = query.add_limit(limit);
    }

    tracing::debug!(
        table = %request.table,
        columns = request.columns.len(),
        join = join.is_some(),
        filtered = condition.is_some(),
        limit = ?request.limit,
        "assembled SELECT"
    );
    query
}

/// Build the INSERT for a request.
///
/// Columns pair with values by position; whichever list is longer is cut
/// to the length of the other.
pub fn assemble_insert(request: &QueryRequest) -> InsertBuilder {
    let mut query = create_insert(&request.table);

    for (column, value) in request.columns.iter().zip(&request.values) {
        query = query.add_value(column.as_str(), format_value(value));
    }

    let condition = request.where_condition();
    if let Some(condition) = &condition {
        query = query.add_where(condition.as_str());
    }

    tracing::debug!(
        table = %request.table,
        pairs = request.columns.len().min(request.values.len()),
        dropped = request.columns.len().abs_diff(request.values.len()),
        filtered = condition.is_some(),
        "assembled INSERT"
    );
    query
}

/// Build the UPDATE for a request.
///
/// A column is only assigned when its own name also appears among the
/// values. The assigned value is the one at the column's (first) position
/// in the column list; columns whose position lies past the end of the
/// value list are skipped.
pub fn assemble_update(request: &QueryRequest) -> UpdateBuilder {
    let mut query = create_update(&request.table);

    for (position, column) in request.columns.iter().enumerate() {
        if !request.values.contains(column) {
            continue;
        }

        let index = request
            .columns
            .iter()
            .position(|c| c == column)
            .unwrap_or(position);
        match request.values.get(index) {
            Some(value) => query = query.add_set(column.as_str(), format_value(value)),
            None => tracing::debug!(%column, index, "no value at column index, skipping"),
        }
    }

    let condition = request.where_condition();
    if let Some(condition) = &condition {
        query = query.add_where(condition.as_str());
    }

    tracing::debug!(
        table = %request.table,
        sets = query.set_clauses().len(),
        filtered = condition.is_some(),
        "assembled UPDATE"
    );
    query
}

/// Build the DELETE for a request; only the filter is consulted
pub fn assemble_delete(request: &QueryRequest) -> DeleteBuilder {
    let mut query = create_delete(&request.table);

    let condition = request.where_condition();
    if let Some(condition) = &condition {
        query = query.add_where(condition.as_str());
    }

    tracing::debug!(table = %request.table, filtered = condition.is_some(), "assembled DELETE");
    query
}
