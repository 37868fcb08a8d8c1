//! Common types and traits shared across all query builders

/// Core trait for all query builders
pub trait QueryBuilder {
    /// The table this statement targets
    fn table_name(&self) -> &str;

    /// Render the statement.
    ///
    /// Repeated calls without intervening mutation return identical text.
    fn build(&self) -> String;
}

/// Trait to convert various types into columns
pub trait IntoColumns {
    fn into_columns(self) -> Vec<String>;
}

impl IntoColumns for &str {
    fn into_columns(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoColumns for String {
    fn into_columns(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoColumns for Vec<String> {
    fn into_columns(self) -> Vec<String> {
        self
    }
}

impl IntoColumns for Vec<&str> {
    fn into_columns(self) -> Vec<String> {
        self.into_iter().map(|s| s.to_string()).collect()
    }
}

impl IntoColumns for &[String] {
    fn into_columns(self) -> Vec<String> {
        self.to_vec()
    }
}

impl IntoColumns for &[&str] {
    fn into_columns(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoColumns for [&str; N] {
    fn into_columns(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

// For tuples
impl IntoColumns for (&str, &str) {
    fn into_columns(self) -> Vec<String> {
        vec![self.0.to_string(), self.1.to_string()]
    }
}

impl IntoColumns for (&str, &str, &str) {
    fn into_columns(self) -> Vec<String> {
        vec![self.0.to_string(), self.1.to_string(), self.2.to_string()]
    }
}

impl IntoColumns for (&str, &str, &str, &str) {
    fn into_columns(self) -> Vec<String> {
        vec![
            self.0.to_string(),
            self.1.to_string(),
            self.2.to_string(),
            self.3.to_string(),
        ]
    }
}

/// Column to value assignments in first-insertion order.
///
/// Writing an existing column replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetClauses {
    entries: Vec<(String, String)>,
}

impl SetClauses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the value for `column`
    pub fn upsert(&mut self, column: String, value: String) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }
}

/// Accumulates statement lines and finishes them with a semicolon
#[derive(Debug, Default)]
pub(crate) struct StatementText {
    sql: String,
}

impl StatementText {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn line(&mut self, text: &str) {
        self.sql.push_str(text);
        self.sql.push('\n');
    }

    /// Emit `{keyword} {clause}` unless the clause is absent or empty
    pub(crate) fn optional_line(&mut self, keyword: &str, clause: Option<&str>) {
        if let Some(clause) = clause.filter(|c| !c.is_empty()) {
            self.line(&format!("{} {}", keyword, clause));
        }
    }

    pub(crate) fn finish(self) -> String {
        let mut sql = self.sql.trim().to_string();
        sql.push(';');
        sql
    }
}
