//! Constructors for each statement kind

use crate::builder::{DeleteBuilder, InsertBuilder, SelectBuilder, UpdateBuilder};

/// Create a new SELECT query builder for the given table
pub fn create_select(table: &str) -> SelectBuilder {
    SelectBuilder::new(table)
}

/// Create a new INSERT query builder for the given table
pub fn create_insert(table: &str) -> InsertBuilder {
    InsertBuilder::new(table)
}

/// Create a new UPDATE query builder for the given table
pub fn create_update(table: &str) -> UpdateBuilder {
    UpdateBuilder::new(table)
}

/// Create a new DELETE query builder for the given table
pub fn create_delete(table: &str) -> DeleteBuilder {
    DeleteBuilder::new(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QueryBuilder;

    #[test]
    fn test_builders_start_unmutated() {
        assert_eq!(create_select("t"), SelectBuilder::new("t"));
        assert_eq!(create_insert("t"), InsertBuilder::new("t"));
        assert_eq!(create_update("t"), UpdateBuilder::new("t"));
        assert_eq!(create_delete("t"), DeleteBuilder::new("t"));
    }

    #[test]
    fn test_each_call_is_independent() {
        let first = create_select("users").add_columns("id");
        let second = create_select("users");
        assert_eq!(first.build(), "SELECT id\nFROM users;");
        assert_eq!(second.build(), "SELECT *\nFROM users;");
    }

    #[test]
    fn test_table_name_is_kept() {
        assert_eq!(create_select("a").table_name(), "a");
        assert_eq!(create_insert("b").table_name(), "b");
        assert_eq!(create_update("c").table_name(), "c");
        assert_eq!(create_delete("d").table_name(), "d");
    }
}
