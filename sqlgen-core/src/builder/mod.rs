//! Query builder module

pub mod common;
pub mod delete;
pub mod insert;
pub mod select;
pub mod update;

// Re-export types from submodules
pub use common::{IntoColumns, QueryBuilder, SetClauses};
pub use delete::DeleteBuilder;
pub use insert::InsertBuilder;
pub use select::SelectBuilder;
pub use update::UpdateBuilder;
