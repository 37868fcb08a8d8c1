//! sqlgen core - fluent builders that compose SQL statements as text
//!
//! Four builders (SELECT, INSERT, UPDATE, DELETE) collect caller-supplied
//! fragments and render them in a fixed clause order. Nothing is parsed,
//! validated or executed: fragments are inserted verbatim, and values are
//! only classified as numeric or quoted text.
//!
//! ```
//! use sqlgen_core::{create_select, QueryBuilder};
//!
//! let sql = create_select("Users")
//!     .add_columns(("Name", "Age"))
//!     .add_where("Age > 18")
//!     .add_order_by("Name ASC")
//!     .add_limit(10)
//!     .build();
//!
//! assert_eq!(sql, "SELECT Name, Age\nFROM Users\nWHERE Age > 18\nORDER BY Name ASC\nLIMIT 10;");
//! ```

pub mod assembly;
pub mod builder;
pub mod command;
pub mod error;
pub mod factory;
pub mod format;
pub mod kind;
pub mod operator;

// Re-export main types
pub use assembly::{
    generate, generate_kind, split_list, Filter, JoinSpec, QueryRequest, UNKNOWN_KIND_PLACEHOLDER,
};
pub use builder::{
    DeleteBuilder, InsertBuilder, IntoColumns, QueryBuilder, SelectBuilder, SetClauses,
    UpdateBuilder,
};
pub use command::Command;
pub use error::{Error, Result};
pub use factory::{create_delete, create_insert, create_select, create_update};
pub use format::{format_value, is_numeric};
pub use kind::StatementKind;
pub use operator::{JoinType, Operator};
